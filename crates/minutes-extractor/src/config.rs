//! Configuration for the Extractor

use crate::error::ExtractorError;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Fixed "today" for relative dates; the local clock is read once per
    /// extraction when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,

    /// Shortest task text (characters) worth keeping
    pub min_task_length: usize,

    /// Treat "Speaker: please Name ..." as an instruction to Name
    pub infer_addressee: bool,

    /// Assign "I will ..." and "my ..." lines to the speaker
    pub detect_self_assignment: bool,
}

impl ExtractorConfig {
    /// Resolve the reference date for one extraction
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Pin the reference date
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_task_length == 0 {
            return Err("min_task_length must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            reference_date: None,
            min_task_length: 5,
            infer_addressee: true,
            detect_self_assignment: true,
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: only explicit owners, longer minimum task text
    pub fn strict() -> Self {
        Self {
            reference_date: None,
            min_task_length: 10,
            infer_addressee: false,
            detect_self_assignment: false,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate().map_err(ExtractorError::Config)?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_task_length, 5);
    }

    #[test]
    fn test_strict_config_is_valid() {
        let config = ExtractorConfig::strict();
        assert!(config.validate().is_ok());
        assert!(!config.infer_addressee);
    }

    #[test]
    fn test_invalid_min_task_length() {
        let mut config = ExtractorConfig::default();
        config.min_task_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reference_date_pins_today() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let config = ExtractorConfig::default().with_reference_date(date);
        assert_eq!(config.today(), date);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ExtractorConfig::from_toml("reference_date = \"2026-03-02\"").unwrap();
        assert_eq!(config.reference_date, NaiveDate::from_ymd_opt(2026, 3, 2));
        assert_eq!(config.min_task_length, 5);
        assert!(config.infer_addressee);
    }

    #[test]
    fn test_toml_rejects_invalid_values() {
        let result = ExtractorConfig::from_toml("min_task_length = 0");
        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::strict()
            .with_reference_date(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config, parsed);
    }
}
