//! Error types for the Extractor
//!
//! Transcript extraction itself never fails; these cover configuration and
//! the LLM response contract.

use thiserror::Error;

/// Errors that can occur around extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Response does not follow the expected action item shape
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}

impl From<toml::de::Error> for ExtractorError {
    fn from(e: toml::de::Error) -> Self {
        ExtractorError::Config(format!("Failed to parse TOML: {}", e))
    }
}
