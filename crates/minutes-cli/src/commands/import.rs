//! Import command implementation.

use crate::cli::TranscriptArgs;
use crate::commands::read_input;
use crate::config::Config;
use crate::error::Result;
use minutes_extractor::parse_llm_response;
use tracing::info;

/// Execute the import command.
pub fn execute_import(args: &TranscriptArgs, config: &Config) -> Result<String> {
    let response = read_input(args.file.as_deref())?;
    let today = args.today.unwrap_or_else(|| config.extractor.today());

    let items = parse_llm_response(&response, today)?;
    info!("Imported {} action items", items.len());

    Ok(serde_json::to_string_pretty(&items)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args(contents: &str) -> (NamedTempFile, TranscriptArgs) {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        let args = TranscriptArgs {
            file: Some(file.path().to_path_buf()),
            today: NaiveDate::from_ymd_opt(2026, 10, 19),
        };
        (file, args)
    }

    #[test]
    fn test_import_normalizes_dates() {
        let (_file, args) = args(
            r#"{"actionItems": [{"task": "send the invoice", "owner": "Raj", "due_date": "tomorrow"}]}"#,
        );
        let output = execute_import(&args, &Config::default()).unwrap();

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json[0]["due_date"], "2026-10-20");
        assert_eq!(json[0]["owner"], "Raj");
    }

    #[test]
    fn test_import_rejects_non_json() {
        let (_file, args) = args("Sure! Here are the action items.");
        let result = execute_import(&args, &Config::default());
        assert!(matches!(result, Err(CliError::Extractor(_))));
    }
}
