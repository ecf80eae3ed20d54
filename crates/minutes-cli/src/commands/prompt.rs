//! Prompt command implementation.

use crate::cli::TranscriptArgs;
use crate::commands::read_input;
use crate::config::Config;
use crate::error::Result;
use minutes_extractor::PromptBuilder;

/// Execute the prompt command.
pub fn execute_prompt(args: &TranscriptArgs, config: &Config) -> Result<String> {
    let text = read_input(args.file.as_deref())?;
    let today = args.today.unwrap_or_else(|| config.extractor.today());

    Ok(PromptBuilder::new(text).with_reference_date(today).build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_prompt_embeds_transcript_and_date() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Alice: please review the PR").unwrap();

        let args = TranscriptArgs {
            file: Some(file.path().to_path_buf()),
            today: NaiveDate::from_ymd_opt(2026, 10, 19),
        };
        let output = execute_prompt(&args, &Config::default()).unwrap();

        assert!(output.contains("Alice: please review the PR"));
        assert!(output.contains("Today is 2026-10-19"));
    }
}
