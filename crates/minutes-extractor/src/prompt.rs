//! LLM prompt for action item extraction
//!
//! Nothing in this crate sends the prompt anywhere; it documents the
//! contract a model-backed extractor would follow and pairs with
//! [`parse_llm_response`](crate::parse_llm_response).

use chrono::NaiveDate;
use minutes_domain::due_date::{ISO_FORMAT, NOT_FOUND};
use minutes_domain::owner::UNASSIGNED_OWNER;

/// Builds prompts asking an LLM to extract action items
pub struct PromptBuilder {
    transcript: String,
    reference_date: Option<NaiveDate>,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            reference_date: None,
        }
    }

    /// Tell the model what "today" is so it can resolve relative dates
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(&system_prompt());
        prompt.push_str("\n\n");

        if let Some(date) = self.reference_date {
            prompt.push_str(&format!(
                "Today is {} ({}).\n\n",
                date.format(ISO_FORMAT),
                date.format("%A")
            ));
        }

        prompt.push_str("Meeting transcript:\n");
        prompt.push_str("---\n");
        prompt.push_str(&self.transcript);
        prompt.push_str("\n---\n\n");

        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

/// Instructions for a model acting as the extractor
pub fn system_prompt() -> String {
    format!(
        r#"You read meeting transcripts and list the action items they contain.

Return a JSON object with one key, "actionItems", holding an array. Every
element has exactly these fields:
- "task": string, a short description of the work
- "owner": string, the person responsible, or "{UNASSIGNED_OWNER}" when nobody is named
- "due_date": string, an ISO date (YYYY-MM-DD), or "{NOT_FOUND}" when no date is given

Rules:
1. Output JSON only, with no markdown formatting.
2. Return an empty array when the transcript has no action items.
3. Infer owners from context where the transcript makes them clear."#
    )
}

const OUTPUT_FORMAT_REMINDER: &str = r#"Output format (JSON object only, no additional text):
{
  "actionItems": [
    { "task": "prepare the slides", "owner": "Sarah", "due_date": "2026-02-20" }
  ]
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_transcript() {
        let prompt = PromptBuilder::new("Alice: please review the PR").build();
        assert!(prompt.contains("Alice: please review the PR"));
        assert!(prompt.contains("Meeting transcript:"));
    }

    #[test]
    fn test_prompt_names_sentinels() {
        let prompt = PromptBuilder::new("text").build();
        assert!(prompt.contains("\"Unassigned\""));
        assert!(prompt.contains("\"Not Found\""));
        assert!(prompt.contains("actionItems"));
    }

    #[test]
    fn test_prompt_includes_reference_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let prompt = PromptBuilder::new("text").with_reference_date(date).build();
        assert!(prompt.contains("Today is 2026-10-19 (Monday)."));
    }

    #[test]
    fn test_prompt_without_reference_date() {
        let prompt = PromptBuilder::new("text").build();
        assert!(!prompt.contains("Today is"));
    }
}
