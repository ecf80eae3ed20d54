//! Request and response types for extraction

use chrono::NaiveDate;
use minutes_domain::ActionItemCandidate;
use serde::Serialize;

/// Request to extract action items from a transcript
#[derive(Debug, Clone, Default)]
pub struct ExtractionRequest {
    /// Raw transcript text, one utterance per line
    pub text: String,

    /// Day that "tomorrow", "friday" and friends are relative to; overrides
    /// the configured reference date
    pub reference_date: Option<NaiveDate>,
}

impl ExtractionRequest {
    /// Create a request that resolves relative dates from the configuration
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reference_date: None,
        }
    }

    /// Pin the reference date for this request
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }
}

/// Result of an extraction operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// Action items in transcript order
    pub items: Vec<ActionItemCandidate>,

    /// Metadata about the extraction
    pub metadata: ExtractionMetadata,
}

/// Metadata about an extraction operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtractionMetadata {
    /// Day relative dates were resolved against
    pub reference_date: NaiveDate,

    /// Non-blank lines looked at
    pub lines_scanned: usize,

    /// Lines the classifier accepted
    pub action_lines: usize,

    /// Records produced
    pub items_extracted: usize,

    /// Action lines dropped for leaving too little task text
    pub lines_dropped: usize,
}
