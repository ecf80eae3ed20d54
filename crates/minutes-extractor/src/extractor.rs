//! Core Extractor implementation

use crate::classifier::is_action_line;
use crate::config::ExtractorConfig;
use crate::fields::extract_fields;
use crate::types::{ExtractionMetadata, ExtractionRequest, ExtractionResult};
use chrono::NaiveDate;
use minutes_domain::traits::ActionItemExtractor;
use minutes_domain::ActionItemCandidate;
use std::convert::Infallible;
use tracing::{debug, info};

/// The Extractor turns transcript text into action items
///
/// Extraction is a pure function of the text and the reference date: the
/// extractor keeps no state between calls and can be shared freely across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract action items from a transcript
    pub fn extract(&self, request: ExtractionRequest) -> ExtractionResult {
        // Read the clock at most once per transcript
        let today = request
            .reference_date
            .unwrap_or_else(|| self.config.today());

        info!(
            "Starting extraction, text length {}, reference date {}",
            request.text.len(),
            today
        );

        let mut items = Vec::new();
        let mut lines_scanned = 0;
        let mut action_lines = 0;
        let mut lines_dropped = 0;

        for (idx, line) in request.text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            lines_scanned += 1;

            if !is_action_line(line) {
                continue;
            }
            action_lines += 1;

            match extract_fields(line, today, &self.config) {
                Some(fields) => {
                    debug!(
                        line = idx + 1,
                        owner = %fields.owner,
                        due_date = %fields.due_date,
                        "Extracted action item"
                    );
                    items.push(ActionItemCandidate::new(fields.task, fields.owner, fields.due_date));
                }
                None => {
                    debug!(line = idx + 1, "Dropped action line with too little task text");
                    lines_dropped += 1;
                }
            }
        }

        info!(
            "Extraction complete: {} items from {} action lines ({} dropped)",
            items.len(),
            action_lines,
            lines_dropped
        );

        let metadata = ExtractionMetadata {
            reference_date: today,
            lines_scanned,
            action_lines,
            items_extracted: items.len(),
            lines_dropped,
        };

        ExtractionResult { items, metadata }
    }

    /// Extract action items with relative dates resolved against `today`
    pub fn extract_at(&self, transcript: &str, today: NaiveDate) -> Vec<ActionItemCandidate> {
        self.extract(ExtractionRequest::new(transcript).with_reference_date(today))
            .items
    }
}

impl ActionItemExtractor for Extractor {
    type Error = Infallible;

    fn extract_items(
        &self,
        transcript: &str,
        today: NaiveDate,
    ) -> Result<Vec<ActionItemCandidate>, Self::Error> {
        Ok(self.extract_at(transcript, today))
    }
}

/// Extract action items from a transcript with the default configuration
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use minutes_extractor::extract_action_items;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
/// let items = extract_action_items("- Sarah will prepare the slides by 2026-02-20", today);
///
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].task, "prepare the slides");
/// assert_eq!(items[0].owner.as_str(), "Sarah");
/// assert_eq!(items[0].due_date.to_string(), "2026-02-20");
/// ```
pub fn extract_action_items(transcript: &str, today: NaiveDate) -> Vec<ActionItemCandidate> {
    Extractor::default().extract_at(transcript, today)
}
