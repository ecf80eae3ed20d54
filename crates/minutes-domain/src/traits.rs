//! Trait definitions for extraction strategies
//!
//! The hosting application talks to extraction through this trait so the
//! heuristic engine can later sit beside other strategies.

use crate::ActionItemCandidate;
use chrono::NaiveDate;

/// Trait for turning transcript text into action items
///
/// Implemented by the application layer (minutes-extractor)
pub trait ActionItemExtractor {
    /// Error type for extraction operations
    type Error;

    /// Extract action items from a transcript, resolving relative dates
    /// against `today`
    fn extract_items(
        &self,
        transcript: &str,
        today: NaiveDate,
    ) -> Result<Vec<ActionItemCandidate>, Self::Error>;
}
