//! Minutes Extractor
//!
//! Heuristic action item extraction from meeting transcripts.
//!
//! # Overview
//!
//! Transcripts are scanned line by line. Each line the classifier accepts
//! is mined for an owner and a due date, and whatever text remains becomes
//! the task. Everything is deterministic: the same transcript and reference
//! date always produce the same records.
//!
//! # Architecture
//!
//! ```text
//! Transcript → lines → Classifier → Field Extractor → ActionItemCandidate
//!                                        │
//!                                  Date Normalizer
//! ```
//!
//! The prompt builder and LLM response parser describe the same record
//! contract for a model-backed extractor; nothing here calls a model.
//!
//! # Example Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use minutes_extractor::{ExtractionRequest, Extractor, ExtractorConfig};
//!
//! let extractor = Extractor::new(ExtractorConfig::default());
//! let request = ExtractionRequest::new("Action: Update the docs by Friday (@John)")
//!     .with_reference_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
//!
//! let result = extractor.extract(request);
//!
//! assert_eq!(result.items[0].task, "Update the docs");
//! assert_eq!(result.items[0].owner.as_str(), "John");
//! assert_eq!(result.items[0].due_date.to_string(), "2026-10-23");
//! ```

#![warn(missing_docs)]

mod patterns;

mod error;
mod config;
mod types;
mod dates;
mod classifier;
mod fields;
mod prompt;
mod parser;
mod extractor;


pub use error::ExtractorError;
pub use config::ExtractorConfig;
pub use types::{ExtractionMetadata, ExtractionRequest, ExtractionResult};
pub use dates::{normalize as normalize_date, DateResolution};
pub use classifier::is_action_line;
pub use fields::{extract_fields, LineFields};
pub use prompt::{system_prompt, PromptBuilder};
pub use parser::parse_llm_response;
pub use extractor::{extract_action_items, Extractor};
