//! Minutes Domain Layer
//!
//! This crate defines the records produced by transcript extraction and the
//! trait boundary that extraction strategies implement. It carries no
//! extraction logic itself.
//!
//! ## Key Concepts
//!
//! - **Action item**: a task found in a transcript, with an owner and a due date
//! - **Owner**: a named person, the speaker themselves, or nobody yet
//! - **Due date**: a calendar date, "upcoming" without a date, or not found
//!
//! ## Sentinels
//!
//! Missing fields are never represented by `None`. Each field has explicit
//! sentinel variants whose wire strings are fixed:
//!
//! | Field      | Variant                 | Wire string     |
//! |------------|-------------------------|-----------------|
//! | `owner`    | [`Owner::Myself`]       | `"User (Self)"` |
//! | `owner`    | [`Owner::Unassigned`]   | `"Unassigned"`  |
//! | `due_date` | [`DueDate::Upcoming`]   | `"Upcoming"`    |
//! | `due_date` | [`DueDate::NotFound`]   | `"Not Found"`   |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action_item;
pub mod due_date;
pub mod owner;
pub mod traits;

// Re-exports for convenience
pub use action_item::ActionItemCandidate;
pub use due_date::DueDate;
pub use owner::Owner;
pub use traits::ActionItemExtractor;
