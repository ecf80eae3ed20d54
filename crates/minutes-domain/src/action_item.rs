//! Action item module - the record produced for each qualifying transcript line

use crate::{DueDate, Owner};
use serde::{Deserialize, Serialize};

/// An action item found in a transcript
///
/// Constructed once per qualifying line and handed to the caller as-is. The
/// persistence collaborator adds identity, timestamps and status on top of
/// these three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionItemCandidate {
    /// What needs to be done, with owner and date text removed
    pub task: String,

    /// Who is responsible
    pub owner: Owner,

    /// When it is due
    pub due_date: DueDate,
}

impl ActionItemCandidate {
    /// Create a new candidate
    ///
    /// # Examples
    ///
    /// ```
    /// use minutes_domain::{ActionItemCandidate, DueDate, Owner};
    ///
    /// let item = ActionItemCandidate::new(
    ///     "prepare the slides",
    ///     Owner::named("Sarah"),
    ///     DueDate::NotFound,
    /// );
    /// assert!(item.validate().is_ok());
    /// ```
    pub fn new(task: impl Into<String>, owner: Owner, due_date: DueDate) -> Self {
        Self {
            task: task.into(),
            owner,
            due_date,
        }
    }

    /// Validate that the candidate has a usable task
    pub fn validate(&self) -> Result<(), String> {
        if self.task.trim().is_empty() {
            return Err("task is empty".to_string());
        }
        if let Owner::Named(name) = &self.owner {
            if name.trim().is_empty() {
                return Err("owner name is empty".to_string());
            }
        }
        Ok(())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    proptest! {
        /// Property: any non-blank name that is not a sentinel stays a named owner
        #[test]
        fn test_named_owner_keeps_trimmed_text(name in "[A-Za-z@][A-Za-z0-9 ]{0,20}") {
            let owner = Owner::from(name.clone());
            let trimmed = name.trim();

            if trimmed.eq_ignore_ascii_case("unassigned") {
                prop_assert_eq!(owner, Owner::Unassigned);
            } else {
                prop_assert_eq!(owner.as_str(), trimmed);
            }
        }

        /// Property: every constructed candidate serializes to three string fields
        #[test]
        fn test_json_fields_are_strings(task in "[a-z ]{6,40}", year in 2000i32..2100, ordinal in 1u32..365) {
            let date = NaiveDate::from_yo_opt(year, ordinal).unwrap();
            let item = ActionItemCandidate::new(task, Owner::Myself, DueDate::On(date));
            let value = serde_json::to_value(&item).unwrap();

            prop_assert!(value["task"].is_string());
            prop_assert!(value["owner"].is_string());
            prop_assert!(value["due_date"].is_string());
        }
    }
}
