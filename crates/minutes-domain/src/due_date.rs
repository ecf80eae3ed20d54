//! Due date module - when an action item is due

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire string for [`DueDate::Upcoming`]
pub const UPCOMING: &str = "Upcoming";

/// Wire string for [`DueDate::NotFound`]
pub const NOT_FOUND: &str = "Not Found";

/// Calendar format used for every concrete due date
pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Due date of an action item
///
/// Concrete dates serialize as `YYYY-MM-DD`; the two sentinels serialize as
/// their fixed strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DueDate {
    /// A resolved calendar date
    On(NaiveDate),

    /// Due at some unspecified point ("tbd", "soon", "later")
    Upcoming,

    /// No due date was mentioned
    #[default]
    NotFound,
}

impl DueDate {
    /// Parse a `YYYY-MM-DD` string into a concrete due date
    ///
    /// Returns `None` for anything that is not a real calendar date.
    ///
    /// # Examples
    ///
    /// ```
    /// use minutes_domain::DueDate;
    ///
    /// assert!(DueDate::parse_iso("2026-02-20").is_some());
    /// assert!(DueDate::parse_iso("2026-02-30").is_none());
    /// ```
    pub fn parse_iso(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s.trim(), ISO_FORMAT)
            .ok()
            .map(DueDate::On)
    }

    /// The concrete date, if there is one
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DueDate::On(date) => Some(*date),
            _ => None,
        }
    }

    /// Whether a due date (concrete or upcoming) was found
    pub fn is_found(&self) -> bool {
        !matches!(self, DueDate::NotFound)
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DueDate::On(date) => write!(f, "{}", date.format(ISO_FORMAT)),
            DueDate::Upcoming => f.write_str(UPCOMING),
            DueDate::NotFound => f.write_str(NOT_FOUND),
        }
    }
}

impl From<NaiveDate> for DueDate {
    fn from(date: NaiveDate) -> Self {
        DueDate::On(date)
    }
}

impl From<String> for DueDate {
    fn from(value: String) -> Self {
        if let Some(due) = DueDate::parse_iso(&value) {
            return due;
        }
        if value.trim().eq_ignore_ascii_case(UPCOMING) {
            DueDate::Upcoming
        } else {
            DueDate::NotFound
        }
    }
}

impl From<DueDate> for String {
    fn from(due: DueDate) -> Self {
        due.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 5).unwrap();
        assert_eq!(DueDate::On(date).to_string(), "2026-02-05");
        assert_eq!(DueDate::Upcoming.to_string(), "Upcoming");
        assert_eq!(DueDate::NotFound.to_string(), "Not Found");
    }

    #[test]
    fn test_from_wire_strings() {
        assert_eq!(DueDate::from("Upcoming".to_string()), DueDate::Upcoming);
        assert_eq!(DueDate::from("Not Found".to_string()), DueDate::NotFound);
        assert_eq!(DueDate::from("next sprint".to_string()), DueDate::NotFound);
        assert_eq!(
            DueDate::from("2026-10-20".to_string()).date(),
            NaiveDate::from_ymd_opt(2026, 10, 20)
        );
    }

    #[test]
    fn test_invalid_calendar_date_is_rejected() {
        assert!(DueDate::parse_iso("2026-13-01").is_none());
        assert!(DueDate::parse_iso("not a date").is_none());
    }

    #[test]
    fn test_is_found() {
        assert!(DueDate::Upcoming.is_found());
        assert!(!DueDate::NotFound.is_found());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 20).unwrap();
        let json = serde_json::to_string(&DueDate::On(date)).unwrap();
        assert_eq!(json, "\"2026-02-20\"");
    }
}
