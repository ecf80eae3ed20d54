//! Date expression normalization
//!
//! Turns the date text captured from a transcript line ("2026-02-20",
//! "tomorrow", "friday", "3/4/26") into a calendar date relative to an
//! explicit reference day.

use crate::patterns::static_regex;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use minutes_domain::DueDate;

static_regex! {
    fn iso_literal = r"^\d{4}-\d{2}-\d{2}$";
}

static_regex! {
    fn month_first = r"^(\d{1,2})[-/](\d{1,2})[-/](\d{4}|\d{2})$";
}

/// Keywords meaning "due, but no date given"
const UPCOMING_KEYWORDS: &[&str] = &["upcoming", "tbd", "later", "soon"];

/// Outcome of normalizing one date expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateResolution {
    /// A concrete calendar date
    Date(NaiveDate),

    /// Explicitly undated ("tbd", "soon"); still counts as a match
    Upcoming,

    /// Not a date this normalizer understands
    Unresolved,
}

impl DateResolution {
    /// Whether the expression was understood
    pub fn is_resolved(&self) -> bool {
        !matches!(self, DateResolution::Unresolved)
    }

    /// Convert into a due date, treating unresolved text as not found
    pub fn into_due_date(self) -> DueDate {
        match self {
            DateResolution::Date(date) => DueDate::On(date),
            DateResolution::Upcoming => DueDate::Upcoming,
            DateResolution::Unresolved => DueDate::NotFound,
        }
    }
}

/// Normalize a date expression against `today`
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use minutes_extractor::{normalize_date, DateResolution};
///
/// // 2026-10-19 is a Monday
/// let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
///
/// assert_eq!(
///     normalize_date("friday", today),
///     DateResolution::Date(NaiveDate::from_ymd_opt(2026, 10, 23).unwrap())
/// );
/// assert_eq!(normalize_date("tbd", today), DateResolution::Upcoming);
/// assert_eq!(normalize_date("13/01/2026", today), DateResolution::Unresolved);
/// ```
pub fn normalize(raw: &str, today: NaiveDate) -> DateResolution {
    let raw = raw.trim();

    if iso_literal().is_match(raw) {
        return match DueDate::parse_iso(raw) {
            Some(DueDate::On(date)) => DateResolution::Date(date),
            _ => DateResolution::Unresolved,
        };
    }

    let lower = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    if UPCOMING_KEYWORDS.contains(&lower.as_str()) {
        return DateResolution::Upcoming;
    }

    let offset = match lower.as_str() {
        "tomorrow" => Some(1),
        "next week" => Some(7),
        "this week" => Some(7 - u64::from(today.weekday().num_days_from_sunday())),
        other => parse_weekday(other).map(|target| days_until(today.weekday(), target)),
    };
    if let Some(days) = offset {
        return add_days(today, days);
    }

    parse_month_first(raw)
}

/// Days from `current` to the next `target`, never zero
fn days_until(current: Weekday, target: Weekday) -> u64 {
    let current = u64::from(current.num_days_from_sunday());
    let target = u64::from(target.num_days_from_sunday());
    match (target + 7 - current) % 7 {
        0 => 7,
        days => days,
    }
}

fn add_days(today: NaiveDate, days: u64) -> DateResolution {
    today
        .checked_add_days(Days::new(days))
        .map(DateResolution::Date)
        .unwrap_or(DateResolution::Unresolved)
}

/// Parse a full English weekday name
pub(crate) fn parse_weekday(name: &str) -> Option<Weekday> {
    match name {
        "sunday" => Some(Weekday::Sun),
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        _ => None,
    }
}

/// US-style month/day/year with a two- or four-digit year
fn parse_month_first(raw: &str) -> DateResolution {
    let Some(caps) = month_first().captures(raw) else {
        return DateResolution::Unresolved;
    };

    let month = caps[1].parse::<u32>().ok();
    let day = caps[2].parse::<u32>().ok();
    let year = if caps[3].len() == 2 {
        format!("20{}", &caps[3])
    } else {
        caps[3].to_string()
    };
    let year = year.parse::<i32>().ok();

    match (year, month, day) {
        (Some(year), Some(month), Some(day)) => NaiveDate::from_ymd_opt(year, month, day)
            .map(DateResolution::Date)
            .unwrap_or(DateResolution::Unresolved),
        _ => DateResolution::Unresolved,
    }
}
