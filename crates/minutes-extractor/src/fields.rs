//! Field extraction for a single action line
//!
//! Pulls the owner and due date out of a line and returns what is left as
//! the task description. Owner and date candidates are ordered tables of
//! (pattern, validator) pairs evaluated first-match-wins, so overlapping
//! patterns (an ISO date against the looser numeric ones, say) can never
//! shadow each other by accident.

use crate::classifier::bullet_prefix;
use crate::config::ExtractorConfig;
use crate::dates::normalize;
use crate::patterns::{compile, static_regex};
use chrono::NaiveDate;
use minutes_domain::{DueDate, Owner};
use regex::{Captures, Regex};
use std::sync::OnceLock;
use tracing::debug;

/// Sentence starters that owner patterns tend to capture by mistake
pub(crate) const OWNER_DENY_LIST: &[&str] = &[
    "sounds", "one", "will", "shall", "can", "could", "would", "should", "please", "great",
    "okay", "thanks", "yes", "no", "maybe", "alright", "make", "let", "check", "verify",
    "update", "test", "ensure", "create", "deploy", "run", "start", "stop", "open", "close",
];

static_regex! {
    fn action_marker_prefix =
        r"(?i)^(?:action item|action|todo|to do|task|follow up|followup)\b:?\s*";
}

static_regex! {
    fn speaker_prefix = r"^[A-Z][a-z]+:\s+";
}

static_regex! {
    fn leading_speaker = r"^([A-Z][a-z]+)\s*:";
}

static_regex! {
    fn addressee = r"^(?:(?i:please)\s+)?([A-Z][a-z]+)\s+";
}

static_regex! {
    fn self_assignment = r"(?i)\bI\s+(?:will|shall|am)\b|\b(?:my|mine)\b";
}

static_regex! {
    fn iso_date = r"(\d{4}-\d{2}-\d{2})";
}

static_regex! {
    fn empty_parens = r"\(\s*\)";
}

static_regex! {
    fn trailing_preposition = r"(?i)\s+(?:by|at|on|due|for)$";
}

/// Fields pulled out of one action line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFields {
    /// Residual task text after owner and date removal and cleanup
    pub task: String,

    /// Resolved owner, including the self and unassigned sentinels
    pub owner: Owner,

    /// Text removed from the task for the owner, if any
    pub owner_raw: Option<String>,

    /// Resolved due date, including sentinels
    pub due_date: DueDate,

    /// Text removed from the task for the due date, if any
    pub due_date_raw: Option<String>,
}

/// One row of an ordered pattern table
struct FieldPattern {
    name: &'static str,
    regex: Regex,
}

/// Owner patterns, highest priority first. Group 1 is the owner text.
fn owner_patterns() -> &'static [FieldPattern] {
    static PATTERNS: OnceLock<Vec<FieldPattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            ("handle", r"@(\w+)"),
            ("parenthesized", r"\(([^)]+)\)"),
            ("assigned_to", r"(?i)\bassigned to:\s*([^,.\n]+)"),
            ("owner_label", r"(?i)\bowner:\s*([^,.\n]+)"),
            ("responsible_label", r"(?i)\bresponsible:\s*([^,.\n]+)"),
            ("name_will", r"-\s*([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)\s+will\b"),
            ("name_please", r"^([A-Z][a-z]+),?\s+please\s+"),
            ("name_can_you", r"^([A-Z][a-z]+),?\s+(?i:can|could|would)\s+(?i:you)\s+"),
        ]
        .into_iter()
        .map(|(name, pattern)| FieldPattern { name, regex: compile(pattern) })
        .collect()
    })
}

/// Date patterns tried when the line has no ISO date. Group 1 is handed to
/// the date normalizer.
fn date_patterns() -> &'static [FieldPattern] {
    static PATTERNS: OnceLock<Vec<FieldPattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            ("by_numeric", r"(?i)\bby\s+(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})"),
            ("due_numeric", r"(?i)\bdue\s+(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})"),
            ("deadline_numeric", r"(?i)\bdeadline:?\s*(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})"),
            (
                "by_weekday",
                r"(?i)\bby\s+(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b",
            ),
            ("relative", r"(?i)(?:\bby\s+)?\b(next\s+week|this\s+week|tomorrow)\b"),
            ("bare_numeric", r"(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})"),
        ]
        .into_iter()
        .map(|(name, pattern)| FieldPattern { name, regex: compile(pattern) })
        .collect()
    })
}

/// Extract owner, due date and task text from one action line
///
/// Returns `None` when the line does not leave enough task text to be worth
/// recording. Relative dates resolve against `today`.
pub fn extract_fields(line: &str, today: NaiveDate, config: &ExtractorConfig) -> Option<LineFields> {
    let mut task = derive_task(line);
    if char_len(&task) < config.min_task_length {
        return None;
    }

    let mut owner = None;
    let mut owner_raw = None;

    if let Some((name, span)) = match_owner(line, &task) {
        task = task.replace(&span, "");
        owner = Some(Owner::named(name));
        owner_raw = Some(span);
    } else if config.infer_addressee {
        if let Some((name, span)) = match_addressee(line, &task) {
            task = task[span.len()..].to_string();
            owner = Some(Owner::named(name));
            owner_raw = Some(span.trim().to_string());
        }
    }

    let (due_date, due_date_raw) = match match_due_date(line, today) {
        Some((due, span)) => {
            task = task.replace(&span, "");
            (due, Some(span))
        }
        None => (DueDate::NotFound, None),
    };

    let owner = match owner {
        Some(owner) => owner,
        None if config.detect_self_assignment && self_assignment().is_match(line) => Owner::Myself,
        None => Owner::Unassigned,
    };

    let task = clean_task(&task);
    if char_len(&task) <= config.min_task_length {
        return None;
    }

    Some(LineFields {
        task,
        owner,
        owner_raw,
        due_date,
        due_date_raw,
    })
}

/// Strip bullet, action marker and speaker prefix from a line
fn derive_task(line: &str) -> String {
    let task = line.trim();
    let task = bullet_prefix().replace(task, "");
    let task = action_marker_prefix().replace(&task, "");
    let task = task.trim();
    speaker_prefix().replace(task, "").into_owned()
}

/// First owner pattern whose capture survives the deny list
///
/// Returns the owner text and the span to remove from the task.
fn match_owner(line: &str, task: &str) -> Option<(String, String)> {
    owner_patterns().iter().find_map(|pattern| {
        let caps = pattern.regex.captures(line)?;
        let name = caps.get(1)?.as_str().trim();
        if !is_plausible_owner(name) {
            debug!(pattern = pattern.name, capture = name, "Rejected owner capture");
            return None;
        }
        Some((name.to_string(), owner_span(&caps, task)))
    })
}

/// The part of an owner match that actually appears in the task text
///
/// Prefers the full match; falls back to the match without whatever
/// precedes the owner (a bullet the task no longer has), then to the owner
/// text alone.
fn owner_span(caps: &Captures<'_>, task: &str) -> String {
    let full = &caps[0];
    let (Some(whole), Some(group)) = (caps.get(0), caps.get(1)) else {
        return full.to_string();
    };
    let from_owner = &whole.as_str()[group.start() - whole.start()..];

    [full, from_owner.trim_end(), group.as_str()]
        .into_iter()
        .find(|span| !span.trim().is_empty() && task.contains(*span))
        .unwrap_or(full)
        .to_string()
}

/// "Speaker: please Name ..." names Name as the owner; the speaker never is
fn match_addressee(line: &str, task: &str) -> Option<(String, String)> {
    leading_speaker().captures(line)?;
    let caps = addressee().captures(task)?;
    let name = caps.get(1)?.as_str();
    if !is_plausible_owner(name) {
        return None;
    }
    Some((name.to_string(), caps[0].to_string()))
}

/// Due date from the line: an ISO date wins outright, otherwise the first
/// pattern whose capture normalizes
fn match_due_date(line: &str, today: NaiveDate) -> Option<(DueDate, String)> {
    if let Some(m) = iso_date().find(line) {
        let due = DueDate::parse_iso(m.as_str()).unwrap_or(DueDate::NotFound);
        return Some((due, m.as_str().to_string()));
    }

    date_patterns().iter().find_map(|pattern| {
        let caps = pattern.regex.captures(line)?;
        let resolution = normalize(caps.get(1)?.as_str(), today);
        if !resolution.is_resolved() {
            debug!(pattern = pattern.name, capture = &caps[1], "Unresolved date capture");
            return None;
        }
        Some((resolution.into_due_date(), caps[0].to_string()))
    })
}

fn is_plausible_owner(name: &str) -> bool {
    let lower = name.trim().to_lowercase();
    !lower.is_empty() && !OWNER_DENY_LIST.contains(&lower.as_str())
}

/// Collapse whitespace and drop debris left behind by field removal
fn clean_task(task: &str) -> String {
    let task = empty_parens().replace_all(task, " ");
    let task = task.split_whitespace().collect::<Vec<_>>().join(" ");
    let task = trailing_preposition().replace(&task, "");
    let task: &str = &task;
    task.strip_suffix(',')
        .or_else(|| task.strip_suffix('.'))
        .unwrap_or(task)
        .trim()
        .to_string()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
