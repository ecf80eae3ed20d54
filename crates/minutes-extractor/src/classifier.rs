//! Line classification: does this transcript line describe something to do?

use crate::patterns::static_regex;

/// Phrases that mark a line as an action item wherever they appear
pub(crate) const ACTION_MARKERS: &[&str] = &[
    "action item:",
    "action:",
    "todo:",
    "to do:",
    "task:",
    "follow up:",
    "followup:",
    "will do:",
    "needs to:",
    "responsible:",
    "assigned to:",
    "[ ]",
    "[]",
];

/// Verbs that signal an instruction when the line also has a colon
pub(crate) const IMPERATIVE_VERBS: &[&str] = &[
    "prepare",
    "create",
    "send",
    "book",
    "schedule",
    "review",
    "update",
    "write",
    "complete",
    "finish",
    "submit",
    "check",
    "fix",
    "deploy",
    "test",
    "build",
    "document",
    "call",
    "meet",
    "follow up",
    "reach out",
    "notify",
    "confirm",
    "verify",
    "validate",
    "analyze",
    "research",
];

static_regex! {
    pub(crate) fn bullet_prefix = r"^[-*•]\s+";
}

/// Decide whether a transcript line is an action item
///
/// A line qualifies when it contains an action marker, starts with a
/// bullet, or mentions an imperative verb in "speaker: instruction" form.
/// The colon requirement keeps narrative sentences that merely mention a
/// verb out.
///
/// # Examples
///
/// ```
/// use minutes_extractor::is_action_line;
///
/// assert!(is_action_line("Action: update the roadmap"));
/// assert!(is_action_line("  - send the notes"));
/// assert!(is_action_line("Alice: please review the PR"));
/// assert!(!is_action_line("We should check the numbers at some point"));
/// ```
pub fn is_action_line(line: &str) -> bool {
    let lower = line.to_lowercase();

    has_action_marker(&lower) || is_bullet(line) || (has_imperative(&lower) && line.contains(':'))
}

fn has_action_marker(lower: &str) -> bool {
    ACTION_MARKERS.iter().any(|marker| lower.contains(marker))
}

fn is_bullet(line: &str) -> bool {
    bullet_prefix().is_match(line.trim())
}

fn has_imperative(lower: &str) -> bool {
    IMPERATIVE_VERBS.iter().any(|verb| lower.contains(verb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_markers_any_case() {
        assert!(is_action_line("ACTION ITEM: ship the release"));
        assert!(is_action_line("Todo: clean the backlog"));
        assert!(is_action_line("Bob needs to: renew the certificate"));
        assert!(is_action_line("[ ] archive old tickets"));
        assert!(is_action_line("[] archive old tickets"));
    }

    #[test]
    fn test_bullets_need_whitespace() {
        assert!(is_action_line("* write the summary"));
        assert!(is_action_line("• write the summary"));
        assert!(is_action_line("\t- write the summary"));
        assert!(!is_action_line("-write the summary"));
        assert!(!is_action_line("-"));
    }

    #[test]
    fn test_imperative_requires_colon() {
        assert!(is_action_line("Dana: check the staging logs"));
        assert!(!is_action_line("I'll check with the vendor about pricing"));
    }

    #[test]
    fn test_imperative_phrases() {
        assert!(is_action_line("Lee: reach out to the design team"));
        assert!(is_action_line("Note: follow up with legal"));
    }

    #[test]
    fn test_plain_narrative_is_rejected() {
        assert!(!is_action_line("Let's circle back next sprint"));
        assert!(!is_action_line("Thanks everyone for joining today"));
        assert!(!is_action_line(""));
    }

    #[test]
    fn test_colon_without_imperative_is_rejected() {
        assert!(!is_action_line("Agenda: quarterly numbers"));
    }
}
