//! Owner module - who is responsible for an action item

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire string for [`Owner::Myself`]
pub const SELF_OWNER: &str = "User (Self)";

/// Wire string for [`Owner::Unassigned`]
pub const UNASSIGNED_OWNER: &str = "Unassigned";

/// The party responsible for an action item
///
/// Serialized as a plain string so the persistence collaborator sees the
/// same shape whether or not an owner was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Owner {
    /// A name or handle taken from the transcript
    Named(String),

    /// The speaker assigned the task to themselves ("I will ...")
    Myself,

    /// Nobody could be identified
    #[default]
    Unassigned,
}

impl Owner {
    /// Build an owner from extracted text, falling back to `Unassigned`
    /// when the text is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use minutes_domain::Owner;
    ///
    /// assert_eq!(Owner::named(" John "), Owner::Named("John".to_string()));
    /// assert_eq!(Owner::named("   "), Owner::Unassigned);
    /// ```
    pub fn named(name: impl AsRef<str>) -> Self {
        let name = name.as_ref().trim();
        if name.is_empty() {
            Owner::Unassigned
        } else {
            Owner::Named(name.to_string())
        }
    }

    /// Get the owner as its wire string
    pub fn as_str(&self) -> &str {
        match self {
            Owner::Named(name) => name,
            Owner::Myself => SELF_OWNER,
            Owner::Unassigned => UNASSIGNED_OWNER,
        }
    }

    /// Whether an actual person (including the speaker) was identified
    pub fn is_assigned(&self) -> bool {
        !matches!(self, Owner::Unassigned)
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Owner {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case(UNASSIGNED_OWNER) {
            Owner::Unassigned
        } else if trimmed.eq_ignore_ascii_case(SELF_OWNER) {
            Owner::Myself
        } else {
            Owner::named(trimmed)
        }
    }
}

impl From<Owner> for String {
    fn from(owner: Owner) -> Self {
        match owner {
            Owner::Named(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_strings() {
        assert_eq!(Owner::Myself.as_str(), "User (Self)");
        assert_eq!(Owner::Unassigned.as_str(), "Unassigned");
        assert_eq!(Owner::Named("Sarah".into()).to_string(), "Sarah");
    }

    #[test]
    fn test_sentinel_strings_parse_back() {
        assert_eq!(Owner::from("Unassigned".to_string()), Owner::Unassigned);
        assert_eq!(Owner::from("unassigned".to_string()), Owner::Unassigned);
        assert_eq!(Owner::from("User (Self)".to_string()), Owner::Myself);
        assert_eq!(Owner::from("".to_string()), Owner::Unassigned);
    }

    #[test]
    fn test_is_assigned() {
        assert!(Owner::Myself.is_assigned());
        assert!(Owner::Named("Bob".into()).is_assigned());
        assert!(!Owner::Unassigned.is_assigned());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Owner::Named("Alice".into())).unwrap();
        assert_eq!(json, "\"Alice\"");

        let json = serde_json::to_string(&Owner::Unassigned).unwrap();
        assert_eq!(json, "\"Unassigned\"");
    }
}
