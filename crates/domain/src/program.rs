//! Automation programs — the hub entities this agent toggles.

use serde::{Deserialize, Serialize};

/// A named, independently activatable rule set on the hub.
///
/// Rows are deserialized verbatim from the hub's full-state snapshot;
/// identity is the hub-assigned `id`. The session replaces its cached
/// list wholesale on every snapshot, so instances never outlive the
/// snapshot that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationProgram {
    pub id: u64,
    pub name: String,
    pub active: bool,
}

/// Accepted spellings for one target program name.
///
/// Hubs are inconsistent about URL-encoding program names in snapshots,
/// so a target matches either the plain spelling or a `%20`-encoded
/// one. Matching is exact string equality — no trimming, no case
/// folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramMatcher {
    plain: String,
    encoded: String,
}

impl ProgramMatcher {
    /// Build a matcher from the plain spelling, deriving the encoded
    /// form by replacing spaces with `%20`.
    #[must_use]
    pub fn new(plain: impl Into<String>) -> Self {
        let plain = plain.into();
        let encoded = plain.replace(' ', "%20");
        Self { plain, encoded }
    }

    /// Build a matcher with an explicit encoded spelling, for hubs that
    /// encode only part of the name.
    #[must_use]
    pub fn with_encoded(plain: impl Into<String>, encoded: impl Into<String>) -> Self {
        Self {
            plain: plain.into(),
            encoded: encoded.into(),
        }
    }

    /// Whether `name` equals either accepted spelling.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        name == self.plain || name == self.encoded
    }

    /// Find the first matching program in a snapshot.
    #[must_use]
    pub fn find<'a>(&self, programs: &'a [AutomationProgram]) -> Option<&'a AutomationProgram> {
        programs.iter().find(|program| self.matches(&program.name))
    }

    /// The plain spelling, for log context.
    #[must_use]
    pub fn plain(&self) -> &str {
        &self.plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(id: u64, name: &str, active: bool) -> AutomationProgram {
        AutomationProgram {
            id,
            name: name.to_string(),
            active,
        }
    }

    #[test]
    fn should_deserialize_snapshot_row() {
        let row: AutomationProgram =
            serde_json::from_str(r#"{"id": 42, "name": "Morning scene (1)", "active": true}"#)
                .unwrap();
        assert_eq!(row.id, 42);
        assert_eq!(row.name, "Morning scene (1)");
        assert!(row.active);
    }

    #[test]
    fn should_match_plain_spelling() {
        let matcher = ProgramMatcher::new("Morning scene (1)");
        assert!(matcher.matches("Morning scene (1)"));
    }

    #[test]
    fn should_match_derived_encoded_spelling() {
        let matcher = ProgramMatcher::new("Morning scene (1)");
        assert!(matcher.matches("Morning%20scene%20(1)"));
    }

    #[test]
    fn should_match_explicit_partially_encoded_spelling() {
        // Some hubs encode only part of the name; the explicit form
        // covers that.
        let matcher =
            ProgramMatcher::with_encoded("Morning vacation (1)", "Morning%20vacation (1)");
        assert!(matcher.matches("Morning vacation (1)"));
        assert!(matcher.matches("Morning%20vacation (1)"));
        assert!(!matcher.matches("Morning%20vacation%20(1)"));
    }

    #[test]
    fn should_not_match_different_name() {
        let matcher = ProgramMatcher::new("Morning scene (1)");
        assert!(!matcher.matches("Evening scene (1)"));
        assert!(!matcher.matches("Morning scene"));
    }

    #[test]
    fn should_find_first_matching_program_in_snapshot() {
        let programs = vec![
            program(1, "Evening scene", false),
            program(2, "Morning%20scene", true),
            program(3, "Morning scene", false),
        ];
        let matcher = ProgramMatcher::new("Morning scene");
        assert_eq!(matcher.find(&programs).map(|p| p.id), Some(2));
    }

    #[test]
    fn should_return_none_when_no_program_matches() {
        let programs = vec![program(1, "Evening scene", false)];
        let matcher = ProgramMatcher::new("Morning scene");
        assert!(matcher.find(&programs).is_none());
    }
}
