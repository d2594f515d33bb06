//! Per-check validation outcomes.

use serde::{Deserialize, Serialize};

/// A single named check and whether it passed.
///
/// Names are human-readable report labels, not stable identifiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Check {
    /// Display label for the check
    pub name: String,

    /// Whether the check passed
    pub passed: bool,
}

/// An ordered sequence of named check results.
///
/// Insertion order is significant: it is the order checks were evaluated in
/// and the order reports display them in. Every validation call builds its
/// own `CheckOutcome`; outcomes are never shared or reset between calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CheckOutcome {
    checks: Vec<Check>,
}

impl CheckOutcome {
    /// Create an empty outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named check result.
    pub fn record(&mut self, name: impl Into<String>, passed: bool) {
        self.checks.push(Check {
            name: name.into(),
            passed,
        });
    }

    /// Look up a check by name (first match).
    pub fn passed(&self, name: &str) -> Option<bool> {
        self.checks
            .iter()
            .find(|check| check.name == name)
            .map(|check| check.passed)
    }

    /// Iterate over the checks in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter()
    }

    /// Number of recorded checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether no checks were recorded.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl<'a> IntoIterator for &'a CheckOutcome {
    type Item = &'a Check;
    type IntoIter = std::slice::Iter<'a, Check>;

    fn into_iter(self) -> Self::IntoIter {
        self.checks.iter()
    }
}

/// The result of validating one value: the overall verdict plus the
/// per-check breakdown that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationOutcome {
    /// Overall verdict
    pub is_valid: bool,

    /// Ordered per-check breakdown
    pub checks: CheckOutcome,
}

impl ValidationOutcome {
    /// An invalid outcome carrying the checks recorded so far.
    pub fn invalid(checks: CheckOutcome) -> Self {
        Self {
            is_valid: false,
            checks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_preserves_insertion_order() {
        let mut outcome = CheckOutcome::new();
        outcome.record("First", true);
        outcome.record("Second", false);
        outcome.record("Third", true);

        let names: Vec<&str> = outcome.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_outcome_lookup_by_name() {
        let mut outcome = CheckOutcome::new();
        outcome.record("Basic Format", true);
        outcome.record("Proper Length", false);

        assert_eq!(outcome.passed("Basic Format"), Some(true));
        assert_eq!(outcome.passed("Proper Length"), Some(false));
        assert_eq!(outcome.passed("Missing"), None);
    }

    #[test]
    fn test_outcome_serializes_as_sequence() {
        let mut outcome = CheckOutcome::new();
        outcome.record("Basic Format", true);

        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, "[{\"name\":\"Basic Format\",\"passed\":true}]");
    }
}
