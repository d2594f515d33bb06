//! Full-name validation.
//!
//! Structural checks (token count, character set, length) plus a cultural
//! convention check on nobiliary particles.

use crate::models::{CheckOutcome, ValidationOutcome};
use once_cell::sync::Lazy;
use regex::Regex;

/// Any decimal digit.
static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("Failed to compile digit regex"));

/// Latin letters (including the accented Latin-1 ranges), whitespace,
/// apostrophes, and hyphens.
static NAME_CHARACTERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-ZÀ-ÖØ-öø-ÿ\s'\-]+$").expect("Failed to compile name character regex")
});

/// Particles that may prefix a surname but must not stand alone as the
/// final name component.
static NOT_STANDALONE_WORDS: &[&str] = &["van", "de", "der", "du", "den", "von"];

/// Full-name validator applying seven ordered checks.
pub struct NameValidator;

impl NameValidator {
    /// Create a name validator.
    pub fn new() -> Self {
        Self
    }

    /// Validate one full name.
    ///
    /// An empty input stops evaluation: only "Not Empty" is recorded and the
    /// outcome is invalid. The "Culturally Valid" check is recorded in the
    /// breakdown but does not count toward the overall verdict.
    pub fn validate(&self, full_name: &str) -> ValidationOutcome {
        let mut checks = CheckOutcome::new();

        let trimmed = full_name.trim();
        let not_empty = !trimmed.is_empty();
        checks.record("Not Empty", not_empty);
        if !not_empty {
            return ValidationOutcome::invalid(checks);
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();

        let has_multiple_parts = parts.len() >= 2;
        checks.record("Has First Name and Surname", has_multiple_parts);

        let no_digits = !DIGIT.is_match(full_name);
        checks.record("No Digits", no_digits);

        let valid_characters = NAME_CHARACTERS.is_match(full_name);
        checks.record("Valid Characters", valid_characters);

        let valid_length = {
            let len = trimmed.chars().count();
            (3..=100).contains(&len)
        };
        checks.record("Valid Length", valid_length);

        let valid_name_parts = parts.iter().all(|part| part.chars().count() >= 2);
        checks.record("Valid Name Parts", valid_name_parts);

        let culturally_valid = parts
            .last()
            .map_or(true, |last| !is_standalone_particle(last));
        checks.record("Culturally Valid", culturally_valid);

        // Informational: the cultural check is reported but not counted.
        let is_valid = has_multiple_parts
            && no_digits
            && valid_characters
            && valid_length
            && valid_name_parts;

        ValidationOutcome { is_valid, checks }
    }
}

impl Default for NameValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the token is a nobiliary particle used standalone.
fn is_standalone_particle(token: &str) -> bool {
    let token = token.to_lowercase();
    NOT_STANDALONE_WORDS.iter().any(|word| *word == token)
}
