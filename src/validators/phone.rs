//! Phone number validation.
//!
//! Scoped to the South African numbering convention: national form
//! (`0` + 9 digits) or international form (`+27` + 9 digits), with mobile
//! prefixes `06`, `07`, `08`.

use crate::domain::PhoneNumber;
use crate::models::{CheckOutcome, ValidationOutcome};

/// Valid SA mobile prefixes in national form.
static VALID_MOBILE_PREFIXES: &[&str] = &["06", "07", "08"];

/// Phone validator applying three ordered checks.
///
/// The default validator normalizes input first (strips spaces, hyphens,
/// parentheses, and periods, and restores a missing `+` before a bare `27`
/// dialing code). [`PhoneValidator::strict`] skips normalization and
/// requires input already in surface form.
pub struct PhoneValidator {
    lenient: bool,
}

impl PhoneValidator {
    /// Create a validator that normalizes input before checking.
    pub fn new() -> Self {
        Self { lenient: true }
    }

    /// Create a validator that requires input already in surface form.
    pub fn strict() -> Self {
        Self { lenient: false }
    }

    /// Validate one phone number.
    ///
    /// A format failure stops evaluation: only "Basic Format" is recorded
    /// and the outcome is invalid.
    pub fn validate(&self, raw: &str) -> ValidationOutcome {
        let mut checks = CheckOutcome::new();

        let parsed = if self.lenient {
            PhoneNumber::new(raw)
        } else {
            PhoneNumber::new_strict(raw)
        };
        checks.record("Basic Format", parsed.is_ok());
        let Ok(number) = parsed else {
            return ValidationOutcome::invalid(checks);
        };

        let national = number.national();
        let valid_sa_number = VALID_MOBILE_PREFIXES
            .iter()
            .any(|prefix| national.starts_with(prefix));
        checks.record("Valid South African Number", valid_sa_number);

        let proper_length = has_proper_length(number.as_str());
        checks.record("Proper Length", proper_length);

        ValidationOutcome {
            is_valid: valid_sa_number && proper_length,
            checks,
        }
    }
}

impl Default for PhoneValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// National form must be exactly 10 characters, international exactly 12.
fn has_proper_length(number: &str) -> bool {
    (number.starts_with('0') && number.len() == 10)
        || (number.starts_with("+27") && number.len() == 12)
}
