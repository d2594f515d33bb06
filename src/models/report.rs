//! Per-contact results and batch summaries.

use super::contact::ContactPair;
use super::outcome::CheckOutcome;
use serde::{Deserialize, Serialize};

/// The validation result for one contact in a bulk run.
///
/// Created once per contact and never mutated afterwards. A field that was
/// not provided has `*_valid == false` and an empty check breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactValidationResult {
    /// The contact that was validated
    pub contact: ContactPair,

    /// Whether the email passed validation (false when not provided)
    pub email_valid: bool,

    /// Whether the phone passed validation (false when not provided)
    pub phone_valid: bool,

    /// Per-check email breakdown (empty when not provided)
    pub email_checks: CheckOutcome,

    /// Per-check phone breakdown (empty when not provided)
    pub phone_checks: CheckOutcome,
}

impl ContactValidationResult {
    /// Whether both fields passed validation.
    pub fn both_valid(&self) -> bool {
        self.email_valid && self.phone_valid
    }
}

/// Aggregate counts over a completed batch of validation results.
///
/// Computed on demand from a finished result list, never maintained
/// incrementally.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ValidationSummary {
    /// Total number of contacts in the batch
    pub total_contacts: usize,

    /// Contacts that provided an email address
    pub emails_provided: usize,

    /// Contacts that provided a phone number
    pub phones_provided: usize,

    /// Contacts whose email passed validation
    pub valid_emails: usize,

    /// Contacts whose phone passed validation
    pub valid_phones: usize,

    /// Contacts where both fields passed validation
    pub valid_both: usize,
}
