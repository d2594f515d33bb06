//! Bulk contact validation.
//!
//! Runs the email and phone validators over a contact list, preserving
//! input order, and computes summary statistics over the finished batch.

use crate::error::{BulkError, BulkResult};
use crate::models::{CheckOutcome, ContactPair, ContactValidationResult, ValidationSummary};
use crate::reachability::MailReachability;
use crate::validators::{EmailValidator, PhoneValidator};
use std::sync::Arc;
use tracing::debug;

/// Validates batches of contacts.
pub struct BulkValidator {
    email_validator: EmailValidator,
    phone_validator: PhoneValidator,
}

impl BulkValidator {
    /// Create a bulk validator using the given reachability probe.
    pub fn new(reachability: Arc<dyn MailReachability>) -> Self {
        Self {
            email_validator: EmailValidator::new(reachability),
            phone_validator: PhoneValidator::new(),
        }
    }

    /// Validate every contact in the list, in order.
    ///
    /// Each contact is validated independently. A blank field is recorded as
    /// invalid with an empty check breakdown, so "not provided" never reads as
    /// "passed validation". Output order matches input order exactly; no
    /// reordering, no deduplication.
    pub async fn validate_contacts(
        &self,
        contacts: &[ContactPair],
    ) -> Vec<ContactValidationResult> {
        let mut results = Vec::with_capacity(contacts.len());

        for contact in contacts {
            let (email_valid, email_checks) = if contact.has_email() {
                let outcome = self.email_validator.validate(&contact.email).await;
                (outcome.is_valid, outcome.checks)
            } else {
                (false, CheckOutcome::new())
            };

            let (phone_valid, phone_checks) = if contact.has_phone() {
                let outcome = self.phone_validator.validate(&contact.phone);
                (outcome.is_valid, outcome.checks)
            } else {
                (false, CheckOutcome::new())
            };

            results.push(ContactValidationResult {
                contact: contact.clone(),
                email_valid,
                phone_valid,
                email_checks,
                phone_checks,
            });
        }

        debug!(
            contacts = contacts.len(),
            "bulk validation batch complete"
        );

        results
    }

    /// Compute summary statistics over a completed batch.
    ///
    /// # Errors
    ///
    /// Returns [`BulkError::LengthMismatch`] when `results` was not produced
    /// from `contacts`: the two slices must have equal length and matching
    /// order.
    pub fn summarize(
        contacts: &[ContactPair],
        results: &[ContactValidationResult],
    ) -> BulkResult<ValidationSummary> {
        if contacts.len() != results.len() {
            return Err(BulkError::LengthMismatch {
                contacts: contacts.len(),
                results: results.len(),
            });
        }

        Ok(ValidationSummary {
            total_contacts: contacts.len(),
            emails_provided: contacts.iter().filter(|c| c.has_email()).count(),
            phones_provided: contacts.iter().filter(|c| c.has_phone()).count(),
            valid_emails: results.iter().filter(|r| r.email_valid).count(),
            valid_phones: results.iter().filter(|r| r.phone_valid).count(),
            valid_both: results.iter().filter(|r| r.both_valid()).count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reachability::StaticMailReachability;

    fn bulk_validator(reachable: bool) -> BulkValidator {
        BulkValidator::new(Arc::new(StaticMailReachability::new(reachable)))
    }

    #[tokio::test]
    async fn test_blank_fields_invalid_with_empty_checks() {
        let contacts = vec![
            ContactPair::new("test@gmail.com", "0821234567"),
            ContactPair::new("test2@gmail.com", ""),
        ];

        let results = bulk_validator(true).validate_contacts(&contacts).await;

        assert_eq!(results.len(), 2);
        assert!(results[0].both_valid());
        assert!(results[1].email_valid);
        assert!(!results[1].phone_valid);
        assert!(results[1].phone_checks.is_empty());
    }

    #[tokio::test]
    async fn test_output_preserves_input_order() {
        let contacts = vec![
            ContactPair::new("a@gmail.com", ""),
            ContactPair::new("", "0821234567"),
            ContactPair::new("c@gmail.com", "0723389999"),
        ];

        let results = bulk_validator(true).validate_contacts(&contacts).await;

        let emails: Vec<&str> = results.iter().map(|r| r.contact.email.as_str()).collect();
        assert_eq!(emails, vec!["a@gmail.com", "", "c@gmail.com"]);
    }

    #[tokio::test]
    async fn test_summary_counts() {
        let contacts = vec![
            ContactPair::new("test@gmail.com", "0821234567"),
            ContactPair::new("x@mailinator.com", ""),
            ContactPair::new("", "0123456789"),
        ];

        let validator = bulk_validator(true);
        let results = validator.validate_contacts(&contacts).await;
        let summary = BulkValidator::summarize(&contacts, &results).unwrap();

        assert_eq!(summary.total_contacts, 3);
        assert_eq!(summary.emails_provided, 2);
        assert_eq!(summary.phones_provided, 2);
        assert_eq!(summary.valid_emails, 2);
        assert_eq!(summary.valid_phones, 1);
        assert_eq!(summary.valid_both, 1);
    }

    #[tokio::test]
    async fn test_summary_rejects_mismatched_lengths() {
        let contacts = vec![ContactPair::new("a@gmail.com", "")];
        let results = bulk_validator(true).validate_contacts(&contacts).await;

        let error = BulkValidator::summarize(&[], &results).unwrap_err();
        assert!(matches!(
            error,
            BulkError::LengthMismatch {
                contacts: 0,
                results: 1
            }
        ));
    }
}
