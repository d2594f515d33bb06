//! Contact pair model.

use serde::{Deserialize, Serialize};

/// An email/phone pair belonging to one contact.
///
/// An empty (or whitespace-only) field means "not provided", which is
/// distinct from an invalid value: validators are never run on absent
/// fields, and absent fields never count as having passed validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContactPair {
    /// Email address, possibly empty
    pub email: String,

    /// Phone number, possibly empty
    pub phone: String,
}

impl ContactPair {
    /// Create a new contact pair.
    pub fn new(email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Whether an email address was provided.
    pub fn has_email(&self) -> bool {
        !self.email.trim().is_empty()
    }

    /// Whether a phone number was provided.
    pub fn has_phone(&self) -> bool {
        !self.phone.trim().is_empty()
    }
}
