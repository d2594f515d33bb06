//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// South African international dialing code.
const SA_DIALING_CODE: &str = "+27";

/// National trunk prefix.
const LOCAL_PREFIX: &str = "0";

/// Formatting characters stripped during normalization.
static FORMATTING_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-().]").expect("Failed to compile formatting regex"));

/// A bare country code with no '+', e.g. "27821234567".
static BARE_DIALING_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^27\d").expect("Failed to compile dialing code regex"));

/// The two accepted surface forms: national and international.
static SURFACE_FORM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0\d{9}|\+27\d{9})$").expect("Failed to compile surface form regex"));

/// A type-safe wrapper for South African phone numbers.
///
/// A `PhoneNumber` holds one of the two accepted surface forms:
/// national (`0` + 9 digits) or international (`+27` + 9 digits).
///
/// # Example
///
/// ```
/// use contact_validator::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("072 338 9999").unwrap();
/// assert_eq!(phone.as_str(), "0723389999");
/// assert_eq!(phone.national(), "0723389999");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, normalizing the input first.
    ///
    /// Normalization strips spaces, hyphens, parentheses, and periods, and
    /// prepends `+` when the input starts with a bare `27` dialing code.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the normalized number does
    /// not match either surface form.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = phone.into();
        let normalized = Self::normalize(&raw);

        if !Self::is_valid(&normalized) {
            return Err(ValidationError::InvalidPhone(raw));
        }

        Ok(Self(normalized))
    }

    /// Create a new PhoneNumber without normalizing the input.
    ///
    /// The input must already be in one of the two surface forms.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number does not match
    /// either surface form as given.
    pub fn new_strict(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = phone.into();

        if !Self::is_valid(&raw) {
            return Err(ValidationError::InvalidPhone(raw));
        }

        Ok(Self(raw))
    }

    /// Strip formatting characters and restore a missing '+'.
    fn normalize(phone: &str) -> String {
        let cleaned = FORMATTING_CHARS.replace_all(phone, "");

        if BARE_DIALING_CODE.is_match(&cleaned) {
            return format!("+{}", cleaned);
        }

        cleaned.into_owned()
    }

    /// Validate against the two accepted surface forms.
    fn is_valid(phone: &str) -> bool {
        SURFACE_FORM.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether the stored form is the international `+27` one.
    pub fn is_international(&self) -> bool {
        self.0.starts_with(SA_DIALING_CODE)
    }

    /// Get the number in national form (`0` + 9 digits).
    pub fn national(&self) -> String {
        if let Some(subscriber) = self.0.strip_prefix(SA_DIALING_CODE) {
            return format!("{}{}", LOCAL_PREFIX, subscriber);
        }

        self.0.clone()
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid_national() {
        let phone = PhoneNumber::new("0821234567").unwrap();
        assert_eq!(phone.as_str(), "0821234567");
        assert!(!phone.is_international());
    }

    #[test]
    fn test_phone_valid_international() {
        let phone = PhoneNumber::new("+27821234567").unwrap();
        assert_eq!(phone.as_str(), "+27821234567");
        assert!(phone.is_international());
    }

    #[test]
    fn test_phone_normalizes_formatting() {
        let phone = PhoneNumber::new("072 338 9999").unwrap();
        assert_eq!(phone.as_str(), "0723389999");

        let phone = PhoneNumber::new("(072) 338-9999").unwrap();
        assert_eq!(phone.as_str(), "0723389999");

        let phone = PhoneNumber::new("072.338.9999").unwrap();
        assert_eq!(phone.as_str(), "0723389999");
    }

    #[test]
    fn test_phone_restores_missing_plus() {
        let phone = PhoneNumber::new("27 82 123 4567").unwrap();
        assert_eq!(phone.as_str(), "+27821234567");
    }

    #[test]
    fn test_phone_rejects_bad_forms() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("12345").is_err());
        assert!(PhoneNumber::new("082123456").is_err());
        assert!(PhoneNumber::new("08212345678").is_err());
        assert!(PhoneNumber::new("+1 555 123 4567").is_err());
    }

    #[test]
    fn test_phone_strict_skips_normalization() {
        assert!(PhoneNumber::new_strict("072 338 9999").is_err());
        assert!(PhoneNumber::new_strict("0723389999").is_ok());
        assert!(PhoneNumber::new_strict("+27821234567").is_ok());
    }

    #[test]
    fn test_phone_national_conversion() {
        let phone = PhoneNumber::new("+27821234567").unwrap();
        assert_eq!(phone.national(), "0821234567");

        let phone = PhoneNumber::new("0821234567").unwrap();
        assert_eq!(phone.national(), "0821234567");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("0821234567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"0821234567\"");
    }
}
