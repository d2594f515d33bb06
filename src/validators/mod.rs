//! Validation rule engines.
//!
//! Each validator applies an ordered list of named checks to one value and
//! returns a fresh [`crate::models::ValidationOutcome`] per call. Checks
//! never raise: every heuristic degrades to a failed check.

pub mod bulk;
pub mod email;
pub mod name;
pub mod phone;

pub use bulk::BulkValidator;
pub use email::EmailValidator;
pub use name::NameValidator;
pub use phone::PhoneValidator;
