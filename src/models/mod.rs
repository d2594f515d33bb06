//! Data models for contact validation.
//!
//! This module contains the data structures representing contact pairs,
//! per-check outcomes, per-contact results, and batch summaries.

pub mod contact;
pub mod outcome;
pub mod report;

pub use contact::ContactPair;
pub use outcome::{Check, CheckOutcome, ValidationOutcome};
pub use report::{ContactValidationResult, ValidationSummary};
