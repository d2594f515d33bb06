//! Contact Validator - heuristic validation for contact records.
//!
//! This library validates email addresses, phone numbers, and full names
//! against ordered heuristic checks, reporting a per-check pass/fail
//! breakdown alongside the overall verdict, and bulk-validates contact
//! lists with summary statistics and CSV export.
//!
//! # Architecture
//!
//! - **domain**: Value objects for email addresses and phone numbers
//! - **models**: Contact pairs, check outcomes, results, and summaries
//! - **reachability**: Injected mail-server reachability capability
//! - **validators**: The email, phone, name, and bulk rule engines
//! - **ingest**: CSV and line-based contact list readers
//! - **export**: CSV result writers
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

// Re-export commonly used types
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod ingest;
pub mod models;
pub mod reachability;
pub mod validators;

pub use config::Config;
pub use error::{BulkError, ConfigError, ExportError, IngestError};
pub use models::{
    Check, CheckOutcome, ContactPair, ContactValidationResult, ValidationOutcome,
    ValidationSummary,
};
pub use reachability::{DnsMailReachability, MailReachability, StaticMailReachability};
pub use validators::{BulkValidator, EmailValidator, NameValidator, PhoneValidator};
