//! Error types for contact validation workflows.
//!
//! This module defines custom error types using `thiserror` for precise
//! error handling. Nothing in check evaluation itself is fatal; these
//! errors cover the workflows around it: ingestion, export, aggregation,
//! and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while ingesting a contact list.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The input file does not exist
    #[error("contact file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// A selected column index is out of range for a row
    #[error("row {line}: column index {index} out of range for a row with {width} fields")]
    ColumnOutOfRange {
        line: u64,
        index: usize,
        width: usize,
    },

    /// The input could not be parsed as CSV
    #[error("failed to parse CSV input: {0}")]
    Csv(#[from] csv::Error),

    /// Reading the input failed
    #[error("failed to read contact input: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while exporting validation results.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The results file could not be created for permission reasons
    #[error("permission denied writing results to {path}")]
    PermissionDenied { path: PathBuf },

    /// The directory for the results file does not exist
    #[error("directory not found for results path {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Writing CSV records failed
    #[error("failed to write CSV results to {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    /// Other I/O failure
    #[error("I/O error writing results to {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that can occur while aggregating bulk results.
#[derive(Error, Debug)]
pub enum BulkError {
    /// The result list was not produced from the contact list
    #[error("results length {results} does not match contacts length {contacts}")]
    LengthMismatch { contacts: usize, results: usize },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with IngestError
pub type IngestResult<T> = Result<T, IngestError>;

/// Convenience type alias for Results with ExportError
pub type ExportResult<T> = Result<T, ExportError>;

/// Convenience type alias for Results with BulkError
pub type BulkResult<T> = Result<T, BulkError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
