//! Validation result export.
//!
//! Writes a completed batch of results as CSV, in two layouts: a boolean
//! form (`Email,EmailValid,Phone,PhoneValid,BothValid`) and a status-label
//! form (`Email,Email Status,Phone,Phone Status,Overall Status`). Fields
//! containing the delimiter, quotes, or newlines are quoted with internal
//! quotes doubled. Export failures are typed per cause and never discard
//! completed validation work.

use crate::error::{ExportError, ExportResult};
use crate::models::ContactValidationResult;
use csv::Writer;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Write results in the boolean form.
pub fn write_results_csv(path: &Path, results: &[ContactValidationResult]) -> ExportResult<()> {
    let mut writer = open_writer(path)?;

    writer
        .write_record(["Email", "EmailValid", "Phone", "PhoneValid", "BothValid"])
        .map_err(|source| csv_error(path, source))?;

    for result in results {
        writer
            .write_record([
                result.contact.email.as_str(),
                bool_field(result.email_valid),
                result.contact.phone.as_str(),
                bool_field(result.phone_valid),
                bool_field(result.both_valid()),
            ])
            .map_err(|source| csv_error(path, source))?;
    }

    finish(writer, path, results.len())
}

/// Write results in the status-label form.
pub fn write_status_report_csv(
    path: &Path,
    results: &[ContactValidationResult],
) -> ExportResult<()> {
    let mut writer = open_writer(path)?;

    writer
        .write_record([
            "Email",
            "Email Status",
            "Phone",
            "Phone Status",
            "Overall Status",
        ])
        .map_err(|source| csv_error(path, source))?;

    for result in results {
        writer
            .write_record([
                result.contact.email.as_str(),
                status_field(result.email_valid),
                result.contact.phone.as_str(),
                status_field(result.phone_valid),
                status_field(result.both_valid()),
            ])
            .map_err(|source| csv_error(path, source))?;
    }

    finish(writer, path, results.len())
}

/// Create the output file, mapping creation failures to typed causes.
fn open_writer(path: &Path) -> ExportResult<Writer<File>> {
    let file = File::create(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => ExportError::PermissionDenied {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::NotFound => ExportError::DirectoryNotFound {
            path: path.to_path_buf(),
        },
        _ => ExportError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    Ok(Writer::from_writer(file))
}

fn finish(mut writer: Writer<File>, path: &Path, rows: usize) -> ExportResult<()> {
    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), rows, "results exported");
    Ok(())
}

fn csv_error(path: &Path, source: csv::Error) -> ExportError {
    ExportError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

fn bool_field(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn status_field(valid: bool) -> &'static str {
    if valid {
        "Valid"
    } else {
        "Invalid"
    }
}
