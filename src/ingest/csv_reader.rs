//! CSV contact readers.

use crate::error::{IngestError, IngestResult};
use crate::models::ContactPair;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Read contacts from a two-column `email,phone` CSV file.
///
/// The first field of each record is the email, the second the phone;
/// either may be absent. Records beyond two fields keep only the first two.
///
/// # Errors
///
/// Returns [`IngestError::FileNotFound`] when the path does not exist, or
/// [`IngestError::Csv`] when the input cannot be parsed.
pub fn read_contacts_csv(path: &Path, has_header: bool) -> IngestResult<Vec<ContactPair>> {
    let mut reader = open_reader(path, has_header)?;
    let mut contacts = Vec::new();

    for record in reader.records() {
        let record = record?;
        if is_blank(&record) {
            continue;
        }

        let email = record.get(0).unwrap_or("").trim();
        let phone = record.get(1).unwrap_or("").trim();
        contacts.push(ContactPair::new(email, phone));
    }

    debug!(path = %path.display(), contacts = contacts.len(), "CSV ingest complete");
    Ok(contacts)
}

/// Read contacts from arbitrary columns of a CSV file.
///
/// # Errors
///
/// In addition to the errors of [`read_contacts_csv`], returns
/// [`IngestError::ColumnOutOfRange`] when any non-blank row is too short for
/// a selected column; a bad column selection must never produce a partial
/// contact list.
pub fn read_contacts_csv_columns(
    path: &Path,
    has_header: bool,
    email_column: usize,
    phone_column: usize,
) -> IngestResult<Vec<ContactPair>> {
    let mut reader = open_reader(path, has_header)?;
    let mut contacts = Vec::new();

    for record in reader.records() {
        let record = record?;
        if is_blank(&record) {
            continue;
        }

        let width = record.len();
        for index in [email_column, phone_column] {
            if index >= width {
                let line = record.position().map_or(0, |p| p.line());
                return Err(IngestError::ColumnOutOfRange { line, index, width });
            }
        }

        let email = record.get(email_column).unwrap_or("").trim();
        let phone = record.get(phone_column).unwrap_or("").trim();
        contacts.push(ContactPair::new(email, phone));
    }

    debug!(path = %path.display(), contacts = contacts.len(), "CSV column ingest complete");
    Ok(contacts)
}

/// Open a CSV reader, mapping a missing file to a typed error.
fn open_reader(path: &Path, has_header: bool) -> IngestResult<csv::Reader<File>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::Io(e)
        }
    })?;

    Ok(ReaderBuilder::new()
        .has_headers(has_header)
        .flexible(true)
        .from_reader(file))
}

/// Whether every field of the record is empty or whitespace.
fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_read_two_column_csv() {
        let path = write_fixture(
            "contact_validator_ingest_basic.csv",
            "email,phone\na@gmail.com,0821234567\nb@gmail.com,\n",
        );

        let contacts = read_contacts_csv(&path, true).unwrap();

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0], ContactPair::new("a@gmail.com", "0821234567"));
        assert_eq!(contacts[1], ContactPair::new("b@gmail.com", ""));
    }

    #[test]
    fn test_blank_rows_skipped() {
        let path = write_fixture(
            "contact_validator_ingest_blank.csv",
            "a@gmail.com,0821234567\n\n,\nb@gmail.com,0723389999\n",
        );

        let contacts = read_contacts_csv(&path, false).unwrap();
        assert_eq!(contacts.len(), 2);
    }

    #[test]
    fn test_column_selection() {
        let path = write_fixture(
            "contact_validator_ingest_columns.csv",
            "name,email,phone\nJohan,a@gmail.com,0821234567\n",
        );

        let contacts = read_contacts_csv_columns(&path, true, 1, 2).unwrap();
        assert_eq!(contacts, vec![ContactPair::new("a@gmail.com", "0821234567")]);
    }

    #[test]
    fn test_column_out_of_range_fails_loudly() {
        let path = write_fixture(
            "contact_validator_ingest_short.csv",
            "a@gmail.com,0821234567\nb@gmail.com\n",
        );

        let error = read_contacts_csv_columns(&path, false, 0, 1).unwrap_err();
        assert!(matches!(
            error,
            IngestError::ColumnOutOfRange {
                index: 1,
                width: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file() {
        let error =
            read_contacts_csv(Path::new("/definitely/not/here.csv"), false).unwrap_err();
        assert!(matches!(error, IngestError::FileNotFound { .. }));
    }
}
