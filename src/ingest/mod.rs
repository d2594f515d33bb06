//! Contact list ingestion.
//!
//! Produces `Vec<ContactPair>` from tabular or line-based sources. Blank
//! lines are skipped; field values are trimmed; a missing field defaults to
//! empty ("not provided"). Ingestion either yields the complete list or a
//! typed error, never a partial one.

mod csv_reader;
mod lines;

pub use csv_reader::{read_contacts_csv, read_contacts_csv_columns};
pub use lines::{parse_contact_line, read_contacts_lines};
