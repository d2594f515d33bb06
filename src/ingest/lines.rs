//! Line-based contact reader.

use crate::error::IngestResult;
use crate::models::ContactPair;
use std::io::BufRead;

/// Read `email,phone` pairs from a line source, stopping at the first blank
/// line (or end of input).
///
/// This mirrors interactive entry: one pair per line, a blank line ends the
/// list.
///
/// # Errors
///
/// Returns [`crate::error::IngestError::Io`] when reading a line fails.
pub fn read_contacts_lines<R: BufRead>(reader: R) -> IngestResult<Vec<ContactPair>> {
    let mut contacts = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }

        contacts.push(parse_contact_line(&line));
    }

    Ok(contacts)
}

/// Parse one `email,phone` line into a contact pair.
///
/// Missing fields default to empty; fields beyond the second are ignored.
pub fn parse_contact_line(line: &str) -> ContactPair {
    let fields: Vec<&str> = line.split(',').collect();
    let email = fields.first().map_or("", |f| f.trim());
    let phone = fields.get(1).map_or("", |f| f.trim());

    ContactPair::new(email, phone)
}
