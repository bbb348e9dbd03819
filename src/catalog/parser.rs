//! Strict comma-delimited catalog parser.
//!
//! The format is a fixed seven-column subset of CSV: no quoting, no escaping,
//! no embedded commas. The first non-blank line must be [`HEADER`] verbatim.
//! Any bad row rejects the whole input.

use super::record::{RawFields, Record};
use crate::error::{CatalogError, Result};

/// Required first line of every catalog.
pub const HEADER: &str = "title,type,author,year,genre,rating,description";

/// Number of fields on every data row.
pub const FIELD_COUNT: usize = 7;

/// Parse catalog text into records.
///
/// Blank lines are skipped and do not count toward line numbers in errors.
/// Input with no non-blank lines yields an empty list.
pub fn parse(text: &str) -> Result<Vec<Record>> {
    let lines: Vec<&str> = text
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let Some((header, rows)) = lines.split_first() else {
        return Ok(Vec::new());
    };

    if *header != HEADER {
        return Err(CatalogError::header_mismatch(HEADER, *header));
    }

    let mut records = Vec::with_capacity(rows.len());
    for (index, line) in rows.iter().enumerate() {
        // Header is line 1.
        let line_number = index + 2;
        records.push(parse_row(line, line_number)?);
    }

    tracing::debug!("Parsed {} records", records.len());
    Ok(records)
}

fn parse_row(line: &str, line_number: usize) -> Result<Record> {
    let pieces: Vec<&str> = line.split(',').map(str::trim).collect();

    let fields =
        RawFields::from_pieces(&pieces).ok_or(CatalogError::RowFieldCountMismatch {
            line: line_number,
            expected: FIELD_COUNT,
            found: pieces.len(),
        })?;

    Ok(Record::from_fields(fields))
}
