//! Line-oriented encode/decode for the assignment file.
//!
//! One record per line, fields separated by `|`, no header, no quoting:
//!
//! ```text
//! <id>|<title>|<subject>|<dueDate>|<documentPath>
//! ```
//!
//! The final field is empty when the record has no document, leaving a
//! trailing delimiter on the line. Decoding is permissive: lines that do
//! not fit the format are skipped and counted, never fatal.

use std::collections::BTreeSet;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};

use satchel_model::{AssignmentRecord, RecordId, check_field};

use crate::error::{Result, StoreError};

/// Field delimiter of the assignment file.
pub const DELIMITER: u8 = b'|';

/// Fields per well-formed line.
pub const RECORD_FIELDS: usize = 5;

/// Records recovered from a decode pass plus the number of lines that
/// had to be skipped.
#[derive(Debug, Default)]
pub struct DecodeOutcome {
    pub records: Vec<AssignmentRecord>,
    pub skipped: usize,
}

/// Encodes records into file bytes, one line per record in slice order.
///
/// Refuses to encode a field holding a reserved character: the record
/// would not survive a decode, so the save fails instead of writing a
/// corrupt line.
pub fn encode_records(records: &[AssignmentRecord]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .delimiter(DELIMITER)
        .quote_style(QuoteStyle::Never)
        .from_writer(&mut buffer);
    for record in records {
        check_record(record)?;
        let id = record.id.to_string();
        writer
            .write_record([
                id.as_str(),
                record.title.as_str(),
                record.subject.as_str(),
                record.due.as_str(),
                record.document.as_deref().unwrap_or(""),
            ])
            .map_err(|source| StoreError::Serialize { source })?;
    }
    writer
        .flush()
        .map_err(|source| StoreError::Serialize {
            source: csv::Error::from(source),
        })?;
    drop(writer);
    Ok(buffer)
}

/// Decodes file bytes into records.
///
/// Lines with the wrong field count, a non-numeric id, or an id already
/// seen are skipped with a warning; everything after them still loads.
pub fn decode_records(bytes: &[u8]) -> DecodeOutcome {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(DELIMITER)
        .quoting(false)
        .flexible(true)
        .from_reader(bytes);
    let mut outcome = DecodeOutcome::default();
    let mut seen = BTreeSet::new();
    for (index, row) in reader.records().enumerate() {
        let line = index + 1;
        let row = match row {
            Ok(row) => row,
            Err(error) => {
                tracing::warn!(line, %error, "skipping unreadable line in assignment file");
                outcome.skipped += 1;
                continue;
            }
        };
        match decode_row(&row, &mut seen) {
            Ok(record) => outcome.records.push(record),
            Err(reason) => {
                tracing::warn!(line, reason, "skipping malformed line in assignment file");
                outcome.skipped += 1;
            }
        }
    }
    outcome
}

fn decode_row(
    row: &StringRecord,
    seen: &mut BTreeSet<u64>,
) -> std::result::Result<AssignmentRecord, &'static str> {
    if row.len() != RECORD_FIELDS {
        return Err("wrong field count");
    }
    let id: u64 = row[0].trim().parse().map_err(|_| "id is not a number")?;
    let record = AssignmentRecord::new(RecordId::new(id), &row[1], &row[2], &row[3], &row[4])
        .map_err(|_| "field holds a reserved character")?;
    if !seen.insert(id) {
        return Err("duplicate id");
    }
    Ok(record)
}

fn check_record(record: &AssignmentRecord) -> Result<()> {
    let checked = check_field("title", &record.title)
        .and_then(|()| check_field("subject", &record.subject))
        .and_then(|()| check_field("due date", record.due.as_str()))
        .and_then(|()| match &record.document {
            Some(path) => check_field("document path", path),
            None => Ok(()),
        });
    checked.map_err(|source| StoreError::Encode {
        id: record.id,
        source,
    })
}
