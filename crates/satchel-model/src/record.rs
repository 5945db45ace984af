use std::fmt;

use serde::{Deserialize, Serialize};

use crate::due::DueDate;
use crate::error::ModelError;

/// Characters that may never appear inside a field: the on-disk field
/// delimiter and the record terminators.
pub const RESERVED_CHARACTERS: [char; 3] = ['|', '\n', '\r'];

/// Identifier of one assignment.
///
/// Ids are allocated by the store from a counter that only ever grows, so
/// an id observed once is never handed out again, even after its record
/// has been removed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RecordId(u64);

impl RecordId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One tracked assignment.
///
/// There is no `days_left` field: the day count is derived from `due`
/// and a reference date at display time and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub id: RecordId,
    pub title: String,
    pub subject: String,
    pub due: DueDate,
    /// Attachment path; `None` means no attachment.
    pub document: Option<String>,
}

impl AssignmentRecord {
    /// Builds a record, rejecting reserved characters in every field.
    ///
    /// An empty or whitespace-only document path becomes `None`.
    pub fn new(
        id: RecordId,
        title: impl Into<String>,
        subject: impl Into<String>,
        due: impl Into<String>,
        document: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let title = title.into();
        let subject = subject.into();
        let due = due.into();
        let document = document.into();
        check_field("title", &title)?;
        check_field("subject", &subject)?;
        check_field("due date", &due)?;
        check_field("document path", &document)?;
        let document = match document.trim() {
            "" => None,
            path => Some(path.to_string()),
        };
        Ok(Self {
            id,
            title,
            subject,
            due: DueDate::new(due),
            document,
        })
    }

    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }
}

/// Rejects a value containing any of [`RESERVED_CHARACTERS`].
pub fn check_field(field: &'static str, value: &str) -> Result<(), ModelError> {
    for character in RESERVED_CHARACTERS {
        if value.contains(character) {
            return Err(ModelError::ReservedCharacter { field, character });
        }
    }
    Ok(())
}
