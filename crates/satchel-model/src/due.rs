use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The format due dates are entered and persisted in.
pub const DUE_DATE_FORMAT: &str = "%d/%m/%Y";

/// A due date kept exactly as the user entered it.
///
/// The raw text is persisted verbatim; interpretation happens lazily via
/// [`DueDate::to_naive_date`], which is best-effort by contract: an entry
/// that does not read as `DD/MM/YYYY` is still stored and displayed, it
/// just cannot be placed on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueDate(String);

impl DueDate {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the stored text as a `DD/MM/YYYY` calendar date.
    ///
    /// One- and two-digit day and month values are accepted. Wrong
    /// separators, impossible dates, and free text all yield `None`.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.0.trim(), DUE_DATE_FORMAT).ok()
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
