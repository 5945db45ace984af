//! Flat-file persistence for assignment records.
//!
//! The data file is plain text, one record per line:
//!
//! ```text
//! <id>|<title>|<subject>|<dueDate>|<documentPath>
//! ```
//!
//! Saves rewrite the whole file atomically (temp file + rename); loads
//! are permissive, skipping lines that do not fit the format so one bad
//! line never takes the rest of the data with it.

pub mod codec;
pub mod error;
pub mod store;

pub use codec::{DELIMITER, DecodeOutcome, RECORD_FIELDS, decode_records, encode_records};
pub use error::{Result, StoreError};
pub use store::AssignmentStore;
