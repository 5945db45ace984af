//! Store error types.

use std::path::PathBuf;

use satchel_model::{ModelError, RecordId};
use thiserror::Error;

/// Storage operation error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O failure.
    #[error("Failed to {operation}: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record carries a character the file format cannot hold.
    #[error("Cannot store record {id}: {source}")]
    Encode {
        id: RecordId,
        #[source]
        source: ModelError,
    },

    /// Low-level writer failure while encoding records.
    #[error("Failed to serialize assignment records")]
    Serialize {
        #[source]
        source: csv::Error,
    },

    /// Atomic save failed (temp file could not be renamed into place).
    #[error("Failed to complete save: {target_path}")]
    PersistFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
