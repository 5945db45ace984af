//! Launching attached documents with the platform handler.

use std::io;

use thiserror::Error;

/// Failure to hand a document to the platform handler.
#[derive(Debug, Error)]
#[error("Failed to open document: {path}")]
pub struct OpenError {
    pub path: String,
    #[source]
    pub source: io::Error,
}

/// Capability to open a stored document path externally.
///
/// The session only ever hands over the stored path; nothing in this
/// program reads document contents. Tests inject a recording fake.
pub trait DocumentOpener {
    fn open(&self, path: &str) -> Result<(), OpenError>;
}

/// Opens documents with the platform default handler.
pub struct SystemOpener;

impl DocumentOpener for SystemOpener {
    fn open(&self, path: &str) -> Result<(), OpenError> {
        tracing::debug!(path, "opening document");
        open::that(path).map_err(|source| OpenError {
            path: path.to_string(),
            source,
        })
    }
}
