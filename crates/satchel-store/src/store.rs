//! The owned collection of assignment records and its data file.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use satchel_model::{AssignmentRecord, RecordId};

use crate::codec::{decode_records, encode_records};
use crate::error::{Result, StoreError};

/// All assignment records, the id counter, and the file they persist to.
///
/// Records keep insertion order; views that present them differently sort
/// a borrowed copy. Ids come from a counter that is seeded from the file
/// on load and never moves backwards, so no id is handed out twice within
/// or across runs.
#[derive(Debug)]
pub struct AssignmentStore {
    path: PathBuf,
    records: Vec<AssignmentRecord>,
    next_id: u64,
}

impl AssignmentStore {
    /// Loads the store from `path`.
    ///
    /// A missing file is a first run, not an error: the store starts empty
    /// with the id counter at 1. Unreadable lines are skipped (see
    /// [`crate::codec::decode_records`]); the counter lands one past the
    /// highest id that survived.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no assignment file yet, starting empty");
                return Ok(Self {
                    path,
                    records: Vec::new(),
                    next_id: 1,
                });
            }
            Err(source) => {
                return Err(StoreError::Io {
                    operation: "read assignment file",
                    path,
                    source,
                });
            }
        };
        let outcome = decode_records(&bytes);
        let next_id = outcome
            .records
            .iter()
            .map(|record| record.id.value().saturating_add(1))
            .max()
            .unwrap_or(1);
        tracing::debug!(
            path = %path.display(),
            records = outcome.records.len(),
            skipped = outcome.skipped,
            "loaded assignments"
        );
        Ok(Self {
            path,
            records: outcome.records,
            next_id,
        })
    }

    /// Rewrites the data file with every record, one line each, in
    /// insertion order.
    ///
    /// The bytes go to a sibling temp file first and are renamed into
    /// place after a sync, so a crash mid-save leaves the previous file
    /// intact.
    pub fn save(&self) -> Result<()> {
        let bytes = encode_records(&self.records)?;
        let temp_path = self.path.with_extension("tmp");
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                operation: "create directory",
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let mut file = File::create(&temp_path).map_err(|source| StoreError::Io {
            operation: "create temp file",
            path: temp_path.clone(),
            source,
        })?;
        file.write_all(&bytes).map_err(|source| StoreError::Io {
            operation: "write temp file",
            path: temp_path.clone(),
            source,
        })?;
        file.sync_all().map_err(|source| StoreError::Io {
            operation: "sync temp file",
            path: temp_path.clone(),
            source,
        })?;
        fs::rename(&temp_path, &self.path).map_err(|source| StoreError::PersistFailed {
            temp_path,
            target_path: self.path.clone(),
            source,
        })?;
        tracing::info!(
            path = %self.path.display(),
            records = self.records.len(),
            "saved assignments"
        );
        Ok(())
    }

    /// Hands out the next free id and advances the counter.
    pub fn next_id(&mut self) -> RecordId {
        let id = RecordId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Appends a record and keeps the counter ahead of its id.
    pub fn add(&mut self, record: AssignmentRecord) {
        self.next_id = self.next_id.max(record.id.value().saturating_add(1));
        self.records.push(record);
    }

    /// Removes the record with `id`; `false` when nothing matched.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id != id);
        before != self.records.len()
    }

    pub fn get(&self, id: RecordId) -> Option<&AssignmentRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn records(&self) -> &[AssignmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
