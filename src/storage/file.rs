//! Generic JSON file store
//!
//! One `FileStore` owns one file path and persists a whole collection of
//! records at a time: save overwrites everything, load reads everything.
//! No operation here returns an error to the caller; failures are logged
//! and surfaced as `false` or an empty collection.

use std::fs;
use std::path::{Path, PathBuf};

use log::error;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::Record;
use crate::paths;

/// Errors that can occur inside the store
///
/// These never cross the public API; they exist so the internal fallible
/// helpers compose with `?` before the boundary converts them to a
/// boolean/empty signal.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error during file operations
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage file holds invalid JSON
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Whole-collection JSON persistence at one fixed path
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for `filename` in the default storage directory
    ///
    /// See [`paths::default_storage_dir`]. The directory is created
    /// immediately if missing.
    #[must_use]
    pub fn new(filename: &str) -> Self {
        Self::in_dir(filename, paths::default_storage_dir())
    }

    /// Create a store for `filename` in an explicit directory
    ///
    /// The directory (and any missing ancestors) is created immediately;
    /// creation is idempotent. A creation failure is logged here and shows
    /// up as a failed save later, it does not panic.
    #[must_use]
    pub fn in_dir(filename: &str, storage_dir: impl Into<PathBuf>) -> Self {
        let dir = storage_dir.into();
        if let Err(e) = fs::create_dir_all(&dir) {
            error!("failed to create storage directory {}: {e}", dir.display());
        }
        Self {
            path: dir.join(filename),
        }
    }

    /// The file path this store owns
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save the full collection, replacing any previous file content
    ///
    /// The records are written as a pretty-printed JSON array (4-space
    /// indent, non-ASCII characters kept literal) to a temporary file that
    /// is then renamed over the target, so readers observe either the old
    /// or the new content, never a torn write.
    ///
    /// Returns `true` on success; any failure is logged and returns
    /// `false`.
    pub fn save(&self, records: &[Record]) -> bool {
        match self.try_save(records) {
            Ok(()) => true,
            Err(e) => {
                error!("failed to save {}: {e}", self.path.display());
                false
            }
        }
    }

    fn try_save(&self, records: &[Record]) -> Result<(), StorageError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut ser)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &buf)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Load the full collection
    ///
    /// A missing file is the normal empty state and yields an empty vec
    /// without logging. Invalid JSON or an IO failure is logged and also
    /// yields an empty vec; a file whose top-level value is not an array
    /// is treated as empty. This never returns partial data.
    #[must_use]
    pub fn load(&self) -> Vec<Record> {
        if !self.path.exists() {
            return Vec::new();
        }
        match self.try_load() {
            Ok(records) => records,
            Err(e) => {
                error!("failed to load {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }

    fn try_load(&self) -> Result<Vec<Record>, StorageError> {
        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Value>(&content)? {
            // Non-object elements are skipped rather than failing the load
            Value::Array(items) => Ok(items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(record) => Some(record),
                    _ => None,
                })
                .collect()),
            _ => Ok(Vec::new()),
        }
    }

    /// Check if the storage file exists on disk
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Delete the storage file
    ///
    /// Returns `true` if the file was present and removed, `false` if it
    /// was already absent. A removal failure is logged and reported as
    /// `false`.
    pub fn clear(&self) -> bool {
        if !self.path.exists() {
            return false;
        }
        match fs::remove_file(&self.path) {
            Ok(()) => true,
            Err(e) => {
                error!("failed to delete {}: {e}", self.path.display());
                false
            }
        }
    }
}
