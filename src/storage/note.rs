//! Note repository
//!
//! Binds the generic [`FileStore`] to [`Note`] records, stored in
//! `notes.json` by default.

use std::path::PathBuf;

use super::file::FileStore;
use super::{AsRecord, Record};
use crate::models::Note;
use crate::paths;

/// Repository for note records
#[derive(Debug, Clone)]
pub struct NoteRepository {
    store: FileStore,
}

impl NoteRepository {
    /// Create a repository over `notes.json` in the default directory
    #[must_use]
    pub fn new() -> Self {
        Self::with_filename(paths::NOTES_FILE)
    }

    /// Create a repository over a custom filename in the default directory
    #[must_use]
    pub fn with_filename(filename: &str) -> Self {
        Self {
            store: FileStore::new(filename),
        }
    }

    /// Create a repository over a custom filename and directory
    #[must_use]
    pub fn in_dir(filename: &str, storage_dir: impl Into<PathBuf>) -> Self {
        Self {
            store: FileStore::in_dir(filename, storage_dir),
        }
    }

    /// Save all notes, replacing the previous file content
    pub fn save_notes(&self, notes: &[Note]) -> bool {
        let records: Vec<Record> = notes.iter().map(AsRecord::to_record).collect();
        self.store.save(&records)
    }

    /// Load all notes, in file order
    ///
    /// Returns an empty vec when the file is missing or unreadable.
    #[must_use]
    pub fn load_notes(&self) -> Vec<Note> {
        self.store.load().into_iter().map(Note::from_record).collect()
    }

    /// Check if the notes file exists
    #[must_use]
    pub fn exists(&self) -> bool {
        self.store.exists()
    }

    /// Delete the notes file
    pub fn clear(&self) -> bool {
        self.store.clear()
    }
}

impl Default for NoteRepository {
    fn default() -> Self {
        Self::new()
    }
}
