//! Contact repository
//!
//! Binds the generic [`FileStore`] to [`Contact`] records, stored in
//! `contacts.json` by default.

use std::path::PathBuf;

use super::file::FileStore;
use super::{AsRecord, Record};
use crate::models::Contact;
use crate::paths;

/// Repository for contact records
#[derive(Debug, Clone)]
pub struct ContactRepository {
    store: FileStore,
}

impl ContactRepository {
    /// Create a repository over `contacts.json` in the default directory
    #[must_use]
    pub fn new() -> Self {
        Self::with_filename(paths::CONTACTS_FILE)
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

    /// Save all contacts, replacing the previous file content
    pub fn save_contacts(&self, contacts: &[Contact]) -> bool {
        let records: Vec<Record> = contacts.iter().map(AsRecord::to_record).collect();
        self.store.save(&records)
    }

    /// Load all contacts, in file order
    ///
    /// Returns an empty vec when the file is missing or unreadable.
    #[must_use]
    pub fn load_contacts(&self) -> Vec<Contact> {
        self.store.load().into_iter().map(Contact::from_record).collect()
    }

    /// Check if the contacts file exists
    #[must_use]
    pub fn exists(&self) -> bool {
        self.store.exists()
    }

    /// Delete the contacts file
    pub fn clear(&self) -> bool {
        self.store.clear()
    }
}

impl Default for ContactRepository {
    fn default() -> Self {
        Self::new()
    }
}
