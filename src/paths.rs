//! Centralized path definitions for assistant storage
//!
//! This module provides a single source of truth for the filesystem paths
//! used by the persistence layer.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.personal_assistant/
//! ├── contacts.json             # Contact records
//! └── notes.json                # Note records
//! ```
//!
//! The directory is a default, not a requirement: every store and
//! repository constructor accepts an explicit directory override, so tests
//! (and embedders) can redirect storage without touching process-wide
//! state.

use std::path::PathBuf;

/// Directory name for assistant storage, under the user's home directory
pub const STORAGE_DIR: &str = ".personal_assistant";

/// Default filename for contact records
pub const CONTACTS_FILE: &str = "contacts.json";

/// Default filename for note records
pub const NOTES_FILE: &str = "notes.json";

/// Get the default storage directory.
///
/// Returns `~/.personal_assistant/`.
#[must_use]
pub fn default_storage_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(STORAGE_DIR)
}
