//! Note model

use serde::{Deserialize, Serialize};

use crate::storage::AsRecord;

/// A free-text note with optional tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// The note body (empty string if absent in the record)
    #[serde(default)]
    pub text: String,

    /// Tags for grouping and lookup by the application layer
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Note {
    /// Create a new note with no tags
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags: Vec::new(),
        }
    }

    /// Create a new note with tags
    #[must_use]
    pub fn with_tags(text: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            text: text.into(),
            tags,
        }
    }
}

impl AsRecord for Note {}
