//! Contact model
//!
//! A contact is one person in the assistant's address book. Only the name
//! is always present; every other field may be missing on disk and loads
//! as `None`.

use serde::{Deserialize, Serialize};

use crate::storage::AsRecord;

/// A single address-book entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Display name (empty string if absent in the record)
    #[serde(default)]
    pub name: String,

    /// Phone number, free-form
    pub phone: Option<String>,

    /// Email address
    pub email: Option<String>,

    /// Birthday, free-form text (no date parsing at this layer)
    pub birthday: Option<String>,

    /// Postal address
    pub address: Option<String>,
}

impl Contact {
    /// Create a new contact with just a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl AsRecord for Contact {}
