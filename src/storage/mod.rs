//! Storage layer for assistant records
//!
//! Two levels:
//! - [`FileStore`]: generic whole-collection persistence of JSON records
//!   at one path
//! - Typed repositories ([`ContactRepository`], [`NoteRepository`]): bind
//!   the store to one record kind and a default filename
//!
//! The store only ever sees [`Record`] maps; domain objects cross the
//! boundary through the [`AsRecord`] capability.

mod contact;
mod file;
mod note;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use contact::ContactRepository;
pub use file::{FileStore, StorageError};
pub use note::NoteRepository;

/// One persisted record: a JSON object with string keys
pub type Record = serde_json::Map<String, Value>;

/// Canonical record conversion for a domain type
///
/// The conversion is resolved at compile time through this trait rather
/// than by probing objects at runtime. The default methods round-trip
/// through the type's serde implementation, which fixes the field set and
/// its defaults; a type may override either direction to supply its own
/// canonical mapping.
pub trait AsRecord: Serialize + DeserializeOwned + Default {
    /// Convert this object to its canonical record
    fn to_record(&self) -> Record {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Record::new(),
        }
    }

    /// Reconstruct an object from a record, best-effort
    ///
    /// A record that cannot be deserialized at all yields the type's
    /// default value; missing fields take their field defaults.
    #[must_use]
    fn from_record(record: Record) -> Self {
        serde_json::from_value(Value::Object(record)).unwrap_or_default()
    }
}
