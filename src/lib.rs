//! assistant-store - JSON file persistence for a personal assistant
//!
//! This library stores collections of simple records (contacts, notes) as
//! JSON documents on local disk and reloads them into in-memory domain
//! objects. A generic [`storage::FileStore`] handles whole-collection
//! save/load for one file; typed repositories bind it to a record kind
//! and a default filename.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod models;
pub mod paths;
pub mod storage;
