//! Data models for the personal assistant
//!
//! Core record kinds:
//! - Contact: a person's name plus optional reachability details
//! - Note: free text with tags

mod contact;
mod note;

pub use contact::Contact;
pub use note::Note;
