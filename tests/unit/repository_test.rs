//! Tests for the typed repositories (contact and note adapters)

use std::fs;

use assistant_store::models::{Contact, Note};
use assistant_store::storage::{ContactRepository, NoteRepository};
use tempfile::tempdir;

// =============================================================================
// CONTACT REPOSITORY TESTS
// =============================================================================

#[test]
fn test_contact_save_load_clear_lifecycle() {
    let dir = tempdir().unwrap();
    let repo = ContactRepository::in_dir("test_contacts.json", dir.path());

    assert!(!repo.exists());

    let mut ann = Contact::new("Ann");
    ann.phone = Some("123".to_string());

    assert!(repo.save_contacts(&[ann]));
    assert!(repo.exists());

    let loaded = repo.load_contacts();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Ann");
    assert_eq!(loaded[0].phone.as_deref(), Some("123"));
    assert_eq!(loaded[0].email, None);
    assert_eq!(loaded[0].birthday, None);
    assert_eq!(loaded[0].address, None);

    assert!(repo.clear());
    assert!(!repo.exists());
    assert!(repo.load_contacts().is_empty());
}

#[test]
fn test_contact_round_trip_preserves_order_and_duplicates() {
    let dir = tempdir().unwrap();
    let repo = ContactRepository::in_dir("contacts.json", dir.path());

    let contacts = vec![Contact::new("Bob"), Contact::new("Ann"), Contact::new("Bob")];

    assert!(repo.save_contacts(&contacts));
    assert_eq!(repo.load_contacts(), contacts);
}

#[test]
fn test_contact_missing_fields_load_as_none() {
    let dir = tempdir().unwrap();
    let repo = ContactRepository::in_dir("contacts.json", dir.path());

    // A record written by an older tool may carry only some fields
    fs::write(
        dir.path().join("contacts.json"),
        r#"[{"name": "Bob", "phone": "555"}]"#,
    )
    .unwrap();

    let loaded = repo.load_contacts();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Bob");
    assert_eq!(loaded[0].phone.as_deref(), Some("555"));
    assert_eq!(loaded[0].email, None);
    assert_eq!(loaded[0].birthday, None);
    assert_eq!(loaded[0].address, None);
}

#[test]
fn test_contact_load_never_created_file_returns_empty() {
    let dir = tempdir().unwrap();
    let repo = ContactRepository::in_dir("contacts.json", dir.path());

    assert!(!repo.exists());
    assert!(repo.load_contacts().is_empty());
}

#[test]
fn test_contact_load_invalid_json_returns_empty() {
    let dir = tempdir().unwrap();
    let repo = ContactRepository::in_dir("contacts.json", dir.path());

    fs::write(dir.path().join("contacts.json"), "not valid json").unwrap();
    assert!(repo.load_contacts().is_empty());
}

// =============================================================================
// NOTE REPOSITORY TESTS
// =============================================================================

#[test]
fn test_note_round_trip_with_tags() {
    let dir = tempdir().unwrap();
    let repo = NoteRepository::in_dir("test_notes.json", dir.path());

    let notes = vec![
        Note::with_tags("buy milk", vec!["errands".to_string(), "home".to_string()]),
        Note::new("call dentist"),
    ];

    assert!(repo.save_notes(&notes));
    assert_eq!(repo.load_notes(), notes);
}

#[test]
fn test_note_missing_fields_load_as_defaults() {
    let dir = tempdir().unwrap();
    let repo = NoteRepository::in_dir("notes.json", dir.path());

    fs::write(dir.path().join("notes.json"), r#"[{"text": "bare note"}, {}]"#).unwrap();

    let loaded = repo.load_notes();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].text, "bare note");
    assert!(loaded[0].tags.is_empty());
    assert_eq!(loaded[1].text, "");
    assert!(loaded[1].tags.is_empty());
}

#[test]
fn test_note_clear_twice_returns_true_then_false() {
    let dir = tempdir().unwrap();
    let repo = NoteRepository::in_dir("notes.json", dir.path());

    assert!(repo.save_notes(&[Note::new("temp")]));
    assert!(repo.clear());
    assert!(!repo.clear());
    assert!(!repo.exists());
}

// =============================================================================
// SHARED-DIRECTORY TESTS
// =============================================================================

#[test]
fn test_repositories_share_a_directory_without_clashing() {
    let dir = tempdir().unwrap();
    let contacts = ContactRepository::in_dir("contacts.json", dir.path());
    let notes = NoteRepository::in_dir("notes.json", dir.path());

    assert!(contacts.save_contacts(&[Contact::new("Ann")]));
    assert!(notes.save_notes(&[Note::new("remember")]));

    assert_eq!(contacts.load_contacts().len(), 1);
    assert_eq!(notes.load_notes().len(), 1);

    assert!(contacts.clear());
    assert!(notes.exists());
}
