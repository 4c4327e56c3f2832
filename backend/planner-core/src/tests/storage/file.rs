// Unit tests for the JSON-file store, each in its own temp dir

use crate::error::StorageError;
use crate::storage::{FileStore, KeyValueStore};

use tempfile::TempDir;

#[test]
fn given_no_file_when_reading_then_none() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::in_dir(temp.path());

    assert_eq!(store.get("gemini_api_key").unwrap(), None);
    assert!(!store.path().exists());
}

/// **VALUE**: Verifies entries survive a new handle on the same directory.
///
/// **WHY THIS MATTERS**: This is the restart path. A confirmed key must be
/// found again by the next process.
#[test]
fn given_value_written_when_reopening_then_value_is_found() {
    // GIVEN: A store that persisted a value
    let temp = TempDir::new().unwrap();
    FileStore::in_dir(temp.path()).set("gemini_api_key", "AIza-persisted").unwrap();

    // WHEN: Opening a fresh handle
    let reopened = FileStore::in_dir(temp.path());

    // THEN: The value is there and the file is plain JSON
    assert_eq!(
        reopened.get("gemini_api_key").unwrap().as_deref(),
        Some("AIza-persisted")
    );
    let raw = std::fs::read_to_string(reopened.path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["gemini_api_key"], "AIza-persisted");
}

#[test]
fn given_missing_directory_when_setting_then_directory_is_created() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("a").join("b");
    let store = FileStore::in_dir(&nested);

    store.set("k", "v").unwrap();

    assert!(nested.join("storage.json").exists());
    assert!(!nested.join("storage.json.tmp").exists());
}

#[test]
fn given_other_entries_when_removing_key_then_others_survive() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::in_dir(temp.path());
    store.set("keep", "1").unwrap();
    store.set("drop", "2").unwrap();

    store.remove("drop").unwrap();

    assert_eq!(store.get("drop").unwrap(), None);
    assert_eq!(store.get("keep").unwrap().as_deref(), Some("1"));
}

/// **VALUE**: Verifies removal of an absent key never touches the disk.
///
/// **BUG THIS CATCHES**: Would catch `remove` creating an empty store file
/// (or failing) when nothing was stored.
#[test]
fn given_no_file_when_removing_then_ok_and_no_file_created() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::in_dir(temp.path());

    store.remove("gemini_api_key").unwrap();

    assert!(!store.path().exists());
}

#[test]
fn given_empty_file_when_reading_then_none() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("storage.json"), "  \n").unwrap();
    let store = FileStore::in_dir(temp.path());

    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn given_corrupt_file_when_reading_then_parse_error() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("storage.json"), "{not json").unwrap();
    let store = FileStore::in_dir(temp.path());

    let error = store.get("k").unwrap_err();

    assert!(matches!(error, StorageError::Parse { .. }));
    assert_eq!(error.error_category(), "parse");
}
