use crate::storage::{KeyValueStore, MemoryStore};

#[test]
fn given_empty_store_when_setting_then_value_is_readable() {
    let store = MemoryStore::new();

    store.set("gemini_api_key", "value").unwrap();

    assert_eq!(store.get("gemini_api_key").unwrap().as_deref(), Some("value"));
    assert_eq!(store.len(), 1);
}

/// **VALUE**: Verifies clones share entries.
///
/// **WHY THIS MATTERS**: Tests hand one clone to the credential store and
/// inspect another; a deep clone would hide every write.
#[test]
fn given_cloned_store_when_writing_through_one_then_other_sees_it() {
    let store = MemoryStore::new();
    let observer = store.clone();

    store.set("k", "v").unwrap();

    assert_eq!(observer.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn given_missing_key_when_removing_then_ok() {
    let store = MemoryStore::with_entry("k", "v");

    store.remove("other").unwrap();
    store.remove("k").unwrap();
    store.remove("k").unwrap();

    assert!(store.is_empty());
}
