use super::*;
use serde_json::json;

fn alice() -> Session {
    serde_json::from_value(json!({ "name": "Alice", "token": "T1" })).unwrap()
}

#[test]
fn memory_store_starts_empty() {
    let store = MemorySessionStore::new();
    assert!(!store.has_session());
    assert!(store.load().is_none());
}

#[test]
fn save_then_load_returns_same_session() {
    let store = MemorySessionStore::new();
    store.save(&alice()).unwrap();
    assert!(store.has_session());
    assert_eq!(store.load(), Some(alice()));
    assert_eq!(store.read_raw().as_deref(), Some(r#"{"name":"Alice","token":"T1"}"#));
}

#[test]
fn remove_clears_session() {
    let store = MemorySessionStore::with_session(&alice());
    store.remove();
    assert!(!store.has_session());
    assert!(store.read_raw().is_none());
}

#[test]
fn empty_string_is_not_a_session() {
    let store = MemorySessionStore::with_raw("");
    assert!(!store.has_session());
}

#[test]
fn garbage_text_counts_as_present_but_does_not_parse() {
    let store = MemorySessionStore::with_raw("not json");
    assert!(store.has_session());
    assert!(store.load().is_none());
}

#[test]
fn rc_store_shares_state() {
    let store = Rc::new(MemorySessionStore::new());
    let other = Rc::clone(&store);
    other.save(&alice()).unwrap();
    assert_eq!(store.load(), Some(alice()));
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_store_is_noop_outside_browser() {
    let store = LocalStorageSessionStore;
    assert_eq!(store.save(&alice()), Ok(()));
    assert!(!store.has_session());
    store.remove();
}

/// Store whose backing storage rejects every write.
struct FullStore;

impl SessionStore for FullStore {
    fn read_raw(&self) -> Option<String> {
        None
    }

    fn write_raw(&self, _raw: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("QuotaExceededError".to_owned()))
    }

    fn remove(&self) {}
}

#[test]
fn save_reports_rejected_write() {
    let err = FullStore.save(&alice()).unwrap_err();
    assert_eq!(err, StorageError::Write("QuotaExceededError".to_owned()));
    assert!(!FullStore.has_session());
}
