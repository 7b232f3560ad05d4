//! Unit tests for the HistoryManager public API.
//!
//! These tests exercise visit recording, deduplication, the promote-to-front
//! rule, the 100-entry cap, corrupt-state recovery, and failure reporting,
//! using an in-memory key-value store.

use sitedock::managers::history_manager::{
    HistoryManager, HistoryManagerTrait, HISTORY_KEY, MAX_HISTORY_ENTRIES,
};
use sitedock::storage::{KeyValueStore, LocalStore};
use sitedock::types::errors::StorageError;

fn setup() -> LocalStore {
    LocalStore::open_in_memory().expect("Failed to open in-memory store")
}

/// A store whose writes always fail, for exercising the quota-exceeded path.
struct ReadOnlyStore(LocalStore);

impl KeyValueStore for ReadOnlyStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get_item(key)
    }
    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::WriteFailed("quota exceeded".to_string()))
    }
    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::WriteFailed("quota exceeded".to_string()))
    }
}

/// A fresh visit lands at the front of the log with a display time derived
/// from its timestamp.
#[test]
fn test_record_visit_inserts_at_front() {
    let store = setup();
    let mut mgr = HistoryManager::new(&store);

    mgr.record_visit("https://a.example", "A").unwrap();
    let log = mgr.record_visit("https://b.example", "B").unwrap();

    assert_eq!(log.len(), 2);
    assert_eq!(log[0].url, "https://b.example");
    assert_eq!(log[1].url, "https://a.example");
    assert!(log[0].timestamp > 0);
    // "YYYY-MM-DD HH:MM:SS"
    assert_eq!(log[0].visit_time.len(), 19);
}

/// Revisiting a URL promotes it to index 0 with the fresh name, keeps a
/// single entry for it, and leaves the other entries' relative order alone.
#[test]
fn test_repeat_visit_promotes_to_front() {
    let store = setup();
    let mut mgr = HistoryManager::new(&store);

    mgr.record_visit("x", "X").unwrap();
    mgr.record_visit("y", "Y").unwrap();
    let log = mgr.record_visit("x", "X2").unwrap();

    assert_eq!(log.len(), 2);
    assert_eq!(log[0].url, "x");
    assert_eq!(log[0].name, "X2");
    assert_eq!(log[1].url, "y");
    assert_eq!(log[1].name, "Y");
}

/// The log never exceeds the hard cap; the oldest entries fall off the tail.
#[test]
fn test_log_is_capped_at_100_entries() {
    let store = setup();
    let mut mgr = HistoryManager::new(&store);

    for i in 0..(MAX_HISTORY_ENTRIES + 20) {
        mgr.record_visit(&format!("https://site{}.example", i), "Site")
            .unwrap();
    }

    let log = mgr.list_history();
    assert_eq!(log.len(), MAX_HISTORY_ENTRIES);
    // Most recent survives, oldest dropped
    assert_eq!(log[0].url, "https://site119.example");
    assert!(log.iter().all(|r| r.url != "https://site0.example"));
}

/// An empty URL must not touch the persisted state.
#[test]
fn test_empty_url_is_silent_noop() {
    let store = setup();
    let mut mgr = HistoryManager::new(&store);

    mgr.record_visit("https://a.example", "A").unwrap();
    let log = mgr.record_visit("", "ghost").unwrap();

    assert_eq!(log.len(), 1);
    assert_eq!(mgr.list_history().len(), 1);
}

/// Corrupt stored JSON degrades to an empty log instead of erroring, and
/// the next write replaces it with valid state.
#[test]
fn test_corrupt_state_degrades_to_empty() {
    let store = setup();
    store.set_item(HISTORY_KEY, "{ not json ]").unwrap();

    let mut mgr = HistoryManager::new(&store);
    assert!(mgr.list_history().is_empty());

    let log = mgr.record_visit("https://a.example", "A").unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(mgr.list_history().len(), 1);
}

/// clear_all removes the persisted log.
#[test]
fn test_clear_all_empties_history() {
    let store = setup();
    let mut mgr = HistoryManager::new(&store);

    mgr.record_visit("https://a.example", "A").unwrap();
    mgr.record_visit("https://b.example", "B").unwrap();
    assert_eq!(mgr.list_history().len(), 2);

    mgr.clear_all().unwrap();
    assert!(mgr.list_history().is_empty());
}

/// A failing write surfaces as a StorageError instead of panicking, and the
/// durable state is unchanged.
#[test]
fn test_write_failure_is_reported_not_fatal() {
    let inner = setup();
    {
        let mut mgr = HistoryManager::new(&inner);
        mgr.record_visit("https://a.example", "A").unwrap();
    }

    let store = ReadOnlyStore(inner);
    let mut mgr = HistoryManager::new(&store);
    let result = mgr.record_visit("https://b.example", "B");
    assert!(matches!(result, Err(StorageError::WriteFailed(_))));

    // Durable state still holds only the first visit.
    let log = mgr.list_history();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].url, "https://a.example");
}
