//! Property-based tests for the visit history log.
//!
//! For arbitrary sequences of record_visit calls, the log invariants must
//! hold: length never exceeds the cap, no two entries share a URL, and the
//! most recent visit is always at the front.

use proptest::prelude::*;

use sitedock::managers::history_manager::{
    log_is_well_formed, HistoryManager, HistoryManagerTrait, MAX_HISTORY_ENTRIES,
};
use sitedock::storage::LocalStore;

/// Strategy for generating valid URL strings from a pool wide enough to
/// overflow the cap and narrow enough to force plenty of repeat visits.
fn arb_url() -> impl Strategy<Value = String> {
    (0u32..160).prop_map(|i| format!("https://site{}.example", i))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn log_invariants_hold_for_any_visit_sequence(
        urls in proptest::collection::vec(arb_url(), 1..300),
    ) {
        let store = LocalStore::open_in_memory()
            .expect("Failed to open in-memory store");
        let mut manager = HistoryManager::new(&store);

        for url in &urls {
            let log = manager
                .record_visit(url, "Site")
                .expect("record_visit should succeed for valid inputs");

            prop_assert!(log.len() <= MAX_HISTORY_ENTRIES);
            prop_assert!(log_is_well_formed(&log));
            prop_assert_eq!(&log[0].url, url, "most recent visit must be at the front");
        }

        // The persisted log matches what the last call returned.
        let persisted = manager.list_history();
        prop_assert!(log_is_well_formed(&persisted));
        prop_assert_eq!(&persisted[0].url, urls.last().unwrap());
    }

    #[test]
    fn revisits_preserve_other_entries_relative_order(
        urls in proptest::collection::vec(arb_url(), 2..40),
        revisit_index in any::<prop::sample::Index>(),
    ) {
        let store = LocalStore::open_in_memory()
            .expect("Failed to open in-memory store");
        let mut manager = HistoryManager::new(&store);

        for url in &urls {
            manager.record_visit(url, "Site").expect("record_visit should succeed");
        }

        let before = manager.list_history();
        let revisited = revisit_index.get(&before).url.clone();
        manager.record_visit(&revisited, "Site").expect("record_visit should succeed");
        let after = manager.list_history();

        prop_assert_eq!(&after[0].url, &revisited);
        prop_assert_eq!(after.len(), before.len());

        // Everything except the revisited URL keeps its relative order.
        let others_before: Vec<&String> =
            before.iter().map(|r| &r.url).filter(|u| **u != revisited).collect();
        let others_after: Vec<&String> =
            after.iter().map(|r| &r.url).filter(|u| **u != revisited).collect();
        prop_assert_eq!(others_before, others_after);
    }
}
