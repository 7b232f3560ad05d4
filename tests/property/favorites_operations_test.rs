//! Property-based tests for the favorites list.
//!
//! For arbitrary interleavings of add and remove operations, the list must
//! never hold two entries with the same URL and removal must never panic,
//! whatever index it is given.

use proptest::prelude::*;
use std::collections::HashSet;

use sitedock::managers::favorites_manager::{FavoritesManager, FavoritesManagerTrait};
use sitedock::storage::LocalStore;

#[derive(Debug, Clone)]
enum Op {
    Add(u32),
    Remove(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u32..30).prop_map(Op::Add),
        (0usize..40).prop_map(Op::Remove),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn favorites_stay_unique_under_any_op_sequence(
        ops in proptest::collection::vec(arb_op(), 1..80),
    ) {
        let store = LocalStore::open_in_memory()
            .expect("Failed to open in-memory store");
        let mut manager = FavoritesManager::new(&store);

        for op in &ops {
            match op {
                Op::Add(i) => {
                    let url = format!("https://fav{}.example", i);
                    let already = manager
                        .list_favorites()
                        .iter()
                        .any(|f| f.url == url);
                    let added = manager
                        .add_favorite(&url, &format!("Fav {}", i))
                        .expect("add_favorite should succeed");
                    prop_assert_eq!(added, !already, "added must report whether the URL was new");
                }
                Op::Remove(index) => {
                    let len = manager.list_favorites().len();
                    manager
                        .remove_favorite(*index)
                        .expect("remove_favorite should never fail on any index");
                    let new_len = manager.list_favorites().len();
                    if *index < len {
                        prop_assert_eq!(new_len, len - 1);
                    } else {
                        prop_assert_eq!(new_len, len, "out-of-range remove must be a no-op");
                    }
                }
            }

            let favorites = manager.list_favorites();
            let mut seen = HashSet::new();
            prop_assert!(
                favorites.iter().all(|f| seen.insert(f.url.clone())),
                "favorites must never contain duplicate URLs"
            );
        }
    }
}
