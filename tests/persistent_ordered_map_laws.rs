#![cfg(feature = "persistent")]
//! Property-based tests for `PersistentOrderedMap`.
//!
//! These verify the structural and behavioral laws of the map under
//! arbitrary operation sequences using proptest.

use std::collections::BTreeMap;

use permars::persistent::PersistentOrderedMap;
use proptest::prelude::*;

/// Strategy for a map built from arbitrary (possibly duplicated) pairs.
fn arbitrary_map(max_size: usize) -> impl Strategy<Value = PersistentOrderedMap<i32, i32>> {
    prop::collection::vec((any::<i32>(), any::<i32>()), 0..max_size)
        .prop_map(|entries| entries.into_iter().collect())
}

/// The AVL height bound: height < 1.4405 * log2(n + 2) + 1.
#[allow(clippy::cast_precision_loss)]
fn avl_height_bound(entry_count: usize) -> f64 {
    1.4405 * ((entry_count as f64) + 2.0).log2() + 1.0
}

// =============================================================================
// Structural Laws
// =============================================================================

proptest! {
    /// Law: in-order iteration yields strictly ascending keys.
    #[test]
    fn prop_iteration_strictly_ascending(map in arbitrary_map(60)) {
        let keys: Vec<i32> = map.keys().copied().collect();
        for window in keys.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
    }

    /// Law: the tree height stays within the AVL bound.
    #[test]
    fn prop_height_within_avl_bound(map in arbitrary_map(200)) {
        #[allow(clippy::cast_precision_loss)]
        let height = map.height() as f64;
        prop_assert!(height <= avl_height_bound(map.len()));
    }

    /// Law: the height bound survives heavy removal.
    #[test]
    fn prop_height_bound_after_removals(
        entries in prop::collection::vec((any::<i32>(), any::<i32>()), 0..120),
        removals in prop::collection::vec(any::<prop::sample::Index>(), 0..60)
    ) {
        let mut map: PersistentOrderedMap<i32, i32> = entries.iter().copied().collect();
        for index in removals {
            if map.is_empty() {
                break;
            }
            let position = index.index(map.len());
            let key = *map.keys().nth(position).unwrap();
            map = map.remove(&key).unwrap();
        }
        #[allow(clippy::cast_precision_loss)]
        let height = map.height() as f64;
        prop_assert!(height <= avl_height_bound(map.len()));
    }

    /// Law: the entry count equals the number of distinct keys inserted
    /// minus the keys removed.
    #[test]
    fn prop_count_tracks_distinct_keys(
        entries in prop::collection::vec((any::<i32>(), any::<i32>()), 0..60)
    ) {
        let map: PersistentOrderedMap<i32, i32> = entries.iter().copied().collect();
        let reference: BTreeMap<i32, i32> = entries.into_iter().collect();
        prop_assert_eq!(map.len(), reference.len());
    }
}

// =============================================================================
// Behavioral Laws
// =============================================================================

proptest! {
    /// Law: the map agrees with `BTreeMap` under the same updates.
    #[test]
    fn prop_agrees_with_btreemap(
        entries in prop::collection::vec((any::<i32>(), any::<i32>()), 0..60)
    ) {
        let map: PersistentOrderedMap<i32, i32> = entries.iter().copied().collect();
        let reference: BTreeMap<i32, i32> = entries.into_iter().collect();

        let map_entries: Vec<(i32, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        let reference_entries: Vec<(i32, i32)> = reference.into_iter().collect();
        prop_assert_eq!(map_entries, reference_entries);
    }

    /// Law: find returns the value last set for the key.
    #[test]
    fn prop_find_after_update(map in arbitrary_map(40), key: i32, value: i32) {
        let updated = map.update(key, value);
        prop_assert_eq!(updated.find(&key), Ok(&value));
    }

    /// Law: update does not affect other keys.
    #[test]
    fn prop_update_preserves_other_keys(
        map in arbitrary_map(40),
        key1: i32,
        key2: i32,
        value: i32
    ) {
        prop_assume!(key1 != key2);
        let updated = map.update(key1, value);
        prop_assert_eq!(updated.get(&key2), map.get(&key2));
    }

    /// Law: the receiver of an update is itself unchanged (persistence).
    #[test]
    fn prop_update_leaves_original_intact(map in arbitrary_map(40), key: i32, value: i32) {
        let before: Vec<(i32, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        let _updated = map.update(key, value);
        let after: Vec<(i32, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(before, after);
    }

    /// Law: remove then try_find yields the empty optional.
    #[test]
    fn prop_remove_then_try_find_is_empty(
        entries in prop::collection::vec((any::<i32>(), any::<i32>()), 1..40)
    ) {
        let map: PersistentOrderedMap<i32, i32> = entries.iter().copied().collect();
        let (key, _) = entries[0];
        let removed = map.remove(&key).unwrap();
        prop_assert!(removed.try_find(&key).is_empty());
        // The original still holds the key.
        prop_assert!(map.contains_key(&key));
    }

    /// Law: add of a fresh key then remove of it restores the entry set.
    #[test]
    fn prop_add_remove_roundtrip(map in arbitrary_map(40), key: i32, value: i32) {
        prop_assume!(!map.contains_key(&key));
        let roundtripped = map.add(key, value).unwrap().remove(&key).unwrap();
        prop_assert_eq!(roundtripped, map);
    }

    /// Law: equality ignores insertion order (and therefore tree shape).
    #[test]
    fn prop_equality_ignores_shape(
        entries in prop::collection::btree_map(any::<i32>(), any::<i32>(), 0..40)
    ) {
        let ascending: PersistentOrderedMap<i32, i32> =
            entries.iter().map(|(k, v)| (*k, *v)).collect();
        let descending: PersistentOrderedMap<i32, i32> =
            entries.iter().rev().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(ascending, descending);
    }
}
