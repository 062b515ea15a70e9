//! Property-based tests for scalar and cursor decorators using proptest
//!
//! Each decorator is compared against a plain iterator or closure that
//! computes the same answer directly.

use decorum::prelude::*;
use decorum::Result;
use proptest::prelude::*;
use std::cell::Cell;

// Strategy for generating small integer sequences
fn items_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..40)
}

// Helper: drain a cursor into a vector, failing on the first error
fn drain<C: Cursor>(cursor: C) -> Result<Vec<C::Item>> {
    cursor.into_results().collect()
}

proptest! {
    #[test]
    fn prop_iter_of_matches_iterator(items in items_strategy()) {
        let drained = drain(IterOf::new(items.clone())).unwrap();
        prop_assert_eq!(drained, items);
    }

    #[test]
    fn prop_immutable_is_transparent(items in items_strategy()) {
        let plain = drain(IterOf::new(items.clone())).unwrap();
        let wrapped = drain(Immutable::new(IterOf::new(items))).unwrap();
        prop_assert_eq!(plain, wrapped);
    }

    #[test]
    fn prop_synced_is_transparent_single_threaded(items in items_strategy()) {
        let synced = Synced::new(IterOf::new(items.clone()));
        prop_assert_eq!(drain(&synced).unwrap(), items);
    }

    #[test]
    fn prop_filtered_matches_iter_filter(items in items_strategy(), modulus in 1i32..7) {
        let expected: Vec<i32> = items.iter().copied().filter(|n| n % modulus == 0).collect();
        let filtered = Filtered::new(IterOf::new(items), |n: &i32| Ok(n % modulus == 0));
        prop_assert_eq!(drain(filtered).unwrap(), expected);
    }

    #[test]
    fn prop_has_more_is_idempotent(items in items_strategy(), checks in 1usize..5) {
        let mut cursor = IterOf::new(items.clone());
        for item in items {
            for _ in 0..checks {
                prop_assert!(cursor.has_more().unwrap());
            }
            prop_assert_eq!(cursor.advance().unwrap(), item);
        }
        for _ in 0..checks {
            prop_assert!(!cursor.has_more().unwrap());
        }
    }

    #[test]
    fn prop_exhaustion_is_permanent(items in items_strategy(), extra in 1usize..5) {
        let mut cursor = IterOf::new(items.clone());
        for _ in 0..items.len() {
            cursor.advance().unwrap();
        }
        for _ in 0..extra {
            prop_assert!(cursor.advance().unwrap_err().is_exhausted());
            prop_assert!(!cursor.has_more().unwrap());
        }
    }

    #[test]
    fn prop_first_of_matches_find(items in items_strategy(), threshold in -50i32..50) {
        let expected = items.iter().copied().find(|n| *n > threshold).unwrap_or(i32::MIN);
        let first = FirstOf::matching(|n: &i32| Ok(*n > threshold), items, i32::MIN);
        prop_assert_eq!(first.value().unwrap(), expected);
    }

    #[test]
    fn prop_item_at_matches_get(items in items_strategy(), position in 0usize..50) {
        let expected = items.get(position).copied().unwrap_or(0);
        let item = ItemAt::new(position, items, Constant::new(0));
        prop_assert_eq!(item.value().unwrap(), expected);
    }

    #[test]
    fn prop_sticky_evaluates_once(value in any::<i64>(), reads in 1usize..20) {
        let calls = Cell::new(0);
        let sticky = Sticky::new(ScalarOf::new(|| {
            calls.set(calls.get() + 1);
            Ok(value)
        }));
        for _ in 0..reads {
            prop_assert_eq!(sticky.value().unwrap(), value);
        }
        prop_assert_eq!(calls.get(), 1);
    }

    #[test]
    fn prop_solid_agrees_with_sticky(text in "[a-z]{0,12}", reads in 1usize..10) {
        let sticky = Sticky::new(Constant::new(text.clone()));
        let solid = Solid::new(Constant::new(text));
        for _ in 0..reads {
            prop_assert_eq!(sticky.value().unwrap(), solid.value().unwrap());
        }
    }

    #[test]
    fn prop_no_nulls_passes_present_values(value in proptest::option::of(any::<u16>())) {
        let checked = NoNulls::new(Constant::new(value), "value");
        match value {
            Some(v) => prop_assert_eq!(checked.value().unwrap(), v),
            None => prop_assert!(matches!(checked.value(), Err(Failure::Absent(_)))),
        }
    }

    #[test]
    fn prop_vec_cursor_removal_matches_retain(items in items_strategy()) {
        let mut expected = items.clone();
        expected.retain(|n| n % 2 != 0);

        let mut actual = items;
        let mut cursor = VecCursor::new(&mut actual);
        while cursor.has_more().unwrap() {
            if cursor.advance().unwrap() % 2 == 0 {
                cursor.remove().unwrap();
            }
        }
        drop(cursor);
        prop_assert_eq!(actual, expected);
    }
}
