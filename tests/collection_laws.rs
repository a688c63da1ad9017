//! Property-based tests for Collection.
//!
//! These tests verify the algebraic properties that every transformation
//! must satisfy, independently of the concrete elements.

use funcollect::collection::Collection;
use proptest::prelude::*;

// =============================================================================
// Strategy for generating Collection
// =============================================================================

/// Generates a `Vec<i32>` with up to `max_size` elements drawn from a small
/// range so that duplicates are common.
fn elements_strategy(max_size: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-10..10_i32, 0..max_size)
}

/// Generates a small `Collection<i32>` for faster tests.
fn small_collection() -> impl Strategy<Value = Collection<i32>> {
    elements_strategy(30).prop_map(|elements| Collection::new(&elements))
}

proptest! {
    // =========================================================================
    // Filter Properties
    // =========================================================================

    #[test]
    fn prop_filter_preserves_relative_order(collection in small_collection(), divisor in 1..5_i32) {
        let filtered = collection.filter(|element| element % divisor == 0);
        let expected: Vec<i32> = collection
            .iter()
            .copied()
            .filter(|element| element % divisor == 0)
            .collect();
        prop_assert_eq!(filtered.to_vec(), expected);
        prop_assert!(filtered.len() <= collection.len());
    }

    // =========================================================================
    // Reverse Properties
    // =========================================================================

    #[test]
    fn prop_reverse_reverse_is_identity(collection in small_collection()) {
        prop_assert_eq!(collection.reverse().reverse(), collection);
    }

    // =========================================================================
    // Distinct Properties
    // =========================================================================

    #[test]
    fn prop_distinct_is_idempotent(collection in small_collection()) {
        let once = collection.distinct();
        prop_assert_eq!(once.distinct(), once);
    }

    #[test]
    fn prop_distinct_elements_occur_once(collection in small_collection()) {
        let distinct = collection.distinct();
        for element in &distinct {
            prop_assert_eq!(distinct.iter().filter(|other| *other == element).count(), 1);
        }
        for element in &collection {
            prop_assert!(distinct.any_match(|other| other == element));
        }
    }

    // =========================================================================
    // Limit / Skip Properties
    // =========================================================================

    #[test]
    fn prop_limit_then_skip_partitions(elements in elements_strategy(30), seed in any::<usize>()) {
        let collection = Collection::new(&elements);
        let count = isize::try_from(seed % (elements.len() + 1)).unwrap();
        let mut joined = collection.limit(count).to_vec();
        joined.extend(collection.skip(count));
        prop_assert_eq!(joined, elements);
    }

    #[test]
    fn prop_limit_never_exceeds_length(collection in small_collection(), count in any::<isize>()) {
        let limited = collection.limit(count);
        prop_assert!(limited.len() <= collection.len());
        prop_assert_eq!(limited.len() + collection.skip(count).len(), collection.len());
    }

    // =========================================================================
    // Map / FlatMap Properties
    // =========================================================================

    #[test]
    fn prop_map_identity(collection in small_collection()) {
        prop_assert_eq!(collection.map(|element| *element), collection);
    }

    #[test]
    fn prop_map_composition(collection in small_collection()) {
        let composed = collection.map(|element| (element + 1) * 2);
        let chained = collection.map(|element| element + 1).map(|element| element * 2);
        prop_assert_eq!(composed, chained);
    }

    #[test]
    fn prop_flat_map_doubles_length(collection in small_collection()) {
        let expanded = collection.flat_map(|element| (*element, -element));
        prop_assert_eq!(expanded.len(), collection.len() * 2);
        for (index, element) in collection.iter().enumerate() {
            prop_assert_eq!(expanded.get(2 * index), Some(element));
            let negated = -element;
            prop_assert_eq!(expanded.get(2 * index + 1), Some(&negated));
        }
    }

    // =========================================================================
    // Replace Properties
    // =========================================================================

    #[test]
    fn prop_replace_all_leaves_no_target(collection in small_collection(), target in -10..10_i32) {
        let replaced = collection.replace_all(&[target], 100);
        prop_assert!(!replaced.any_match(|element| *element == target));
        prop_assert_eq!(replaced.len(), collection.len());
    }

    #[test]
    fn prop_replace_changes_at_most_one_per_target(collection in small_collection(), target in -10..10_i32) {
        let replaced = collection.replace(&[target], 100);
        let changed = collection
            .iter()
            .zip(replaced.iter())
            .filter(|(before, after)| before != after)
            .count();
        prop_assert!(changed <= 1);
    }

    // =========================================================================
    // Aggregate Properties
    // =========================================================================

    #[test]
    fn prop_reduce_matches_sum(collection in small_collection()) {
        let expected: i32 = collection.iter().sum();
        prop_assert_eq!(collection.reduce(|element, accumulator| element + accumulator), expected);
    }

    #[test]
    fn prop_max_matches_iterator_max_for_two_or_more(elements in prop::collection::vec(any::<i32>(), 2..30)) {
        let collection = Collection::new(&elements);
        prop_assert_eq!(
            Some(collection.max(|left, right| left.max(right))),
            elements.iter().copied().max()
        );
        prop_assert_eq!(
            Some(collection.min(|left, right| left.min(right))),
            elements.iter().copied().min()
        );
    }

    #[test]
    fn prop_all_match_implies_any_match(collection in small_collection()) {
        if collection.all_match(|element| *element >= -10) {
            prop_assert!(collection.any_match(|element| *element >= -10));
        }
        prop_assert_eq!(collection.all_match(|_| true), !collection.is_empty());
    }

    // =========================================================================
    // Immutability Properties
    // =========================================================================

    #[test]
    fn prop_transformations_do_not_mutate_receiver(elements in elements_strategy(30)) {
        let collection = Collection::new(&elements);
        let _ = collection.map(|element| element.wrapping_mul(3));
        let _ = collection.filter(|element| *element > 0);
        let _ = collection.sort(|slice| slice.sort_unstable());
        let _ = collection.reverse();
        let _ = collection.replace(&[0, 1], 99);
        let _ = collection.replace_all(&[0, 1], 99);
        prop_assert_eq!(collection.to_vec(), elements);
    }
}
