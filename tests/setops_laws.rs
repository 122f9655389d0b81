//! Property-based tests for the set-operation laws.
//!
//! Verifies, over arbitrary inputs:
//!
//! - **Exclusion**: `difference(a, b)` shares no element with `b`
//! - **Inclusion**: `intersection(a, b)` only contains elements of `b`
//! - **Partition**: intersection and difference split the elements of `a`
//!   with no overlap and nothing lost
//! - **Order**: both outputs are subsequences of `a`
//! - **Variant agreement**: the by-key and by-predicate variants collapse
//!   to the plain ones under the identity projection / equality predicate

#![cfg(feature = "setops")]

use std::collections::HashSet;

use proptest::prelude::*;
use seqtools::setops::{
    difference, difference_by, difference_with, intersection, intersection_by, intersection_with,
};

/// Returns true if `candidate` is a subsequence of `full` (order-preserving).
fn is_subsequence(candidate: &[i32], full: &[i32]) -> bool {
    let mut remaining = full.iter();
    candidate
        .iter()
        .all(|element| remaining.any(|other| other == element))
}

proptest! {
    /// Exclusion Law: difference(a, b) contains no element of b.
    #[test]
    fn prop_difference_excludes_second_argument(
        a in prop::collection::vec(0..20_i32, 0..50),
        b in prop::collection::vec(0..20_i32, 0..50),
    ) {
        let exclusions: HashSet<i32> = b.iter().copied().collect();

        let result = difference(&a, &b);

        prop_assert!(result.iter().all(|element| !exclusions.contains(element)));
    }

    /// Inclusion Law: every element of difference(a, b) occurs in a.
    #[test]
    fn prop_difference_draws_from_first_argument(
        a in prop::collection::vec(0..20_i32, 0..50),
        b in prop::collection::vec(0..20_i32, 0..50),
    ) {
        let population: HashSet<i32> = a.iter().copied().collect();

        let result = difference(&a, &b);

        prop_assert!(result.iter().all(|element| population.contains(element)));
    }

    /// Partition Law: intersection(a, b) and difference(a, b) reconstruct
    /// the elements of a (as a set) with no overlap.
    #[test]
    fn prop_intersection_and_difference_partition(
        a in prop::collection::vec(0..20_i32, 0..50),
        b in prop::collection::vec(0..20_i32, 0..50),
    ) {
        let kept: HashSet<i32> = intersection(&a, &b).into_iter().collect();
        let dropped: HashSet<i32> = difference(&a, &b).into_iter().collect();
        let population: HashSet<i32> = a.iter().copied().collect();

        prop_assert!(kept.is_disjoint(&dropped));
        prop_assert_eq!(
            kept.union(&dropped).copied().collect::<HashSet<i32>>(),
            population
        );
    }

    /// Order Law: both outputs are order-preserving subsequences of a.
    #[test]
    fn prop_outputs_are_subsequences_of_first_argument(
        a in prop::collection::vec(0..20_i32, 0..50),
        b in prop::collection::vec(0..20_i32, 0..50),
    ) {
        prop_assert!(is_subsequence(&difference(&a, &b), &a));
        prop_assert!(is_subsequence(&intersection(&a, &b), &a));
    }

    /// Length Law: the two outputs together account for every element of a.
    #[test]
    fn prop_output_lengths_sum_to_input_length(
        a in prop::collection::vec(0..20_i32, 0..50),
        b in prop::collection::vec(0..20_i32, 0..50),
    ) {
        let kept = intersection(&a, &b).len();
        let dropped = difference(&a, &b).len();

        prop_assert_eq!(kept + dropped, a.len());
    }

    /// Variant Agreement: difference_by under the identity projection and
    /// difference_with under equality both match difference.
    #[test]
    fn prop_difference_variants_agree_under_identity(
        a in prop::collection::vec(0..20_i32, 0..50),
        b in prop::collection::vec(0..20_i32, 0..50),
    ) {
        let plain = difference(&a, &b);

        prop_assert_eq!(&plain, &difference_by(&a, &b, |value| *value));
        prop_assert_eq!(&plain, &difference_with(&a, &b, |x, y| x == y));
    }

    /// Variant Agreement: same for the intersection family.
    #[test]
    fn prop_intersection_variants_agree_under_identity(
        a in prop::collection::vec(0..20_i32, 0..50),
        b in prop::collection::vec(0..20_i32, 0..50),
    ) {
        let plain = intersection(&a, &b);

        prop_assert_eq!(&plain, &intersection_by(&a, &b, |value| *value));
        prop_assert_eq!(&plain, &intersection_with(&a, &b, |x, y| x == y));
    }

    /// Idempotence: differencing twice against the same set changes nothing.
    #[test]
    fn prop_difference_is_idempotent(
        a in prop::collection::vec(0..20_i32, 0..50),
        b in prop::collection::vec(0..20_i32, 0..50),
    ) {
        let once = difference(&a, &b);
        let twice = difference(&once, &b);

        prop_assert_eq!(once, twice);
    }
}
