//! The intersection family: elements present in both sequences.

use std::hash::Hash;

use super::KeySet;

/// Returns the elements of `a` that are equal to at least one element of `b`.
///
/// The dual of [`difference`](super::difference): membership in `b` is
/// tested against a hash set built in a single pass, giving O(|a| + |b|)
/// overall. The relative order of `a` is preserved and surviving duplicates
/// in `a` are kept individually.
///
/// # Examples
///
/// ```
/// use seqtools::setops::intersection;
///
/// assert_eq!(intersection(&[1, 2, 3], &[4, 3, 2]), vec![2, 3]);
/// assert_eq!(intersection(&[1, 2, 2], &[2]), vec![2, 2]);
///
/// // Disjoint inputs yield nothing
/// let empty: Vec<i32> = intersection(&[1, 2], &[3, 4]);
/// assert!(empty.is_empty());
/// ```
pub fn intersection<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let matches: KeySet<&T> = b.iter().collect();
    a.iter()
        .filter(|candidate| matches.contains(*candidate))
        .cloned()
        .collect()
}

/// Returns the elements of `a` whose projected key also occurs among the
/// projected keys of `b`.
///
/// `key_fn` is invoked exactly once per element of `b` and once per element
/// of `a`.
///
/// # Examples
///
/// ```
/// use seqtools::setops::intersection_by;
///
/// // Compare floats by their integer part
/// let result = intersection_by(&[2.1_f64, 1.2], &[2.3, 3.4], |x| x.floor() as i64);
/// assert_eq!(result, vec![2.1]);
/// ```
pub fn intersection_by<T, K, F>(a: &[T], b: &[T], key_fn: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let matches: KeySet<K> = b.iter().map(&key_fn).collect();
    a.iter()
        .filter(|candidate| matches.contains(&key_fn(candidate)))
        .cloned()
        .collect()
}

/// Returns the elements of `a` for which some element of `b` satisfies the
/// equivalence predicate `comp`.
///
/// Runs in O(|a| * |b|); the scan over `b` short-circuits on the first
/// match.
///
/// # Examples
///
/// ```
/// use seqtools::setops::intersection_with;
///
/// let result = intersection_with(&[1.0_f64, 1.2, 1.5, 3.0], &[1.9, 3.0, 0.0], |a, b| {
///     (a - b).abs() <= 1.0
/// });
/// assert_eq!(result, vec![1.0, 1.2, 1.5, 3.0]);
/// ```
pub fn intersection_with<T, F>(a: &[T], b: &[T], comp: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    a.iter()
        .filter(|candidate| b.iter().any(|other| comp(candidate, other)))
        .cloned()
        .collect()
}
