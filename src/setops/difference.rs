//! The difference family: elements of one sequence absent from another.

use std::hash::Hash;

use super::KeySet;

/// Returns the elements of `a` that are not equal to any element of `b`.
///
/// Membership in `b` is tested against a hash set built in a single pass,
/// so the whole operation runs in O(|a| + |b|) rather than O(|a| * |b|).
/// The relative order of `a` is preserved, and duplicates in `a` that
/// survive the filter are kept individually.
///
/// Neither input is mutated; the result is always a fresh allocation, even
/// when `b` is empty and the result equals `a`.
///
/// # Type Parameters
///
/// * `T` - The element type (must implement [`Eq`], [`Hash`], and [`Clone`])
///
/// # Examples
///
/// ```
/// use seqtools::setops::difference;
///
/// assert_eq!(difference(&[1, 2, 3], &[1, 2, 4]), vec![3]);
/// assert_eq!(difference(&["a", "b", "a"], &["b"]), vec!["a", "a"]);
///
/// // An empty second argument keeps everything
/// assert_eq!(difference(&[1, 2], &[]), vec![1, 2]);
///
/// // An empty first argument yields nothing
/// let empty: Vec<i32> = difference(&[], &[1, 2]);
/// assert!(empty.is_empty());
/// ```
pub fn difference<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let exclusions: KeySet<&T> = b.iter().collect();
    a.iter()
        .filter(|candidate| !exclusions.contains(*candidate))
        .cloned()
        .collect()
}

/// Returns the elements of `a` whose projected key does not occur among the
/// projected keys of `b`.
///
/// `key_fn` is invoked exactly once per element of `b` (to build the key
/// set) and exactly once per element of `a` (to test membership), so
/// side-effecting projections are never duplicated.
///
/// # Examples
///
/// ```
/// use seqtools::setops::difference_by;
///
/// // Compare floats by their integer part
/// let result = difference_by(&[2.1_f64, 1.2], &[2.3, 3.4], |x| x.floor() as i64);
/// assert_eq!(result, vec![1.2]);
/// ```
pub fn difference_by<T, K, F>(a: &[T], b: &[T], key_fn: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let exclusions: KeySet<K> = b.iter().map(&key_fn).collect();
    a.iter()
        .filter(|candidate| !exclusions.contains(&key_fn(candidate)))
        .cloned()
        .collect()
}

/// Returns the elements of `a` for which no element of `b` satisfies the
/// equivalence predicate `comp`.
///
/// With an arbitrary predicate no hashing is possible, so this runs in
/// O(|a| * |b|). The scan over `b` short-circuits on the first match, so
/// `comp` is called at most once per pair.
///
/// # Examples
///
/// ```
/// use seqtools::setops::difference_with;
///
/// let result = difference_with(&[1, 2, 3], &[1, 2], |a, b| a == b);
/// assert_eq!(result, vec![3]);
/// ```
pub fn difference_with<T, F>(a: &[T], b: &[T], comp: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    a.iter()
        .filter(|candidate| !b.iter().any(|other| comp(candidate, other)))
        .cloned()
        .collect()
}
