//! Scalar utilities over ordered sequences.
//!
//! Small, pure helpers that take a slice and return a fresh value:
//! predicates ([`all`], [`all_equal`]), partitioning ([`bifurcate`],
//! [`bifurcate_by`]), cleanup ([`compact`], [`unique`]), searching
//! ([`find_last`], [`index_of_all`], [`count_occurrences`]), trimming
//! ([`drop_while`], [`drop_right_while`]), and ranked selection
//! ([`max_n`], [`min_n`]).
//!
//! None of these mutate their input.

use std::collections::HashSet;
use std::hash::Hash;

/// Returns `true` if `predicate` holds for every element of `seq`.
///
/// Vacuously `true` for an empty sequence.
///
/// # Examples
///
/// ```
/// use seqtools::seq::all;
///
/// assert!(all(&[2, 4, 6], |value| value % 2 == 0));
/// assert!(!all(&[2, 3, 6], |value| value % 2 == 0));
/// ```
pub fn all<T, F>(seq: &[T], predicate: F) -> bool
where
    F: Fn(&T) -> bool,
{
    seq.iter().all(|element| predicate(element))
}

/// Returns `true` if every element of `seq` equals the first one.
///
/// Vacuously `true` for empty and single-element sequences.
///
/// # Examples
///
/// ```
/// use seqtools::seq::all_equal;
///
/// assert!(all_equal(&[1, 1, 1]));
/// assert!(!all_equal(&[1, 1, 2]));
/// assert!(all_equal::<i32>(&[]));
/// ```
pub fn all_equal<T: PartialEq>(seq: &[T]) -> bool {
    seq.windows(2).all(|pair| pair[0] == pair[1])
}

/// Splits `seq` into two groups according to a parallel `filter` slice:
/// elements whose flag is `true` land in the first group, the rest in the
/// second.
///
/// Elements beyond `filter.len()` are treated as unflagged and land in the
/// second group. Relative order is preserved in both groups.
///
/// # Examples
///
/// ```
/// use seqtools::seq::bifurcate;
///
/// let (hits, misses) = bifurcate(&["beep", "boop", "foo", "bar"], &[true, true, false, true]);
/// assert_eq!(hits, vec!["beep", "boop", "bar"]);
/// assert_eq!(misses, vec!["foo"]);
/// ```
pub fn bifurcate<T: Clone>(seq: &[T], filter: &[bool]) -> (Vec<T>, Vec<T>) {
    bifurcate_by(seq, |_, index| filter.get(index).copied().unwrap_or(false))
}

/// Splits `seq` into two groups based on a predicate over the element and
/// its index: satisfying elements land in the first group, the rest in the
/// second. Relative order is preserved in both groups.
///
/// # Examples
///
/// ```
/// use seqtools::seq::bifurcate_by;
///
/// let (evens, odds) = bifurcate_by(&[1, 2, 3, 4], |value, _| value % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
/// assert_eq!(odds, vec![1, 3]);
/// ```
pub fn bifurcate_by<T, F>(seq: &[T], predicate: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: Fn(&T, usize) -> bool,
{
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    for (index, element) in seq.iter().enumerate() {
        if predicate(element, index) {
            accepted.push(element.clone());
        } else {
            rejected.push(element.clone());
        }
    }
    (accepted, rejected)
}

/// Drops the `None` entries of `seq` and unwraps the rest.
///
/// # Examples
///
/// ```
/// use seqtools::seq::compact;
///
/// assert_eq!(compact(&[Some(1), None, Some(3)]), vec![1, 3]);
/// ```
pub fn compact<T: Clone>(seq: &[Option<T>]) -> Vec<T> {
    seq.iter().filter_map(|slot| slot.clone()).collect()
}

/// Counts how many elements of `seq` equal `value`.
///
/// # Examples
///
/// ```
/// use seqtools::seq::count_occurrences;
///
/// assert_eq!(count_occurrences(&[1, 1, 2, 1, 3], &1), 3);
/// assert_eq!(count_occurrences(&[1, 2], &4), 0);
/// ```
pub fn count_occurrences<T: PartialEq>(seq: &[T], value: &T) -> usize {
    seq.iter().filter(|element| *element == value).count()
}

/// Removes duplicate elements, keeping the first occurrence of each and
/// preserving order.
///
/// Idempotent: applying it to its own output changes nothing.
///
/// # Examples
///
/// ```
/// use seqtools::seq::unique;
///
/// assert_eq!(unique(&[1, 2, 2, 3, 4, 4, 5]), vec![1, 2, 3, 4, 5]);
/// ```
pub fn unique<T>(seq: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen: HashSet<&T> = HashSet::with_capacity(seq.len());
    seq.iter()
        .filter(|element| seen.insert(*element))
        .cloned()
        .collect()
}

/// Returns the indices of every element equal to `value`, in order.
///
/// # Examples
///
/// ```
/// use seqtools::seq::index_of_all;
///
/// assert_eq!(index_of_all(&[1, 2, 3, 1, 2, 3], &1), vec![0, 3]);
/// assert!(index_of_all(&[1, 2, 3], &4).is_empty());
/// ```
pub fn index_of_all<T: PartialEq>(seq: &[T], value: &T) -> Vec<usize> {
    seq.iter()
        .enumerate()
        .filter(|(_, element)| *element == value)
        .map(|(index, _)| index)
        .collect()
}

/// Returns a reference to the last element satisfying `predicate`, if any.
///
/// # Examples
///
/// ```
/// use seqtools::seq::find_last;
///
/// assert_eq!(find_last(&[1, 2, 3, 4], |value| value % 2 == 1), Some(&3));
/// assert_eq!(find_last(&[2, 4], |value| value % 2 == 1), None);
/// ```
pub fn find_last<T, F>(seq: &[T], predicate: F) -> Option<&T>
where
    F: Fn(&T) -> bool,
{
    seq.iter().rev().find(|element| predicate(element))
}

/// Removes elements from the front while `predicate` holds, returning the
/// remainder as a new `Vec`.
///
/// # Examples
///
/// ```
/// use seqtools::seq::drop_while;
///
/// assert_eq!(drop_while(&[1, 2, 3, 4, 1], |value| *value < 3), vec![3, 4, 1]);
/// ```
pub fn drop_while<T, F>(seq: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    let start = seq
        .iter()
        .position(|element| !predicate(element))
        .unwrap_or(seq.len());
    seq[start..].to_vec()
}

/// Removes elements from the back while `predicate` holds, returning the
/// remainder as a new `Vec`.
///
/// # Examples
///
/// ```
/// use seqtools::seq::drop_right_while;
///
/// assert_eq!(drop_right_while(&[1, 2, 3, 4], |value| *value > 2), vec![1, 2]);
/// ```
pub fn drop_right_while<T, F>(seq: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    let end = seq
        .iter()
        .rposition(|element| !predicate(element))
        .map_or(0, |index| index + 1);
    seq[..end].to_vec()
}

/// Returns the `n` largest elements of `seq` in descending order.
///
/// Works on a sorted copy; the input is never mutated. Asking for more
/// elements than exist returns the whole sequence sorted descending.
///
/// # Examples
///
/// ```
/// use seqtools::seq::max_n;
///
/// assert_eq!(max_n(&[1, 3, 2], 2), vec![3, 2]);
/// ```
pub fn max_n<T>(seq: &[T], n: usize) -> Vec<T>
where
    T: Clone + Ord,
{
    let mut sorted = seq.to_vec();
    sorted.sort_unstable_by(|left, right| right.cmp(left));
    sorted.truncate(n);
    sorted
}

/// Returns the `n` smallest elements of `seq` in ascending order.
///
/// Works on a sorted copy; the input is never mutated.
///
/// # Examples
///
/// ```
/// use seqtools::seq::min_n;
///
/// assert_eq!(min_n(&[1, 3, 2], 2), vec![1, 2]);
/// ```
pub fn min_n<T>(seq: &[T], n: usize) -> Vec<T>
where
    T: Clone + Ord,
{
    let mut sorted = seq.to_vec();
    sorted.sort_unstable();
    sorted.truncate(n);
    sorted
}
