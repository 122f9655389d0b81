//! Set-style comparison of ordered sequences.
//!
//! This module provides the difference and intersection families. Each
//! family comes in three variants:
//!
//! - Plain ([`difference`], [`intersection`]): elements compared by equality,
//!   membership tested against a hash set of the second argument
//! - By-key ([`difference_by`], [`intersection_by`]): elements compared on a
//!   projected key, so structurally different elements can be equivalent
//! - By-predicate ([`difference_with`], [`intersection_with`]): an arbitrary
//!   binary equivalence decides matches; no hashing is possible, so these
//!   run in O(|a| * |b|)
//!
//! All six operations share the same shape: they take two slices, never
//! mutate them, and return a freshly allocated `Vec` preserving the relative
//! order of the *first* argument. Duplicates in the first argument survive
//! individually; the second argument is only ever consulted as a set.
//!
//! # Examples
//!
//! ```rust
//! use seqtools::setops::{difference, intersection};
//!
//! let a = [1, 2, 3, 2];
//! let b = [2, 4];
//!
//! assert_eq!(difference(&a, &b), vec![1, 3]);
//! assert_eq!(intersection(&a, &b), vec![2, 2]);
//! ```

mod difference;
mod intersection;

pub use difference::{difference, difference_by, difference_with};
pub use intersection::{intersection, intersection_by, intersection_with};

#[cfg(feature = "fxhash")]
pub(crate) type KeySet<K> = rustc_hash::FxHashSet<K>;

#[cfg(not(feature = "fxhash"))]
pub(crate) type KeySet<K> = std::collections::HashSet<K>;
