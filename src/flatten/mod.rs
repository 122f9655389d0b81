//! Bounded and unbounded flattening of nested sequences.
//!
//! Nesting is modeled explicitly with the tagged [`Nested`] element type:
//! a slice of `Nested<T>` is a sequence whose elements are either leaf
//! values or sub-sequences. Two operations collapse that structure:
//!
//! - [`flatten`]: concatenates sub-sequences up to a given depth, leaving
//!   deeper structure intact
//! - [`deep_flatten`]: collapses all levels into a flat `Vec<T>`
//!
//! Both preserve left-to-right traversal order and never mutate the input.
//!
//! # Examples
//!
//! ```rust
//! use seqtools::flatten::{deep_flatten, flatten};
//! use seqtools::nested;
//!
//! let tree = nested![1, [2, [3, [4]]]];
//!
//! assert_eq!(flatten(&tree, 1), nested![1, 2, [3, [4]]]);
//! assert_eq!(flatten(&tree, 2), nested![1, 2, 3, [4]]);
//! assert_eq!(deep_flatten(&tree), vec![1, 2, 3, 4]);
//! ```

mod nested;

pub use nested::Nested;

/// Concatenates nested sub-sequences into their parent, up to `depth`
/// levels deep.
///
/// `depth = 1` flattens exactly one level; elements nested deeper than
/// `depth` pass through structurally unchanged, as do leaf values.
/// `depth = 0` returns a plain copy. The recursion is bounded by `depth`,
/// not by the input's nesting, so deep inputs cannot overflow the call
/// stack through this function.
///
/// # Examples
///
/// ```
/// use seqtools::flatten::flatten;
/// use seqtools::nested;
///
/// let tree = nested![1, [2, [3, [4]]]];
///
/// assert_eq!(flatten(&tree, 1), nested![1, 2, [3, [4]]]);
/// assert_eq!(flatten(&tree, 0), tree);
/// ```
pub fn flatten<T>(seq: &[Nested<T>], depth: usize) -> Vec<Nested<T>>
where
    T: Clone,
{
    let mut output = Vec::with_capacity(seq.len());
    flatten_into(seq, depth, &mut output);
    output
}

fn flatten_into<T>(seq: &[Nested<T>], depth: usize, output: &mut Vec<Nested<T>>)
where
    T: Clone,
{
    for element in seq {
        match element {
            Nested::Seq(inner) if depth > 0 => flatten_into(inner, depth - 1, output),
            other => output.push(other.clone()),
        }
    }
}

/// Collapses every level of nesting into a flat `Vec` of leaf values.
///
/// Traversal is left-to-right, driven by an explicit work-stack rather
/// than recursion, so pathologically deep inputs cannot overflow the call
/// stack. Flattening an already-flat sequence is a no-op modulo unwrapping
/// the [`Nested::Value`] leaves, which makes the operation idempotent.
///
/// # Examples
///
/// ```
/// use seqtools::flatten::deep_flatten;
/// use seqtools::nested;
///
/// assert_eq!(deep_flatten(&nested![1, [2, [3, [4]]]]), vec![1, 2, 3, 4]);
///
/// let empty: Vec<i32> = deep_flatten(&nested![]);
/// assert!(empty.is_empty());
/// ```
pub fn deep_flatten<T>(seq: &[Nested<T>]) -> Vec<T>
where
    T: Clone,
{
    let mut output = Vec::with_capacity(seq.len());
    let mut stack: Vec<&Nested<T>> = seq.iter().rev().collect();
    while let Some(element) = stack.pop() {
        match element {
            Nested::Value(value) => output.push(value.clone()),
            Nested::Seq(inner) => stack.extend(inner.iter().rev()),
        }
    }
    output
}
