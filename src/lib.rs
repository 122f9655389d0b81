//! # seqtools
//!
//! Sequence comparison, sampling, and flattening utilities for Rust.
//!
//! ## Overview
//!
//! This library provides small, stateless operations over ordered sequences
//! (slices). Inputs are never mutated; every operation returns a freshly
//! allocated value. It includes:
//!
//! - **Set Operations**: difference / intersection families under identity,
//!   key projection, or a custom equivalence predicate
//! - **Sampling**: uniform single-element and k-subset selection via a
//!   partial Fisher-Yates shuffle, plus thin random-value helpers
//! - **Flattening**: bounded and unbounded flattening of nested sequences
//! - **Sequence Utilities**: partitioning, deduplication, counting
//! - **Text Utilities**: capitalization, reversal, anagram checks
//! - **Math Utilities**: averages, approximate equality, digit extraction
//!
//! ## Feature Flags
//!
//! - `setops`: Difference and intersection families
//! - `sampling`: Random sampling (pulls in `rand`)
//! - `flatten`: Nested-sequence flattening
//! - `seq`: Scalar sequence utilities
//! - `text`: String utilities
//! - `math`: Numeric utilities
//! - `serde`: Serialization for [`Nested`](flatten::Nested)
//! - `fxhash`: Use `FxHashSet` instead of the std hasher in set operations
//!
//! ## Example
//!
//! ```rust
//! use seqtools::prelude::*;
//!
//! let survivors = difference(&[1, 2, 3, 4], &[2, 4]);
//! assert_eq!(survivors, vec![1, 3]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used functions and types.
///
/// # Usage
///
/// ```rust
/// use seqtools::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "setops")]
    pub use crate::setops::*;

    #[cfg(feature = "sampling")]
    pub use crate::sampling::*;

    #[cfg(feature = "flatten")]
    pub use crate::flatten::*;

    #[cfg(feature = "seq")]
    pub use crate::seq::*;

    #[cfg(feature = "text")]
    pub use crate::text::*;

    #[cfg(feature = "math")]
    pub use crate::math::*;
}

#[cfg(feature = "setops")]
pub mod setops;

#[cfg(feature = "sampling")]
pub mod sampling;

#[cfg(feature = "flatten")]
pub mod flatten;

#[cfg(feature = "seq")]
pub mod seq;

#[cfg(feature = "text")]
pub mod text;

#[cfg(feature = "math")]
pub mod math;
