//! Error types for the sampling operations.
//!
//! Selecting from an empty sequence is the one input shape that cannot be
//! ruled out by the type system, so it is reported as an explicit error
//! rather than an out-of-bounds access.

/// Represents an attempt to select an element from an empty sequence.
///
/// Returned by [`sample`](super::sample) and its convenience wrappers when
/// the input slice has no elements. The operation name is carried so the
/// message identifies the failing call site.
///
/// # Examples
///
/// ```rust
/// use seqtools::sampling::EmptySequenceError;
///
/// let error = EmptySequenceError { operation: "sample" };
/// assert_eq!(
///     format!("{}", error),
///     "sample: cannot select from an empty sequence"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptySequenceError {
    /// The name of the operation that received the empty sequence.
    pub operation: &'static str,
}

impl std::fmt::Display for EmptySequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: cannot select from an empty sequence",
            self.operation
        )
    }
}

impl std::error::Error for EmptySequenceError {}
