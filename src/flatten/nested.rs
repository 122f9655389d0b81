//! The [`Nested`] tagged element type and the [`nested!`](crate::nested)
//! literal macro.

/// An element of a nested sequence: either a leaf value or a sub-sequence.
///
/// Slices of `Nested<T>` are the input shape for
/// [`flatten`](super::flatten) and [`deep_flatten`](super::deep_flatten).
/// The [`nested!`](crate::nested) macro builds literals without spelling
/// out the variants:
///
/// ```rust
/// use seqtools::flatten::Nested;
/// use seqtools::nested;
///
/// let tree = nested![1, [2, [3]]];
/// assert_eq!(
///     tree,
///     vec![
///         Nested::Value(1),
///         Nested::Seq(vec![
///             Nested::Value(2),
///             Nested::Seq(vec![Nested::Value(3)]),
///         ]),
///     ],
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Nested<T> {
    /// A leaf value.
    Value(T),
    /// A sub-sequence, itself possibly containing further sub-sequences.
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Returns `true` if this element is a leaf value.
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if this element is a sub-sequence.
    pub const fn is_seq(&self) -> bool {
        matches!(self, Self::Seq(_))
    }

    /// Returns the maximum nesting depth below this element.
    ///
    /// A leaf value has depth 0; a sub-sequence has one more than its
    /// deepest child (an empty sub-sequence has depth 1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtools::flatten::Nested;
    ///
    /// assert_eq!(Nested::Value(1).depth(), 0);
    /// assert_eq!(Nested::Seq(vec![Nested::Value(1)]).depth(), 1);
    /// ```
    pub fn depth(&self) -> usize {
        // Explicit work-stack: the input's nesting depth must not be able
        // to overflow the call stack.
        let mut deepest = 0;
        let mut stack: Vec<(usize, &Self)> = vec![(0, self)];
        while let Some((level, element)) = stack.pop() {
            match element {
                Self::Value(_) => deepest = deepest.max(level),
                Self::Seq(inner) => {
                    deepest = deepest.max(level + 1);
                    stack.extend(inner.iter().map(|child| (level + 1, child)));
                }
            }
        }
        deepest
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(seq: Vec<Nested<T>>) -> Self {
        Self::Seq(seq)
    }
}

/// Builds a `Vec<Nested<T>>` literal.
///
/// Bracketed groups become [`Nested::Seq`] sub-sequences at any depth;
/// everything else becomes a [`Nested::Value`] leaf. Leaves are matched as
/// single token trees, so anything more complex than a literal or a path
/// segment must be parenthesized: `nested![(1 + 2), [(x.clone())]]`.
///
/// # Examples
///
/// ```rust
/// use seqtools::flatten::deep_flatten;
/// use seqtools::nested;
///
/// let tree = nested![1, [2, [3, [4]]]];
/// assert_eq!(deep_flatten(&tree), vec![1, 2, 3, 4]);
///
/// let flat: Vec<seqtools::flatten::Nested<i32>> = nested![];
/// assert!(flat.is_empty());
/// ```
#[macro_export]
macro_rules! nested {
    ($($element:tt),* $(,)?) => {
        vec![$($crate::nested_element!($element)),*]
    };
}

/// Internal helper for [`nested!`]; not part of the public API.
#[doc(hidden)]
#[macro_export]
macro_rules! nested_element {
    ([$($inner:tt),* $(,)?]) => {
        $crate::flatten::Nested::Seq(vec![$($crate::nested_element!($inner)),*])
    };
    ($value:expr) => {
        $crate::flatten::Nested::Value($value)
    };
}
