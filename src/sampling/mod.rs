//! Uniform random selection from ordered sequences.
//!
//! This module provides sampling without replacement and a handful of thin
//! random-value helpers:
//!
//! - [`sample`]: one element, chosen uniformly
//! - [`sample_size`]: a uniform k-subset via a partial Fisher-Yates shuffle
//! - [`shuffle`]: a full Fisher-Yates permutation
//! - [`random_int_in_range`] / [`random_float_in_range`] /
//!   [`random_ints_in_range`] / [`random_hex_color`]: uniform scalar helpers
//!
//! Every operation takes `&mut impl Rng` so callers control seeding; the
//! `*_with_thread_rng` wrappers cover the common case where any entropy
//! source will do. Caller-owned storage is never mutated: [`sample_size`]
//! and [`shuffle`] clone the input into a private buffer before swapping.
//!
//! # Determinism
//!
//! Given the same seeded generator, every operation here is deterministic:
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use seqtools::sampling::sample_size;
//!
//! let mut first = StdRng::seed_from_u64(7);
//! let mut second = StdRng::seed_from_u64(7);
//!
//! let population: Vec<i32> = (0..100).collect();
//! assert_eq!(
//!     sample_size(&population, 5, &mut first),
//!     sample_size(&population, 5, &mut second),
//! );
//! ```

mod error;

pub use error::EmptySequenceError;

use rand::Rng;

/// Returns a reference to one element of `seq`, chosen uniformly at random.
///
/// # Errors
///
/// Returns [`EmptySequenceError`] when `seq` is empty. An empty input has no
/// meaningful uniform choice, so the condition is surfaced explicitly
/// instead of being left to an out-of-bounds access.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use seqtools::sampling::sample;
///
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let chosen = sample(&[1, 2, 3], &mut rng).unwrap();
/// assert!([1, 2, 3].contains(chosen));
///
/// let empty: &[i32] = &[];
/// assert!(sample(empty, &mut rng).is_err());
/// ```
pub fn sample<'a, T, R>(seq: &'a [T], rng: &mut R) -> Result<&'a T, EmptySequenceError>
where
    R: Rng,
{
    if seq.is_empty() {
        return Err(EmptySequenceError {
            operation: "sample",
        });
    }
    let index = rng.gen_range(0..seq.len());
    Ok(&seq[index])
}

/// [`sample`] using the thread-local generator.
///
/// # Errors
///
/// Returns [`EmptySequenceError`] when `seq` is empty.
pub fn sample_with_thread_rng<T>(seq: &[T]) -> Result<&T, EmptySequenceError> {
    sample(seq, &mut rand::thread_rng())
}

/// Returns `min(n, seq.len())` elements drawn from `seq` without
/// replacement, each subset equally likely.
///
/// Runs a partial Fisher-Yates shuffle on a private clone of `seq`: for `m`
/// decreasing from `seq.len()`, a uniform index in `[0, m)` is swapped into
/// position `m - 1`, and the pass stops as soon as the requested number of
/// tail positions is settled. The settled tail is returned; the caller's
/// storage is never touched.
///
/// Asking for more elements than exist clamps to a full shuffle of the
/// whole sequence.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use seqtools::sampling::sample_size;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let population = [1, 2, 3, 4, 5];
///
/// let drawn = sample_size(&population, 3, &mut rng);
/// assert_eq!(drawn.len(), 3);
///
/// // Clamped: a permutation of the full population
/// let mut everything = sample_size(&population, 10, &mut rng);
/// everything.sort_unstable();
/// assert_eq!(everything, vec![1, 2, 3, 4, 5]);
///
/// assert!(sample_size(&population, 0, &mut rng).is_empty());
/// ```
pub fn sample_size<T, R>(seq: &[T], n: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng,
{
    let mut buffer: Vec<T> = seq.to_vec();
    let count = n.min(buffer.len());
    let settled_from = buffer.len() - count;

    let mut m = buffer.len();
    while m > settled_from {
        let chosen = rng.gen_range(0..m);
        buffer.swap(chosen, m - 1);
        m -= 1;
    }

    buffer.split_off(settled_from)
}

/// [`sample_size`] using the thread-local generator.
pub fn sample_size_with_thread_rng<T>(seq: &[T], n: usize) -> Vec<T>
where
    T: Clone,
{
    sample_size(seq, n, &mut rand::thread_rng())
}

/// Returns a full Fisher-Yates permutation of `seq` as a new `Vec`.
///
/// Equivalent to [`sample_size`] with `n = seq.len()`. The input is never
/// mutated.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use seqtools::sampling::shuffle;
///
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let mut shuffled = shuffle(&[1, 2, 3, 4], &mut rng);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, vec![1, 2, 3, 4]);
/// ```
pub fn shuffle<T, R>(seq: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng,
{
    sample_size(seq, seq.len(), rng)
}

/// Returns a uniform integer in the inclusive range `[low, high]`.
///
/// # Panics
///
/// Panics if `low > high`.
pub fn random_int_in_range<R: Rng>(low: i64, high: i64, rng: &mut R) -> i64 {
    rng.gen_range(low..=high)
}

/// Returns a uniform float in the half-open range `[low, high)`.
///
/// # Panics
///
/// Panics if `low >= high`.
pub fn random_float_in_range<R: Rng>(low: f64, high: f64, rng: &mut R) -> f64 {
    rng.gen_range(low..high)
}

/// Returns `n` uniform integers in the inclusive range `[low, high]`,
/// drawn independently (with replacement).
///
/// # Panics
///
/// Panics if `low > high`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use seqtools::sampling::random_ints_in_range;
///
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let values = random_ints_in_range(1, 6, 10, &mut rng);
/// assert_eq!(values.len(), 10);
/// assert!(values.iter().all(|value| (1..=6).contains(value)));
/// ```
pub fn random_ints_in_range<R: Rng>(low: i64, high: i64, n: usize, rng: &mut R) -> Vec<i64> {
    (0..n).map(|_| rng.gen_range(low..=high)).collect()
}

/// Returns a random CSS-style hex color code such as `"#1e90ff"`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use seqtools::sampling::random_hex_color;
///
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let color = random_hex_color(&mut rng);
/// assert_eq!(color.len(), 7);
/// assert!(color.starts_with('#'));
/// ```
pub fn random_hex_color<R: Rng>(rng: &mut R) -> String {
    let code: u32 = rng.gen_range(0..=0x00ff_ffff);
    format!("#{code:06x}")
}
