//! Numeric utilities.
//!
//! Averages ([`average`], [`average_by`]), tolerant comparison
//! ([`approximately_equal`]), decimal rounding ([`round_to`]), digit
//! extraction ([`digitize`]), planar distance ([`distance`]), and angle
//! conversion ([`degrees_to_radians`], [`radians_to_degrees`]).

/// Returns the arithmetic mean of `values`.
///
/// An empty input yields `NaN`, matching the underlying `0.0 / 0.0`;
/// callers that need a guard should check [`slice::is_empty`] first.
///
/// # Examples
///
/// ```
/// use seqtools::math::average;
///
/// assert!((average(&[1.0, 2.0, 3.0]) - 2.0).abs() < f64::EPSILON);
/// assert!(average(&[]).is_nan());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn average(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Returns the arithmetic mean of `seq` after projecting each element to a
/// number.
///
/// `projection` is invoked exactly once per element. An empty input yields
/// `NaN`, as with [`average`].
///
/// # Examples
///
/// ```
/// use seqtools::math::average_by;
///
/// let words = ["a", "bc", "def"];
/// assert!((average_by(&words, |word| word.len() as f64) - 2.0).abs() < f64::EPSILON);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn average_by<T, F>(seq: &[T], projection: F) -> f64
where
    F: Fn(&T) -> f64,
{
    seq.iter().map(|element| projection(element)).sum::<f64>() / seq.len() as f64
}

/// Returns `true` if `a` and `b` differ by less than `epsilon`.
///
/// # Examples
///
/// ```
/// use seqtools::math::approximately_equal;
///
/// assert!(approximately_equal(std::f64::consts::PI / 2.0, 1.5708, 0.001));
/// assert!(!approximately_equal(1.0, 1.1, 0.001));
/// ```
pub fn approximately_equal(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Rounds `value` to `decimals` decimal places, away from zero on ties.
///
/// # Examples
///
/// ```
/// use seqtools::math::round_to;
///
/// assert!((round_to(1.005, 2) - 1.01).abs() < f64::EPSILON);
/// assert!((round_to(2.7, 0) - 3.0).abs() < f64::EPSILON);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    // Shift in decimal notation, not by multiplying: 1.005 * 100.0 is
    // 100.49999... in binary, while "1.005e2" parses to exactly 100.5.
    let exponent = i32::try_from(decimals).unwrap_or(i32::MAX);
    format!("{value}e{decimals}")
        .parse::<f64>()
        .map_or(f64::NAN, |shifted| shifted.round() / 10_f64.powi(exponent))
}

/// Splits a non-negative integer into its decimal digits, most significant
/// first.
///
/// # Examples
///
/// ```
/// use seqtools::math::digitize;
///
/// assert_eq!(digitize(431), vec![4, 3, 1]);
/// assert_eq!(digitize(0), vec![0]);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn digitize(n: u64) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    let mut remaining = n;
    while remaining > 0 {
        digits.push((remaining % 10) as u8);
        remaining /= 10;
    }
    digits.reverse();
    digits
}

/// Returns the Euclidean distance between two points in the plane.
///
/// # Examples
///
/// ```
/// use seqtools::math::distance;
///
/// assert!((distance(1.0, 1.0, 2.0, 3.0) - 5.0_f64.sqrt()).abs() < f64::EPSILON);
/// ```
pub fn distance(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    (x1 - x0).hypot(y1 - y0)
}

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// use seqtools::math::degrees_to_radians;
///
/// assert!((degrees_to_radians(90.0) - std::f64::consts::FRAC_PI_2).abs() < f64::EPSILON);
/// ```
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Converts an angle from radians to degrees.
///
/// # Examples
///
/// ```
/// use seqtools::math::radians_to_degrees;
///
/// assert!((radians_to_degrees(std::f64::consts::FRAC_PI_2) - 90.0).abs() < f64::EPSILON);
/// ```
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}
