//! Canonical string renderings of primitive values.

use std::fmt::Display;

use num_traits::{Float, PrimInt};

use super::Complex;

/// Renders an integer of any primitive width in decimal.
///
/// # Examples
///
/// ```rust
/// use funcollect::convert::int_to_string;
///
/// assert_eq!(int_to_string(5), "5");
/// assert_eq!(int_to_string(-128_i8), "-128");
/// assert_eq!(int_to_string(u64::MAX), "18446744073709551615");
/// ```
pub fn int_to_string<T>(value: T) -> String
where
    T: PrimInt + Display,
{
    value.to_string()
}

/// Renders a float in fixed-point notation with six fractional digits.
///
/// Non-finite values render as `NaN`, `inf` and `-inf`.
///
/// # Examples
///
/// ```rust
/// use funcollect::convert::float_to_string;
///
/// assert_eq!(float_to_string(5.0_f64), "5.000000");
/// assert_eq!(float_to_string(-0.125_f32), "-0.125000");
/// ```
pub fn float_to_string<T>(value: T) -> String
where
    T: Float + Display,
{
    format!("{value:.6}")
}

/// Renders a boolean as `"true"` or `"false"`.
pub fn bool_to_string(value: bool) -> String {
    value.to_string()
}

/// Renders a character as a single-quoted, escaped literal.
///
/// Escapes follow Rust's character literal syntax, so non-printable
/// characters render as `'\u{200b}'` rather than `'\u200b'`.
///
/// # Examples
///
/// ```rust
/// use funcollect::convert::char_to_string;
///
/// assert_eq!(char_to_string('A'), "'A'");
/// assert_eq!(char_to_string('\n'), "'\\n'");
/// assert_eq!(char_to_string('\u{200b}'), "'\\u{200b}'");
/// ```
pub fn char_to_string(value: char) -> String {
    format!("{value:?}")
}

/// Renders a complex number as `(re+imi)`.
///
/// Each part uses the shortest round-trip decimal form and never switches to
/// exponent notation: `Complex::new(1e21, 1e-7)` renders as
/// `(1000000000000000000000+0.0000001i)`.
///
/// # Examples
///
/// ```rust
/// use funcollect::convert::{Complex, complex_to_string};
///
/// assert_eq!(complex_to_string(Complex::new(1.0_f64, 5.0)), "(1+5i)");
/// ```
pub fn complex_to_string<T>(value: Complex<T>) -> String
where
    T: Float + Display,
{
    value.to_string()
}
