//! A minimal complex number used for rendering.

use std::fmt;

use num_traits::Float;

/// A complex number with real part `re` and imaginary part `im`.
///
/// Only construction, component access and [`Display`](fmt::Display) are
/// provided; no arithmetic is defined.
///
/// # Examples
///
/// ```rust
/// use funcollect::convert::Complex;
///
/// let value = Complex::new(1.0_f64, 5.0);
/// assert_eq!(format!("{value}"), "(1+5i)");
///
/// let negative = Complex::new(0.5_f32, -2.0);
/// assert_eq!(format!("{negative}"), "(0.5-2i)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex<F> {
    /// The real part.
    pub re: F,
    /// The imaginary part.
    pub im: F,
}

impl<F: Float> Complex<F> {
    /// Creates a complex number from its components.
    #[inline]
    #[must_use]
    pub const fn new(re: F, im: F) -> Self {
        Self { re, im }
    }
}

impl<F: Float> From<(F, F)> for Complex<F> {
    #[inline]
    fn from((re, im): (F, F)) -> Self {
        Self::new(re, im)
    }
}

/// Renders as `(re+imi)`, each part in its shortest round-trip form.
///
/// The imaginary part always carries an explicit sign, including when it is
/// `NaN`.
impl<F: Float + fmt::Display> fmt::Display for Complex<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im.is_sign_negative() && !self.im.is_nan() {
            '-'
        } else {
            '+'
        };
        write!(formatter, "({}{}{}i)", self.re, sign, self.im.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Complex::new(1.0, 5.0), "(1+5i)")]
    #[case(Complex::new(-1.5, 0.0), "(-1.5+0i)")]
    #[case(Complex::new(0.0, -0.25), "(0-0.25i)")]
    #[case(Complex::new(1.0, f64::NAN), "(1+NaNi)")]
    #[case(Complex::new(1.0, -f64::NAN), "(1+NaNi)")]
    #[case(Complex::new(1.0, f64::INFINITY), "(1+infi)")]
    #[case(Complex::new(f64::NEG_INFINITY, f64::NEG_INFINITY), "(-inf-infi)")]
    fn test_display(#[case] value: Complex<f64>, #[case] expected: &str) {
        assert_eq!(format!("{value}"), expected);
    }

    #[rstest]
    fn test_from_tuple() {
        assert_eq!(Complex::from((2.0_f32, 3.0)), Complex::new(2.0, 3.0));
    }
}
