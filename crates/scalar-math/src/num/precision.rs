// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Decimal Rounding
//!
//! The rounding policy shared by every operation that accepts a precision.
//! A result is rounded to a number of decimal digits, half away from zero,
//! before it is returned. `Precision::Exact` disables rounding.
//!
//! Rounding is what makes `add(0.1, 0.2)` come out as `0.3` and
//! `sine(PI)` as `0.0` instead of `1.2e-16`.

use crate::num::constants::DEFAULT_PRECISION_DIGITS;
use num_traits::Float;

/// How many decimal digits a floating-point result keeps.
///
/// The default is `Digits(10)`.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::Precision;
/// assert_eq!(Precision::default(), Precision::Digits(10));
/// assert_eq!(Precision::from(None::<u32>), Precision::Exact);
/// assert_eq!(Precision::Digits(2).apply(1.23456), 1.23);
/// assert_eq!(Precision::Exact.apply(1.23456), 1.23456);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Return the raw floating-point result.
    Exact,
    /// Round to this many digits after the decimal point.
    Digits(u32),
}

impl Precision {
    /// Applies the policy to `value`.
    #[inline]
    pub fn apply<F>(self, value: F) -> F
    where
        F: Float,
    {
        match self {
            Precision::Exact => value,
            Precision::Digits(digits) => round_to(value, digits),
        }
    }

    /// Returns the number of digits, or `None` for `Exact`.
    #[inline]
    pub const fn digits(self) -> Option<u32> {
        match self {
            Precision::Exact => None,
            Precision::Digits(d) => Some(d),
        }
    }
}

impl Default for Precision {
    #[inline]
    fn default() -> Self {
        Precision::Digits(DEFAULT_PRECISION_DIGITS)
    }
}

impl From<Option<u32>> for Precision {
    #[inline]
    fn from(value: Option<u32>) -> Self {
        match value {
            Some(d) => Precision::Digits(d),
            None => Precision::Exact,
        }
    }
}

impl From<u32> for Precision {
    #[inline]
    fn from(value: u32) -> Self {
        Precision::Digits(value)
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Precision::Exact => write!(f, "Exact"),
            Precision::Digits(d) => write!(f, "Digits({})", d),
        }
    }
}

/// Rounds `value` to `digits` decimal places, half away from zero.
///
/// Non-finite values are returned unchanged, as are values too large to carry
/// any fractional digit at the requested precision.
///
/// The value is scaled, rounded and scaled back with no pre-rounding step, so
/// a decimal tie that is not exactly representable rounds by its binary
/// value: `round_to(1.005, 2)` is `1.0`, because `1.005` is stored as
/// `1.00499999999999989...`.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::num::precision::round_to;
/// assert_eq!(round_to(0.1 + 0.2, 10), 0.3);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// assert_eq!(round_to(-2.5, 0), -3.0);
/// assert!(round_to(f64::NAN, 4).is_nan());
/// ```
pub fn round_to<F>(value: F, digits: u32) -> F
where
    F: Float,
{
    if !value.is_finite() {
        return value;
    }
    let Ok(exp) = i32::try_from(digits) else {
        return value;
    };

    let two = F::one() + F::one();
    let ten = two * two * two + two;
    let factor = ten.powi(exp);
    let scaled = value * factor;

    // Beyond 1/epsilon every representable value is already integral.
    if !factor.is_finite() || !scaled.is_finite() || scaled.abs() >= F::one() / F::epsilon() {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_removes_representation_noise() {
        assert_eq!(round_to(0.1 + 0.2, 10), 0.3);
        assert_eq!(round_to(-0.1 - 0.2, 10), -0.3);
        assert_eq!(round_to(-2.1 % 1.0, 10), -0.1);
    }

    #[test]
    fn test_round_to_half_away_from_zero() {
        assert_eq!(round_to(0.5, 0), 1.0);
        assert_eq!(round_to(-0.5, 0), -1.0);
        assert_eq!(round_to(1.25, 1), 1.3);
        assert_eq!(round_to(-1.25, 1), -1.3);
    }

    #[test]
    fn test_round_to_binary_ties_round_down() {
        assert_eq!(round_to(1.005, 2), 1.0);
        assert_eq!(round_to(1.015625, 5), 1.01563);
    }

    #[test]
    fn test_round_to_leaves_large_values() {
        let big = 1.0e300;
        assert_eq!(round_to(big, 10), big);
        let mid = 123_456_789.123_456_7;
        assert_eq!(round_to(mid, 10), mid);
    }

    #[test]
    fn test_round_to_non_finite() {
        assert!(round_to(f64::NAN, 3).is_nan());
        assert_eq!(round_to(f64::INFINITY, 3), f64::INFINITY);
        assert_eq!(round_to(f64::NEG_INFINITY, 3), f64::NEG_INFINITY);
    }

    #[test]
    fn test_round_to_huge_digit_count() {
        assert_eq!(round_to(0.123, u32::MAX), 0.123);
        assert_eq!(round_to(0.123, 400), 0.123);
    }

    #[test]
    fn test_round_to_f32() {
        assert_eq!(round_to(1.23456f32, 2), 1.23f32);
    }

    #[test]
    fn test_precision_conversions() {
        assert_eq!(Precision::from(Some(4u32)), Precision::Digits(4));
        assert_eq!(Precision::from(None::<u32>), Precision::Exact);
        assert_eq!(Precision::from(3u32), Precision::Digits(3));
        assert_eq!(Precision::default().digits(), Some(10));
        assert_eq!(Precision::Exact.digits(), None);
    }

    #[test]
    fn test_precision_display() {
        assert_eq!(Precision::Exact.to_string(), "Exact");
        assert_eq!(Precision::Digits(10).to_string(), "Digits(10)");
    }
}
