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

//! # Arithmetic
//!
//! Binary floating-point arithmetic. `add` and `modulus` round their result
//! to the default precision; the remaining operations return the raw IEEE
//! result. Division by zero is reported as `Outcome::Undefined`.

use crate::num::{outcome::Outcome, precision::Precision};

/// Returns `a + b` rounded to the default precision.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::add;
/// assert_eq!(add(0.1, 0.2), 0.3);
/// assert_eq!(add(-2.0, -3.0), -5.0);
/// ```
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    add_with_precision(a, b, Precision::default())
}

/// Returns `a + b` rounded according to `precision`.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::{add_with_precision, Precision};
/// assert_eq!(add_with_precision(0.1, 0.2, Precision::Exact), 0.1 + 0.2);
/// assert_eq!(add_with_precision(1.005, 1.0, Precision::Digits(1)), 2.0);
/// ```
#[inline]
pub fn add_with_precision(a: f64, b: f64, precision: impl Into<Precision>) -> f64 {
    precision.into().apply(a + b)
}

/// Returns `a - b`.
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Returns `a * b`.
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Returns `a / b`, or `Outcome::Undefined` if `b` is zero.
///
/// Both `0.0` and `-0.0` count as zero.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::{divide, Outcome};
/// assert_eq!(divide(-6.0, 3.0), Outcome::Value(-2.0));
/// assert_eq!(divide(1.0, -0.0), Outcome::Undefined);
/// ```
#[inline]
pub fn divide(a: f64, b: f64) -> Outcome<f64> {
    if b == 0.0 {
        Outcome::Undefined
    } else {
        Outcome::Value(a / b)
    }
}

/// Returns the floating-point remainder of `a / b` rounded to the default precision.
///
/// The sign follows the dividend. A zero divisor yields NaN, like the
/// primitive remainder.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::modulus;
/// assert_eq!(modulus(-5.0, 2.0), -1.0);
/// assert_eq!(modulus(5.0, -2.0), 1.0);
/// assert_eq!(modulus(2.1, 1.0), 0.1);
/// ```
#[inline]
pub fn modulus(a: f64, b: f64) -> f64 {
    modulus_with_precision(a, b, Precision::default())
}

/// Returns the floating-point remainder of `a / b` rounded according to `precision`.
#[inline]
pub fn modulus_with_precision(a: f64, b: f64, precision: impl Into<Precision>) -> f64 {
    precision.into().apply(a % b)
}

/// Returns `a` raised to the power `b`.
#[inline]
pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_add() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(add(0.0, 0.0), 0.0);
        assert_eq!(add(0.1, 0.2), 0.3);
        assert_eq!(add(-2.0, -3.0), -5.0);
        assert_eq!(add(-1.0, 1.0), 0.0);
        assert_eq!(add(-0.1, -0.2), -0.3);
    }

    #[test]
    fn test_add_with_precision() {
        assert_eq!(add_with_precision(0.1, 0.2, Precision::Exact), 0.1 + 0.2);
        assert_eq!(add_with_precision(1.234, 1.0, 2u32), 2.23);
        assert_eq!(add_with_precision(1.5, 1.0, Some(0u32)), 3.0);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(2.0, 3.0), -1.0);
        assert_eq!(subtract(0.0, 0.0), 0.0);
        assert_relative_eq!(subtract(0.1, 0.2), -0.1, epsilon = 1e-12);
        assert_eq!(subtract(-2.0, -3.0), 1.0);
        assert_eq!(subtract(-1.0, 1.0), -2.0);
        assert_relative_eq!(subtract(-0.1, -0.2), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(2.0, 3.0), 6.0);
        assert_eq!(multiply(0.0, 5.0), 0.0);
        assert_relative_eq!(multiply(0.2, 0.3), 0.06, epsilon = 1e-12);
        assert_eq!(multiply(-2.0, -3.0), 6.0);
        assert_eq!(multiply(-2.0, 3.0), -6.0);
        assert_relative_eq!(multiply(-0.2, 0.3), -0.06, epsilon = 1e-12);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(6.0, 3.0), Outcome::Value(2.0));
        assert_eq!(divide(0.0, 5.0), Outcome::Value(0.0));
        assert_relative_eq!(divide(0.6, 0.3).unwrap_or(f64::NAN), 2.0, epsilon = 1e-12);
        assert_eq!(divide(-6.0, -3.0), Outcome::Value(2.0));
        assert_eq!(divide(-6.0, 3.0), Outcome::Value(-2.0));
    }

    #[test]
    fn test_divide_by_zero_is_undefined() {
        for x in [6.0, 0.0, -1.5, f64::INFINITY, f64::NAN] {
            assert!(divide(x, 0.0).is_undefined());
            assert!(divide(x, -0.0).is_undefined());
        }
    }

    #[test]
    fn test_modulus() {
        assert_eq!(modulus(5.0, 2.0), 1.0);
        assert_eq!(modulus(4.0, 2.0), 0.0);
        assert_eq!(modulus(2.1, 1.0), 0.1);
        assert_eq!(modulus(-5.0, 2.0), -1.0);
        assert_eq!(modulus(5.0, -2.0), 1.0);
        assert_eq!(modulus(-2.1, 1.0), -0.1);
    }

    #[test]
    fn test_modulus_without_rounding() {
        assert_ne!(modulus_with_precision(2.1, 1.0, Precision::Exact), 0.1);
        assert!(modulus(1.0, 0.0).is_nan());
    }

    #[test]
    fn test_power() {
        assert_eq!(power(2.0, 3.0), 8.0);
        assert_eq!(power(5.0, 0.0), 1.0);
        assert_eq!(power(2.0, -2.0), 0.25);
        assert_eq!(power(-2.0, 3.0), -8.0);
        assert_eq!(power(0.5, 3.0), 0.125);
    }
}
