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

//! # Comparison
//!
//! Relational predicates over `f64` using plain IEEE comparison. There is no
//! epsilon: values produced along different arithmetic paths may compare
//! unequal, and NaN is unequal to everything, itself included.

/// Returns `a > b`.
#[inline]
pub fn is_greater_than(a: f64, b: f64) -> bool {
    a > b
}

/// Returns `a < b`.
#[inline]
pub fn is_less_than(a: f64, b: f64) -> bool {
    a < b
}

/// Returns `a == b`.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::is_equal;
/// assert!(is_equal(0.0, -0.0));
/// assert!(!is_equal(0.1 + 0.2, 0.3));
/// assert!(!is_equal(f64::NAN, f64::NAN));
/// ```
#[inline]
pub fn is_equal(a: f64, b: f64) -> bool {
    a == b
}

/// Returns `a != b`.
#[inline]
pub fn is_not_equal(a: f64, b: f64) -> bool {
    a != b
}

/// Returns `a >= b`.
#[inline]
pub fn is_greater_or_equal(a: f64, b: f64) -> bool {
    a >= b
}

/// Returns `a <= b`.
#[inline]
pub fn is_less_or_equal(a: f64, b: f64) -> bool {
    a <= b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greater_and_less() {
        assert!(is_greater_than(2.0, 1.0));
        assert!(!is_greater_than(1.0, 2.0));
        assert!(!is_greater_than(1.0, 1.0));

        assert!(is_less_than(1.0, 2.0));
        assert!(!is_less_than(2.0, 1.0));
        assert!(!is_less_than(1.0, 1.0));
    }

    #[test]
    fn test_equality() {
        assert!(is_equal(1.0, 1.0));
        assert!(!is_equal(1.0, 2.0));
        assert!(is_not_equal(1.0, 2.0));
        assert!(!is_not_equal(1.0, 1.0));
    }

    #[test]
    fn test_or_equal() {
        assert!(is_greater_or_equal(2.0, 1.0));
        assert!(is_greater_or_equal(1.0, 1.0));
        assert!(!is_greater_or_equal(1.0, 2.0));

        assert!(is_less_or_equal(1.0, 2.0));
        assert!(is_less_or_equal(1.0, 1.0));
        assert!(!is_less_or_equal(2.0, 1.0));
    }

    #[test]
    fn test_no_tolerance_on_equality() {
        assert!(is_not_equal(0.1 + 0.2, 0.3));
        assert!(is_equal(0.5 + 0.25, 0.75));
    }

    #[test]
    fn test_nan() {
        let nan = f64::NAN;
        assert!(!is_greater_than(nan, 0.0));
        assert!(!is_less_than(nan, 0.0));
        assert!(!is_equal(nan, nan));
        assert!(is_not_equal(nan, nan));
        assert!(!is_greater_or_equal(nan, nan));
        assert!(!is_less_or_equal(nan, nan));
    }
}
