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

//! # Unary Functions
//!
//! Single-argument functions on `f64`. Everything returns `f64`, including
//! the integral results of `ceiling`, `floor` and `round`. Only `logarithm`
//! can be undefined.

use crate::num::outcome::Outcome;

/// Returns `|x|`.
#[inline]
pub fn absolute(x: f64) -> f64 {
    x.abs()
}

/// Returns the smallest integer not less than `x`.
#[inline]
pub fn ceiling(x: f64) -> f64 {
    x.ceil()
}

/// Returns the largest integer not greater than `x`.
#[inline]
pub fn floor(x: f64) -> f64 {
    x.floor()
}

/// Rounds `x` to the nearest integer, half away from zero.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::round;
/// assert_eq!(round(2.5), 3.0);
/// assert_eq!(round(-2.5), -3.0);
/// ```
#[inline]
pub fn round(x: f64) -> f64 {
    x.round()
}

/// Returns `e^x`. Large inputs overflow to infinity.
#[inline]
pub fn exponential(x: f64) -> f64 {
    x.exp()
}

/// Returns the natural logarithm of `x`, or `Outcome::Undefined` for `x <= 0`.
///
/// NaN is also undefined.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::{logarithm, Outcome};
/// assert_eq!(logarithm(1.0), Outcome::Value(0.0));
/// assert_eq!(logarithm(0.0), Outcome::Undefined);
/// assert_eq!(logarithm(-1.0), Outcome::Undefined);
/// ```
#[inline]
pub fn logarithm(x: f64) -> Outcome<f64> {
    if x > 0.0 {
        Outcome::Value(x.ln())
    } else {
        Outcome::Undefined
    }
}

/// Returns the square root of `|x|`.
///
/// Negative inputs are reflected before the root is taken, so the result is
/// never NaN for finite input.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::square_root;
/// assert_eq!(square_root(-4.0), 2.0);
/// ```
#[inline]
pub fn square_root(x: f64) -> f64 {
    x.abs().sqrt()
}
