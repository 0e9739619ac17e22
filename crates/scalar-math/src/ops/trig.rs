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

//! # Trigonometry
//!
//! Sine, cosine and tangent of an angle in radians, rounded to the default
//! precision unless an explicit `Precision` is given.
//!
//! The tangent is undefined at odd multiples of π/2. Poles are detected by
//! reducing the angle modulo π and comparing it to π/2 with an absolute
//! tolerance of `POLE_TOLERANCE`. Floating-point π is not exact, so the
//! tolerance is what catches `tan(FRAC_PI_2)`; angles just outside the band
//! still yield very large finite values.

use crate::num::{constants::POLE_TOLERANCE, outcome::Outcome, precision::Precision};
use std::f64::consts::{FRAC_PI_2, PI};

/// Returns `sin(angle)` rounded to the default precision.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::sine;
/// # use std::f64::consts::PI;
/// assert_eq!(sine(PI), 0.0);
/// ```
#[inline]
pub fn sine(angle: f64) -> f64 {
    sine_with_precision(angle, Precision::default())
}

/// Returns `sin(angle)` rounded according to `precision`.
#[inline]
pub fn sine_with_precision(angle: f64, precision: impl Into<Precision>) -> f64 {
    precision.into().apply(angle.sin())
}

/// Returns `cos(angle)` rounded to the default precision.
#[inline]
pub fn cosine(angle: f64) -> f64 {
    cosine_with_precision(angle, Precision::default())
}

/// Returns `cos(angle)` rounded according to `precision`.
#[inline]
pub fn cosine_with_precision(angle: f64, precision: impl Into<Precision>) -> f64 {
    precision.into().apply(angle.cos())
}

/// Returns `tan(angle)` rounded to the default precision, or
/// `Outcome::Undefined` at a pole.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::{tangent, Outcome};
/// # use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
/// assert_eq!(tangent(FRAC_PI_4), Outcome::Value(1.0));
/// assert_eq!(tangent(FRAC_PI_2), Outcome::Undefined);
/// assert_eq!(tangent(-FRAC_PI_2), Outcome::Undefined);
/// ```
#[inline]
pub fn tangent(angle: f64) -> Outcome<f64> {
    tangent_with_precision(angle, Precision::default())
}

/// Returns `tan(angle)` rounded according to `precision`, or
/// `Outcome::Undefined` at a pole.
///
/// Pole detection does not depend on `precision`.
pub fn tangent_with_precision(angle: f64, precision: impl Into<Precision>) -> Outcome<f64> {
    if is_tangent_pole(angle) {
        return Outcome::Undefined;
    }
    Outcome::Value(precision.into().apply(angle.tan()))
}

/// Returns `true` if `angle` lies within `POLE_TOLERANCE` of an odd multiple
/// of π/2 after reduction modulo π.
///
/// The reduction is Euclidean, so negative angles map into `[0, π)` as well.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::ops::trig::is_tangent_pole;
/// # use std::f64::consts::{FRAC_PI_2, PI};
/// assert!(is_tangent_pole(3.0 * FRAC_PI_2));
/// assert!(!is_tangent_pole(PI));
/// ```
#[inline]
pub fn is_tangent_pole(angle: f64) -> bool {
    let reduced = angle.rem_euclid(PI);
    (reduced - FRAC_PI_2).abs() < POLE_TOLERANCE
}
