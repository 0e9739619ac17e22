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

//! # Category Reports
//!
//! Evaluate every operation of a category on the same input in one call.
//! Each report is a plain `Copy` struct with one field per operation and a
//! `Display` impl that prints one `name: value` line per field, undefined
//! results rendered as `undefined`.
//!
//! ```rust
//! use scalar_math::report::ArithmeticReport;
//!
//! let report = ArithmeticReport::compute(7.0, 0.0);
//! assert!(report.division.is_undefined());
//! assert_eq!(report.addition, 7.0);
//! ```

use crate::{
    num::outcome::Outcome,
    ops::{arithmetic, bitwise, compare, trig, unary},
    random::{
        self,
        error::RandomError,
        source::{FastRandom, OsSecureRandom, SecureRandom},
    },
};
use std::fmt::{Display, Formatter, Result};

/// Lower bound of the integers drawn by `RandomReport`.
pub const REPORT_RANDOM_MIN: i64 = 1;

/// Upper bound of the integers drawn by `RandomReport`.
pub const REPORT_RANDOM_MAX: i64 = 10;

/// All binary arithmetic results for one pair of operands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArithmeticReport {
    /// `add(a, b)`, rounded to the default precision.
    pub addition: f64,
    /// `a - b`.
    pub subtraction: f64,
    /// `a * b`.
    pub multiplication: f64,
    /// `a / b`, undefined when `b` is zero.
    pub division: Outcome<f64>,
    /// Remainder of `a / b`, rounded to the default precision.
    pub modulus: f64,
    /// `a` raised to the power `b`.
    pub exponentiation: f64,
}

impl ArithmeticReport {
    /// Evaluates every arithmetic operation on `a` and `b`.
    pub fn compute(a: f64, b: f64) -> Self {
        Self {
            addition: arithmetic::add(a, b),
            subtraction: arithmetic::subtract(a, b),
            multiplication: arithmetic::multiply(a, b),
            division: arithmetic::divide(a, b),
            modulus: arithmetic::modulus(a, b),
            exponentiation: arithmetic::power(a, b),
        }
    }
}

impl Display for ArithmeticReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "addition: {}", self.addition)?;
        writeln!(f, "subtraction: {}", self.subtraction)?;
        writeln!(f, "multiplication: {}", self.multiplication)?;
        writeln!(f, "division: {}", self.division)?;
        writeln!(f, "modulus: {}", self.modulus)?;
        write!(f, "exponentiation: {}", self.exponentiation)
    }
}

/// All unary function results for one input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnaryReport {
    /// `|x|`.
    pub absolute: f64,
    /// Smallest integer not less than `x`.
    pub ceiling: f64,
    /// Largest integer not greater than `x`.
    pub floor: f64,
    /// `x` rounded half away from zero.
    pub round: f64,
    /// `e^x`.
    pub exponential: f64,
    /// Natural logarithm, undefined for `x <= 0`.
    pub logarithm: Outcome<f64>,
    /// Square root of `|x|`.
    pub square_root: f64,
}

impl UnaryReport {
    /// Evaluates every unary function on `x`.
    pub fn compute(x: f64) -> Self {
        Self {
            absolute: unary::absolute(x),
            ceiling: unary::ceiling(x),
            floor: unary::floor(x),
            round: unary::round(x),
            exponential: unary::exponential(x),
            logarithm: unary::logarithm(x),
            square_root: unary::square_root(x),
        }
    }
}

impl Display for UnaryReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "absolute: {}", self.absolute)?;
        writeln!(f, "ceiling: {}", self.ceiling)?;
        writeln!(f, "floor: {}", self.floor)?;
        writeln!(f, "round: {}", self.round)?;
        writeln!(f, "exponential: {}", self.exponential)?;
        writeln!(f, "logarithm: {}", self.logarithm)?;
        write!(f, "square_root: {}", self.square_root)
    }
}

/// Sine, cosine and tangent of one angle, at the default precision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrigReport {
    /// Sine of the angle.
    pub sine: f64,
    /// Cosine of the angle.
    pub cosine: f64,
    /// Tangent of the angle, undefined at a pole.
    pub tangent: Outcome<f64>,
}

impl TrigReport {
    /// Evaluates the trigonometric functions on `angle` (radians).
    pub fn compute(angle: f64) -> Self {
        Self {
            sine: trig::sine(angle),
            cosine: trig::cosine(angle),
            tangent: trig::tangent(angle),
        }
    }
}

impl Display for TrigReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "sine: {}", self.sine)?;
        writeln!(f, "cosine: {}", self.cosine)?;
        write!(f, "tangent: {}", self.tangent)
    }
}

/// The six relational predicates for one pair of operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ComparisonReport {
    /// `a > b`.
    pub greater_than: bool,
    /// `a < b`.
    pub less_than: bool,
    /// `a == b`.
    pub equal: bool,
    /// `a != b`.
    pub not_equal: bool,
    /// `a >= b`.
    pub greater_or_equal: bool,
    /// `a <= b`.
    pub less_or_equal: bool,
}

impl ComparisonReport {
    /// Evaluates every predicate on `a` and `b`.
    pub fn compute(a: f64, b: f64) -> Self {
        Self {
            greater_than: compare::is_greater_than(a, b),
            less_than: compare::is_less_than(a, b),
            equal: compare::is_equal(a, b),
            not_equal: compare::is_not_equal(a, b),
            greater_or_equal: compare::is_greater_or_equal(a, b),
            less_or_equal: compare::is_less_or_equal(a, b),
        }
    }
}

impl Display for ComparisonReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "greater_than: {}", self.greater_than)?;
        writeln!(f, "less_than: {}", self.less_than)?;
        writeln!(f, "equal: {}", self.equal)?;
        writeln!(f, "not_equal: {}", self.not_equal)?;
        writeln!(f, "greater_or_equal: {}", self.greater_or_equal)?;
        write!(f, "less_or_equal: {}", self.less_or_equal)
    }
}

/// Bitwise results for one pair of operands. The unary operations
/// (`not` and the shifts) apply to `a` only, with the default shift of one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitwiseReport {
    /// `a & b`.
    pub and: i64,
    /// `a | b`.
    pub or: i64,
    /// `a ^ b`.
    pub xor: i64,
    /// `!a`.
    pub not: i64,
    /// `a` shifted left by one bit.
    pub left_shift: i64,
    /// `a` shifted right by one bit, sign preserved.
    pub right_shift: i64,
}

impl BitwiseReport {
    /// Evaluates every bitwise operation on `a` and `b`.
    pub fn compute(a: i64, b: i64) -> Self {
        Self {
            and: bitwise::bitwise_and(a, b),
            or: bitwise::bitwise_or(a, b),
            xor: bitwise::bitwise_xor(a, b),
            not: bitwise::bitwise_not(a),
            left_shift: bitwise::left_shift(a),
            right_shift: bitwise::right_shift(a),
        }
    }
}

impl Display for BitwiseReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "bitwise_and: {}", self.and)?;
        writeln!(f, "bitwise_or: {}", self.or)?;
        writeln!(f, "bitwise_xor: {}", self.xor)?;
        writeln!(f, "bitwise_not: {}", self.not)?;
        writeln!(f, "left_shift: {}", self.left_shift)?;
        write!(f, "right_shift: {}", self.right_shift)
    }
}

/// One draw from each random generator.
///
/// Integers lie in `[REPORT_RANDOM_MIN, REPORT_RANDOM_MAX]`, the float in `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomReport {
    /// Integer from the secure provider.
    pub secure_int: i64,
    /// Integer from the fast provider.
    pub fast_int: i64,
    /// Float in `[0, 1)` from the fast provider.
    pub unit_float: f64,
}

impl RandomReport {
    /// Draws from the default providers.
    ///
    /// # Errors
    ///
    /// Fails only if the secure source fails.
    pub fn sample() -> std::result::Result<Self, RandomError> {
        Self::sample_with(&mut OsSecureRandom, &mut rand::rng())
    }

    /// Draws from caller-supplied providers.
    ///
    /// # Errors
    ///
    /// Fails only if `secure` fails.
    pub fn sample_with<S, F>(secure: &mut S, fast: &mut F) -> std::result::Result<Self, RandomError>
    where
        S: SecureRandom + ?Sized,
        F: FastRandom + ?Sized,
    {
        Ok(Self {
            secure_int: random::random_int_with(secure, REPORT_RANDOM_MIN, REPORT_RANDOM_MAX)?,
            fast_int: random::fast_random_int_with(fast, REPORT_RANDOM_MIN, REPORT_RANDOM_MAX),
            unit_float: random::random_float_with(fast),
        })
    }
}

impl Display for RandomReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "secure_int: {}", self.secure_int)?;
        writeln!(f, "fast_int: {}", self.fast_int)?;
        write!(f, "unit_float: {}", self.unit_float)
    }
}
