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

//! # Scalar Math
//!
//! Stateless scalar helpers: arithmetic, broadcast over sequences, unary
//! functions, trigonometry, comparisons, bitwise operations and bounded
//! random values.
//!
//! ## Modules
//!
//! - `num`: the `Outcome` result type, the `Precision` rounding policy,
//!   library constants, and checked shift traits.
//! - `ops`: the operation categories, one submodule each.
//! - `random`: secure and fast random providers and the functions using them.
//! - `report`: evaluate a whole category on one input.
//!
//! ## Undefined results
//!
//! Division by zero, the logarithm of a non-positive number and the tangent
//! at a pole return `Outcome::Undefined`. This is an ordinary value, not an
//! error. The only operation that can fail is `random_int`, when the
//! operating system entropy source is unavailable.
//!
//! ## Rounding
//!
//! `add`, `modulus`, `sine`, `cosine` and `tangent` round to ten decimal
//! digits, half away from zero. The `*_with_precision` variants take a
//! `Precision` (or anything convertible into one) instead.
//!
//! ```rust
//! use scalar_math::prelude::*;
//! use std::f64::consts::FRAC_PI_2;
//!
//! assert_eq!(add(0.1, 0.2), 0.3);
//! assert_eq!(add_with_precision(0.1, 0.2, Precision::Exact), 0.30000000000000004);
//! assert_eq!(divide(1.0, 0.0), Outcome::Undefined);
//! assert_eq!(tangent(FRAC_PI_2), Outcome::Undefined);
//! assert_eq!(square_root(-9.0), 3.0);
//! assert_eq!(bitwise_not(5i64), -6);
//! ```

pub mod num;
pub mod ops;
pub mod random;
pub mod report;

pub use num::{
    outcome::Outcome,
    precision::{Precision, round_to},
};
pub use ops::{
    arithmetic::{
        add, add_with_precision, divide, modulus, modulus_with_precision, multiply, power,
        subtract,
    },
    bitwise::{
        bitwise_and, bitwise_not, bitwise_or, bitwise_xor, left_shift, left_shift_by,
        right_shift, right_shift_by,
    },
    broadcast::{add_to_vector, multiply_vector},
    compare::{
        is_equal, is_greater_or_equal, is_greater_than, is_less_or_equal, is_less_than,
        is_not_equal,
    },
    trig::{
        cosine, cosine_with_precision, sine, sine_with_precision, tangent,
        tangent_with_precision,
    },
    unary::{absolute, ceiling, exponential, floor, logarithm, round, square_root},
};
pub use random::{
    error::RandomError,
    fast_random_int, fast_random_int_with, random_float, random_float_with, random_int,
    random_int_with,
    source::{FastRandom, OsSecureRandom, SecureRandom},
};

/// Glob-importable surface: every operation plus the types they return.
pub mod prelude {
    pub use crate::num::constants::{DEFAULT_PRECISION_DIGITS, DEFAULT_SHIFT, POLE_TOLERANCE};
    pub use crate::report::{
        ArithmeticReport, BitwiseReport, ComparisonReport, RandomReport, TrigReport, UnaryReport,
    };
    pub use crate::{
        FastRandom, OsSecureRandom, Outcome, Precision, RandomError, SecureRandom, absolute, add,
        add_to_vector, add_with_precision, bitwise_and, bitwise_not, bitwise_or, bitwise_xor,
        ceiling, cosine, cosine_with_precision, divide, exponential, fast_random_int,
        fast_random_int_with, floor, is_equal, is_greater_or_equal, is_greater_than,
        is_less_or_equal, is_less_than, is_not_equal, left_shift, left_shift_by, logarithm,
        modulus, modulus_with_precision, multiply, multiply_vector, power, random_float,
        random_float_with, random_int, random_int_with, right_shift, right_shift_by, round,
        round_to, sine, sine_with_precision, square_root, subtract, tangent,
        tangent_with_precision,
    };
}
