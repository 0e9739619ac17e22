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

//! Library-wide constants and associated-constant traits.
//!
//! The numeric constants here are the defaults applied by the plain-named
//! operations (`add`, `sine`, `left_shift`, ...). Their explicit siblings
//! (`add_with_precision`, `left_shift_by`, ...) accept the value directly.

/// Number of decimal digits used when an operation is called without an
/// explicit precision.
pub const DEFAULT_PRECISION_DIGITS: u32 = 10;

/// Absolute tolerance around π/2 (after reduction modulo π) inside which the
/// tangent is reported as undefined.
///
/// Inputs just outside this band produce very large finite values instead.
/// Changing the constant changes which angles are classified as poles.
pub const POLE_TOLERANCE: f64 = 1e-8;

/// Shift count used by `left_shift` and `right_shift`.
pub const DEFAULT_SHIFT: u32 = 1;

/// A trait for signed integer types that have a constant representing -1.
///
/// Used as the fill value when an arithmetic right shift of a negative
/// number moves every bit out of the word.
pub trait MinusOne {
    /// The constant representing -1 for the implementing type.
    const MINUS_ONE: Self;
}

/// A trait for integer types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

macro_rules! impl_signed_consts_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl MinusOne for $t {
                const MINUS_ONE: Self = -1;
            }

            impl Zero for $t {
                const ZERO: Self = 0;
            }
        )*
    };
}

impl_signed_consts_for!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_constants() {
        assert_eq!(i8::MINUS_ONE, -1);
        assert_eq!(i64::MINUS_ONE, -1);
        assert_eq!(isize::ZERO, 0);
        assert_eq!(i128::ZERO, 0);
    }

    #[test]
    fn test_default_values() {
        assert_eq!(DEFAULT_PRECISION_DIGITS, 10);
        assert_eq!(DEFAULT_SHIFT, 1);
        assert_eq!(POLE_TOLERANCE, 1e-8);
    }
}
