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

//! # Bitwise Operations
//!
//! Two's-complement bit operations on signed integers. The functions are
//! generic over the signed primitives and are normally used with `i64`.
//!
//! Shift counts are `u32`, so a negative count cannot be expressed. A count
//! that reaches the bit width moves every bit out of the word: a left shift
//! then yields `0`, and the arithmetic right shift yields the sign fill
//! (`0` for non-negative values, `-1` for negative ones).

use crate::num::{
    constants::{DEFAULT_SHIFT, MinusOne, Zero},
    ops::checked_shift::{CheckedShlVal, CheckedShrVal},
};
use num_traits::{PrimInt, Signed};

/// Returns `a & b`.
#[inline]
pub fn bitwise_and<T>(a: T, b: T) -> T
where
    T: PrimInt + Signed,
{
    a & b
}

/// Returns `a | b`.
#[inline]
pub fn bitwise_or<T>(a: T, b: T) -> T
where
    T: PrimInt + Signed,
{
    a | b
}

/// Returns `a ^ b`.
#[inline]
pub fn bitwise_xor<T>(a: T, b: T) -> T
where
    T: PrimInt + Signed,
{
    a ^ b
}

/// Returns `!a`, which equals `-a - 1` in two's complement.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::bitwise_not;
/// assert_eq!(bitwise_not(5i64), -6);
/// assert_eq!(bitwise_not(0i64), -1);
/// ```
#[inline]
pub fn bitwise_not<T>(a: T) -> T
where
    T: PrimInt + Signed,
{
    !a
}

/// Shifts `a` left by one bit.
#[inline]
pub fn left_shift<T>(a: T) -> T
where
    T: PrimInt + Signed + CheckedShlVal + Zero,
{
    left_shift_by(a, DEFAULT_SHIFT)
}

/// Shifts `a` left by `count` bits. Bits moved past the top are discarded.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::left_shift_by;
/// assert_eq!(left_shift_by(5i64, 2), 20);
/// assert_eq!(left_shift_by(5i64, 64), 0);
/// ```
#[inline]
pub fn left_shift_by<T>(a: T, count: u32) -> T
where
    T: PrimInt + Signed + CheckedShlVal + Zero,
{
    a.checked_shl_val(count).unwrap_or(T::ZERO)
}

/// Shifts `a` right by one bit, preserving the sign.
#[inline]
pub fn right_shift<T>(a: T) -> T
where
    T: PrimInt + Signed + CheckedShrVal + MinusOne + Zero,
{
    right_shift_by(a, DEFAULT_SHIFT)
}

/// Shifts `a` right by `count` bits, preserving the sign.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::right_shift_by;
/// assert_eq!(right_shift_by(5i64, 2), 1);
/// assert_eq!(right_shift_by(-5i64, 1), -3);
/// assert_eq!(right_shift_by(-5i64, 100), -1);
/// ```
#[inline]
pub fn right_shift_by<T>(a: T, count: u32) -> T
where
    T: PrimInt + Signed + CheckedShrVal + MinusOne + Zero,
{
    match a.checked_shr_val(count) {
        Some(v) => v,
        None if a.is_negative() => T::MINUS_ONE,
        None => T::ZERO,
    }
}
