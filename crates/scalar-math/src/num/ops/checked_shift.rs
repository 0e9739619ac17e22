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

//! # Checked Shift Traits
//!
//! By-value shift traits for signed integer primitives. The primitive
//! `checked_shl`/`checked_shr` methods are inherent, so generic code over
//! several widths cannot reach them without a trait. These traits expose them
//! uniformly and report an out-of-range shift count as `None`.
//!
//! Only the count is checked. Bits shifted out of the value are discarded,
//! matching the behavior of the `<<` and `>>` operators.

use core::ops::{Shl, Shr};

/// A trait for types that support checked left shift by value.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::num::ops::checked_shift::CheckedShlVal;
/// let a: i32 = 5;
/// assert_eq!(a.checked_shl_val(2), Some(20));
/// assert_eq!(a.checked_shl_val(32), None); // Count >= bit width
/// ```
pub trait CheckedShlVal: Sized + Shl<u32, Output = Self> {
    /// Shifts left by `rhs`, returning `None` if `rhs` is not smaller than the bit width.
    fn checked_shl_val(self, rhs: u32) -> Option<Self>;
}

/// A trait for types that support checked arithmetic right shift by value.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::num::ops::checked_shift::CheckedShrVal;
/// let a: i16 = -8;
/// assert_eq!(a.checked_shr_val(1), Some(-4)); // Sign is preserved
/// assert_eq!(a.checked_shr_val(16), None);
/// ```
pub trait CheckedShrVal: Sized + Shr<u32, Output = Self> {
    /// Shifts right by `rhs`, returning `None` if `rhs` is not smaller than the bit width.
    fn checked_shr_val(self, rhs: u32) -> Option<Self>;
}

macro_rules! checked_shift_impl_val {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedShlVal for $t {
                #[inline(always)]
                fn checked_shl_val(self, rhs: u32) -> Option<$t> {
                    <$t>::checked_shl(self, rhs)
                }
            }

            impl CheckedShrVal for $t {
                #[inline(always)]
                fn checked_shr_val(self, rhs: u32) -> Option<$t> {
                    <$t>::checked_shr(self, rhs)
                }
            }
        )*
    };
}

checked_shift_impl_val!(i8, i16, i32, i64, i128, isize);
