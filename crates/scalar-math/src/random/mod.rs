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

//! # Random Values
//!
//! Bounded random integers and unit floats.
//!
//! | Function          | Source                        | Range     | Fails |
//! |-------------------|-------------------------------|-----------|-------|
//! | `random_int`      | OS-seeded CSPRNG              | `[min, max]` | entropy unavailable, `min > max` |
//! | `fast_random_int` | thread-local `rand` generator | `[min, max]` | never |
//! | `random_float`    | thread-local `rand` generator | `[0, 1)`  | never |
//!
//! The `*_with` variants take a caller-owned provider instead. The exact
//! generator algorithm is not part of the contract; only the bounds are.
//!
//! ## Submodules
//!
//! - `source`: the `SecureRandom` and `FastRandom` provider traits and the
//!   default `OsSecureRandom` provider.
//! - `error`: `RandomError`.

pub mod error;
pub mod source;

use crate::random::{
    error::RandomError,
    source::{FastRandom, OsSecureRandom, SecureRandom},
};

/// Returns a cryptographically secure integer in `[min, max]`.
///
/// # Errors
///
/// Fails if the operating system entropy source cannot be read, or if
/// `min > max`. The error is returned to the caller, not handled here.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::random_int;
/// # fn main() -> Result<(), scalar_math::RandomError> {
/// let v = random_int(1, 10)?;
/// assert!((1..=10).contains(&v));
/// # Ok(())
/// # }
/// ```
#[inline]
pub fn random_int(min: i64, max: i64) -> Result<i64, RandomError> {
    random_int_with(&mut OsSecureRandom, min, max)
}

/// Returns a secure integer in `[min, max]` drawn from `source`.
#[inline]
pub fn random_int_with<S>(source: &mut S, min: i64, max: i64) -> Result<i64, RandomError>
where
    S: SecureRandom + ?Sized,
{
    source.try_int_in_range(min, max)
}

/// Returns an integer in `[min, max]` from the fast thread-local generator.
///
/// Reversed bounds are swapped. Never fails.
#[inline]
pub fn fast_random_int(min: i64, max: i64) -> i64 {
    fast_random_int_with(&mut rand::rng(), min, max)
}

/// Returns an integer in `[min, max]` drawn from `source`.
#[inline]
pub fn fast_random_int_with<F>(source: &mut F, min: i64, max: i64) -> i64
where
    F: FastRandom + ?Sized,
{
    source.int_in_range(min, max)
}

/// Returns a float in `[0, 1)` from the fast thread-local generator.
#[inline]
pub fn random_float() -> f64 {
    random_float_with(&mut rand::rng())
}

/// Returns a float in `[0, 1)` drawn from `source`.
#[inline]
pub fn random_float_with<F>(source: &mut F) -> f64
where
    F: FastRandom + ?Sized,
{
    source.unit_float()
}
