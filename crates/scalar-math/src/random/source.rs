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

//! # Random Providers
//!
//! The two styles of randomness offered by the library, each behind its own
//! trait so callers can substitute an implementation without touching call
//! sites.
//!
//! - `SecureRandom`: integers from a cryptographically strong source. May
//!   fail if the entropy source is unavailable.
//! - `FastRandom`: integers and unit floats from any `rand::Rng`. Never fails.
//!
//! Providers are values owned by the caller. The library keeps no generator
//! state of its own.

use crate::random::error::RandomError;
use rand::{
    Rng, SeedableRng, TryRngCore,
    rngs::{OsRng, StdRng},
};

/// A source of uniformly distributed integers suitable for security-sensitive use.
pub trait SecureRandom {
    /// Returns an integer in `[min, max]`, both ends inclusive.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::EmptyRange` if `min > max`, and an entropy or
    /// provider error if no value can be produced.
    fn try_int_in_range(&mut self, min: i64, max: i64) -> Result<i64, RandomError>;
}

/// A fast, non-cryptographic source of uniform values.
///
/// Implemented for every `rand::Rng`, so seeded generators such as
/// `rand::rngs::SmallRng` or `rand::rngs::StdRng` can be passed directly.
///
/// # Examples
///
/// ```rust
/// use rand::{SeedableRng, rngs::StdRng};
/// use scalar_math::random::source::FastRandom;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let v = rng.int_in_range(1, 10);
/// assert!((1..=10).contains(&v));
/// let u = rng.unit_float();
/// assert!((0.0..1.0).contains(&u));
/// ```
pub trait FastRandom {
    /// Returns an integer between `min` and `max`, both ends inclusive.
    ///
    /// Reversed bounds are swapped rather than rejected.
    fn int_in_range(&mut self, min: i64, max: i64) -> i64;

    /// Returns a float in `[0, 1)`.
    fn unit_float(&mut self) -> f64;
}

impl<R> FastRandom for R
where
    R: Rng,
{
    #[inline]
    fn int_in_range(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if min <= max {
            (min, max)
        } else {
            log::trace!("fast random range reversed ({min} > {max}), swapping bounds");
            (max, min)
        };
        self.random_range(lo..=hi)
    }

    #[inline]
    fn unit_float(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// The default `SecureRandom` provider.
///
/// Every draw seeds a fresh ChaCha-based `StdRng` from the operating system
/// entropy source (`OsRng`) and samples from it. Nothing is cached between
/// draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OsSecureRandom;

impl OsSecureRandom {
    /// Creates a new provider.
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl SecureRandom for OsSecureRandom {
    fn try_int_in_range(&mut self, min: i64, max: i64) -> Result<i64, RandomError> {
        if min > max {
            return Err(RandomError::EmptyRange { min, max });
        }

        let mut seed = <StdRng as SeedableRng>::Seed::default();
        if let Err(e) = OsRng.try_fill_bytes(&mut seed) {
            log::warn!("secure random draw failed: OS entropy source unavailable: {e}");
            return Err(RandomError::from(e));
        }

        let mut rng = StdRng::from_seed(seed);
        Ok(rng.random_range(min..=max))
    }
}

impl std::fmt::Display for OsSecureRandom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OsSecureRandom")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_os_secure_random_bounds() {
        let mut source = OsSecureRandom::new();
        for _ in 0..200 {
            let v = source.try_int_in_range(1, 10).expect("OS entropy");
            assert!((1..=10).contains(&v));
        }
    }

    #[test]
    fn test_os_secure_random_single_point_range() {
        let mut source = OsSecureRandom;
        assert_eq!(source.try_int_in_range(7, 7).expect("OS entropy"), 7);
        assert_eq!(
            source
                .try_int_in_range(i64::MIN, i64::MIN)
                .expect("OS entropy"),
            i64::MIN
        );
    }

    #[test]
    fn test_os_secure_random_full_range() {
        let mut source = OsSecureRandom;
        assert!(source.try_int_in_range(i64::MIN, i64::MAX).is_ok());
    }

    #[test]
    fn test_os_secure_random_empty_range() {
        let mut source = OsSecureRandom;
        let err = source.try_int_in_range(10, 1).unwrap_err();
        assert!(matches!(err, RandomError::EmptyRange { min: 10, max: 1 }));
    }

    #[test]
    fn test_fast_random_is_deterministic_for_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        let xs: Vec<i64> = (0..32).map(|_| a.int_in_range(-5, 5)).collect();
        let ys: Vec<i64> = (0..32).map(|_| b.int_in_range(-5, 5)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|v| (-5..=5).contains(v)));
    }

    #[test]
    fn test_fast_random_swaps_reversed_bounds() {
        let mut rng = StdRng::seed_from_u64(12345);
        for _ in 0..200 {
            let v = rng.int_in_range(10, 1);
            assert!((1..=10).contains(&v));
        }
    }

    #[test]
    fn test_fast_random_covers_range() {
        let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
        let mut seen = [false; 10];
        for _ in 0..1000 {
            let v = rng.int_in_range(1, 10);
            seen[(v - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_unit_float_half_open() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let u = rng.unit_float();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(OsSecureRandom.to_string(), "OsSecureRandom");
    }
}
