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

//! # Outcome
//!
//! A tagged result for operations that are undefined on part of their domain.
//!
//! Division by zero, the logarithm of a non-positive number and the tangent at
//! its poles have no numeric answer. These cases are expected, not faults, so
//! they are reported as `Outcome::Undefined` rather than through `Result` or a
//! panic. Callers match on the variant before using the number.
//!
//! ```rust
//! use scalar_math::{Outcome, divide};
//!
//! assert_eq!(divide(6.0, 3.0), Outcome::Value(2.0));
//! assert_eq!(divide(6.0, 0.0), Outcome::Undefined);
//! assert_eq!(divide(6.0, 0.0).to_string(), "undefined");
//! ```

use std::fmt::Display;

/// The result of an operation that may be mathematically undefined.
#[derive(Clone, Copy, PartialEq, PartialOrd, Hash, Debug)]
pub enum Outcome<T> {
    /// A well-defined numeric result.
    Value(T),
    /// The operation has no numeric result for the given input.
    Undefined,
}

impl<T> Outcome<T> {
    /// Returns `true` if the outcome holds a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use scalar_math::Outcome;
    /// assert!(Outcome::Value(1.0).is_value());
    /// assert!(!Outcome::<f64>::Undefined.is_value());
    /// ```
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }

    /// Returns `true` if the outcome is undefined.
    #[inline]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Outcome::Undefined)
    }

    /// Returns the value by copy, or `None` if undefined.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use scalar_math::Outcome;
    /// assert_eq!(Outcome::Value(2.5).value(), Some(2.5));
    /// assert_eq!(Outcome::<f64>::Undefined.value(), None);
    /// ```
    #[inline]
    pub fn value(&self) -> Option<T>
    where
        T: Copy,
    {
        match self {
            Outcome::Value(v) => Some(*v),
            Outcome::Undefined => None,
        }
    }

    /// Converts into an `Option`, consuming the outcome.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Outcome::Value(v) => Some(v),
            Outcome::Undefined => None,
        }
    }

    /// Applies `f` to the contained value, leaving `Undefined` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use scalar_math::Outcome;
    /// assert_eq!(Outcome::Value(2.0).map(|v| v * 2.0), Outcome::Value(4.0));
    /// assert_eq!(Outcome::<f64>::Undefined.map(|v| v * 2.0), Outcome::Undefined);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Value(v) => Outcome::Value(f(v)),
            Outcome::Undefined => Outcome::Undefined,
        }
    }

    /// Returns the contained value or `default` if undefined.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Value(v) => v,
            Outcome::Undefined => default,
        }
    }
}

impl<T> Default for Outcome<T> {
    #[inline]
    fn default() -> Self {
        Outcome::Undefined
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Outcome::Value(v),
            None => Outcome::Undefined,
        }
    }
}

impl<T> From<Outcome<T>> for Option<T> {
    #[inline]
    fn from(value: Outcome<T>) -> Self {
        value.into_option()
    }
}

impl<T> Display for Outcome<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Value(v) => write!(f, "{}", v),
            Outcome::Undefined => write!(f, "undefined"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        let v: Outcome<f64> = Outcome::Value(0.0);
        let u: Outcome<f64> = Outcome::Undefined;
        assert!(v.is_value());
        assert!(!v.is_undefined());
        assert!(u.is_undefined());
        assert!(!u.is_value());
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(Outcome::from(Some(3)), Outcome::Value(3));
        assert_eq!(Outcome::<i32>::from(None), Outcome::Undefined);
        let back: Option<i32> = Outcome::Value(7).into();
        assert_eq!(back, Some(7));
        let back: Option<i32> = Outcome::Undefined.into();
        assert_eq!(back, None);
    }

    #[test]
    fn test_unwrap_or_and_default() {
        assert_eq!(Outcome::Value(1.5).unwrap_or(0.0), 1.5);
        assert_eq!(Outcome::Undefined.unwrap_or(-1.0), -1.0);
        assert_eq!(Outcome::<f64>::default(), Outcome::Undefined);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Outcome::Value(2.5)), "2.5");
        assert_eq!(format!("{}", Outcome::<f64>::Undefined), "undefined");
    }

    #[test]
    fn test_zero_value_is_not_undefined() {
        // A zero result must stay distinguishable from the undefined marker.
        assert_ne!(Outcome::Value(0.0), Outcome::Undefined);
        assert_eq!(Outcome::Value(0.0).value(), Some(0.0));
    }
}
