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

//! # Scalar Broadcast
//!
//! Apply a scalar to every element of a sequence. The input slice is only
//! borrowed; the result is a new vector of the same length and order.

/// Multiplies every element of `values` by `scalar`.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::multiply_vector;
/// assert_eq!(multiply_vector(2.0, &[1.0, 2.0, 3.0]), vec![2.0, 4.0, 6.0]);
/// assert!(multiply_vector(2.0, &[]).is_empty());
/// ```
#[inline]
pub fn multiply_vector(scalar: f64, values: &[f64]) -> Vec<f64> {
    values.iter().map(|&x| x * scalar).collect()
}

/// Adds `scalar` to every element of `values`.
///
/// # Examples
///
/// ```rust
/// # use scalar_math::add_to_vector;
/// assert_eq!(add_to_vector(-2.0, &[1.0, 2.0, 3.0]), vec![-1.0, 0.0, 1.0]);
/// ```
#[inline]
pub fn add_to_vector(scalar: f64, values: &[f64]) -> Vec<f64> {
    values.iter().map(|&x| x + scalar).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_multiply_vector() {
        assert_eq!(multiply_vector(2.0, &[1.0, 2.0, 3.0]), vec![2.0, 4.0, 6.0]);
        assert_eq!(multiply_vector(0.0, &[1.0, 2.0, 3.0]), vec![0.0, 0.0, 0.0]);
        assert_eq!(multiply_vector(0.2, &[1.0, 2.0]), vec![0.2, 0.4]);
        assert_eq!(multiply_vector(-2.0, &[1.0, 2.0, 3.0]), vec![-2.0, -4.0, -6.0]);
        assert_eq!(multiply_vector(2.0, &[]), Vec::<f64>::new());
    }

    #[test]
    fn test_add_to_vector() {
        assert_eq!(add_to_vector(2.0, &[1.0, 2.0, 3.0]), vec![3.0, 4.0, 5.0]);
        assert_eq!(add_to_vector(0.0, &[1.0, 2.0, 3.0]), vec![1.0, 2.0, 3.0]);
        assert_eq!(add_to_vector(-2.0, &[1.0, 2.0, 3.0]), vec![-1.0, 0.0, 1.0]);
        assert_eq!(add_to_vector(2.0, &[]), Vec::<f64>::new());

        let shifted = add_to_vector(0.2, &[1.0, 2.0]);
        assert_eq!(shifted.len(), 2);
        assert_relative_eq!(shifted[0], 1.2);
        assert_relative_eq!(shifted[1], 2.2);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = vec![1.5, -2.5, 3.0];
        let _ = multiply_vector(4.0, &input);
        let _ = add_to_vector(4.0, &input);
        assert_eq!(input, vec![1.5, -2.5, 3.0]);
    }
}
