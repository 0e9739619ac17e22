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

//! # Numeric Foundations
//!
//! Types and traits shared by every operation category.
//!
//! ## Submodules
//!
//! - `outcome`: `Outcome<T>`, the `{Value, Undefined}` result used where an
//!   operation has no answer for part of its domain.
//! - `precision`: the `Precision` policy and `round_to`, the half-away-from-zero
//!   decimal rounding applied by `add`, `modulus` and the trigonometric functions.
//! - `constants`: default precision, tangent pole tolerance, default shift
//!   count, and the `MinusOne`/`Zero` associated-constant traits.
//! - `ops`: by-value checked shift traits used by the bitwise operations.

pub mod constants;
pub mod ops;
pub mod outcome;
pub mod precision;
