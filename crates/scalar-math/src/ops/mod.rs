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

//! # Operations
//!
//! The pure, stateless operation categories.
//!
//! ## Submodules
//!
//! - `arithmetic`: add, subtract, multiply, divide, modulus, power.
//! - `broadcast`: scalar-times-sequence and scalar-plus-sequence.
//! - `unary`: absolute, ceiling, floor, round, exponential, logarithm, square root.
//! - `trig`: sine, cosine, tangent with pole detection.
//! - `compare`: the six IEEE relational predicates.
//! - `bitwise`: and, or, xor, not, and the two shifts on signed integers.
//!
//! No function here holds state or depends on another's output, so all of
//! them are safe to call from any number of threads at once.

pub mod arithmetic;
pub mod bitwise;
pub mod broadcast;
pub mod compare;
pub mod trig;
pub mod unary;
