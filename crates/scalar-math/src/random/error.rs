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

/// The failure reported by the operating system entropy source.
pub use rand::rand_core::OsError;

/// A boxed entropy failure, from the OS source or a substituted provider.
pub type EntropyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for random-number generation.
///
/// Only the secure generator can fail. Mathematical non-results are never
/// reported through this type; see `Outcome` for those.
#[derive(Debug)]
pub enum RandomError {
    /// The entropy source could not be read.
    Entropy(EntropyError),
    /// The requested inclusive range is empty (`min > max`).
    EmptyRange {
        /// The requested lower bound.
        min: i64,
        /// The requested upper bound.
        max: i64,
    },
    /// A substituted secure provider could not produce a value.
    Provider(String),
}

impl std::fmt::Display for RandomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entropy(e) => write!(f, "Secure entropy source unavailable: {e}"),
            Self::EmptyRange { min, max } => {
                write!(f, "Empty range: min ({}) is greater than max ({})", min, max)
            }
            Self::Provider(msg) => write!(f, "Secure random provider failed: {}", msg),
        }
    }
}

impl std::error::Error for RandomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Entropy(e) => Some(&**e),
            _ => None,
        }
    }
}

impl From<OsError> for RandomError {
    fn from(e: OsError) -> Self {
        Self::Entropy(Box::new(e))
    }
}
