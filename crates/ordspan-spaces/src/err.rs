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

use std::fmt::Display;

/// A stride space cannot step anywhere with a stride of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroStrideError;

impl Display for ZeroStrideError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stride must be non-zero")
    }
}

impl std::error::Error for ZeroStrideError {}

/// A function-space builder was finalized without one of the required
/// domain operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MissingOperationError {
    op: &'static str,
}

impl MissingOperationError {
    #[inline]
    pub(crate) fn new(op: &'static str) -> Self {
        Self { op }
    }

    /// Returns the name of the missing operation.
    #[inline]
    pub fn op(&self) -> &'static str {
        self.op
    }
}

impl Display for MissingOperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Function space is missing required operation '{}'", self.op)
    }
}

impl std::error::Error for MissingOperationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_stride_error_display() {
        assert_eq!(format!("{}", ZeroStrideError), "Stride must be non-zero");
    }

    #[test]
    fn test_missing_operation_error_display() {
        let err = MissingOperationError::new("next");
        assert_eq!(err.op(), "next");
        assert_eq!(
            format!("{}", err),
            "Function space is missing required operation 'next'"
        );
    }
}
