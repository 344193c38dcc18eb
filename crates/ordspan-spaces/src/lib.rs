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

//! # ordspan Spaces (`ordspan-spaces`)
//!
//! Concrete [`ValueSpace`](ordspan_core::space::ValueSpace) implementations
//! for `ordspan-core` ranges:
//!
//! - [`chars::CharSpace`]: Unicode scalar values with codepoint stepping.
//! - [`ints::StrideSpace`]: signed integers stepping by a caller-chosen,
//!   non-zero stride.
//! - [`fns::FnSpace`]: an ad-hoc bundle of the five domain operations as
//!   plain function values, for domains too small to deserve a named type.
//!
//! Every space here satisfies the same contract, so the generic protocol in
//! `ordspan-core` never needs to know which form it was handed.

pub mod chars;
pub mod err;
pub mod fns;
pub mod ints;

pub mod prelude {
    pub use crate::chars::CharSpace;
    pub use crate::err::{MissingOperationError, ZeroStrideError};
    pub use crate::fns::{FnSpace, FnSpaceBuilder};
    pub use crate::ints::StrideSpace;
}
