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

//! # ordspan Core (`ordspan-core`)
//!
//! This crate provides the generic building blocks for ranges over arbitrary
//! totally-ordered domains:
//!
//! - [`space::ValueSpace`]: the capability interface a domain type implements
//!   to back a range (stepping, membership, counting, random access).
//! - [`range::Range`]: an immutable, structurally-comparable value holding a
//!   start bound, an end bound, a cursor, and the bound domain operations.
//! - [`fold`]: the cooperative external-iteration protocol with
//!   continue/suspend/halt signaling and resumable continuations.
//! - [`slice`]: the random-access consumption path that avoids stepping
//!   through elements the caller did not ask for.
//! - [`iter`]: an [`Iterator`] adapter so ranges compose with the standard
//!   library's sequence consumers.
//!
//! The crate is deliberately domain-agnostic: concrete domains live in
//! `ordspan-spaces` (or in client code) and plug in through [`space::ValueSpace`].

use std::fmt::Debug;

pub mod fold;
pub mod iter;
pub mod range;
pub mod slice;
pub mod space;

/// The bounds every range value type must satisfy.
///
/// Values are copied freely while stepping and compared against the bounds,
/// so `Copy + PartialEq` is required; `Debug` keeps assertion output useful.
pub trait SpanValue: Copy + PartialEq + Debug {}
impl<T> SpanValue for T where T: Copy + PartialEq + Debug {}
