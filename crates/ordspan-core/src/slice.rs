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

//! Random-access consumption of ranges.
//!
//! Slicing goes through the domain's `subset` operation instead of stepping
//! element by element, so a domain with cheap random access pays nothing for
//! the elements the caller skipped over.

use crate::SpanValue;
use crate::range::Range;
use crate::space::ValueSpace;
use std::ops::RangeInclusive;

/// A lazy slice descriptor: the total element count plus an accessor that
/// materializes runs on demand.
///
/// # Examples
///
/// ```
/// use ordspan_core::range::Range;
/// use ordspan_core::slice::Slice;
/// use ordspan_spaces::chars::CharSpace;
///
/// let range = Range::new('a', 'g', CharSpace);
/// let view = Slice::new(&range);
/// assert_eq!(view.total(), 7);
/// assert_eq!(view.fetch(2, 3), vec!['c', 'd', 'e']);
/// assert_eq!(view.fetch(5, 10), vec!['f', 'g']);
/// ```
#[derive(Debug)]
pub struct Slice<'r, V, S> {
    range: &'r Range<V, S>,
    total: usize,
}

// Written by hand so the descriptor stays copyable over non-Copy spaces; the
// fields are a shared reference and a count.
impl<V, S> Clone for Slice<'_, V, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, S> Copy for Slice<'_, V, S> {}

impl<'r, V, S> Slice<'r, V, S>
where
    V: SpanValue,
    S: ValueSpace<V>,
{
    /// Builds a descriptor over the given range; the single `count` call is
    /// the only domain work done up front.
    #[inline]
    pub fn new(range: &'r Range<V, S>) -> Self {
        Self {
            range,
            total: range.count(),
        }
    }

    /// Returns the total number of elements between the bounds.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Materializes `len` elements beginning at the absolute index `start`,
    /// clamped to the available elements.
    pub fn fetch(&self, start: usize, len: usize) -> Vec<V> {
        if start >= self.total || len == 0 {
            return Vec::new();
        }
        let len = len.min(self.total - start);
        self.range
            .space()
            .subset(self.range.locate(start), len)
    }
}

/// Returns the elements selected by an inclusive index range.
///
/// Negative indices count from the end (`-1` is the last element). Bounds
/// reaching past either edge are clamped to the actual elements; a selection
/// that is inverted or entirely out of range yields an empty vector.
///
/// # Examples
///
/// ```
/// use ordspan_core::range::Range;
/// use ordspan_core::slice::slice;
/// use ordspan_spaces::chars::CharSpace;
///
/// let range = Range::new('a', 'g', CharSpace);
/// assert_eq!(slice(&range, 2..=50), vec!['c', 'd', 'e', 'f', 'g']);
/// assert_eq!(slice(&range, -1..=-1), vec!['g']);
/// assert_eq!(slice(&range, 5..=2), Vec::<char>::new());
/// ```
pub fn slice<V, S>(range: &Range<V, S>, bounds: RangeInclusive<isize>) -> Vec<V>
where
    V: SpanValue,
    S: ValueSpace<V>,
{
    let view = Slice::new(range);
    let total = view.total() as isize;
    if total == 0 {
        return Vec::new();
    }

    let mut first = *bounds.start();
    let mut last = *bounds.end();
    if first < 0 {
        first += total;
    }
    if last < 0 {
        last += total;
    }
    let first = first.max(0);
    let last = last.min(total - 1);
    if last < first {
        return Vec::new();
    }

    view.fetch(first as usize, (last - first + 1) as usize)
}
