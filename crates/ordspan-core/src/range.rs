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

use crate::SpanValue;
use crate::space::ValueSpace;

/// An immutable range over a totally-ordered domain.
///
/// A `Range` holds a fixed `start` bound, a fixed `end` bound, a movable
/// `cursor` (initialized to `start`), and the [`ValueSpace`] supplying the
/// domain operations. It is a plain value: stepping never mutates in place
/// but returns a new `Range`, and equality is field-wise structural equality.
///
/// Stepping past a bound is defined as a no-op, not an error; see
/// [`advance`](Range::advance) and [`retreat`](Range::retreat).
///
/// # Examples
///
/// ```
/// use ordspan_core::range::Range;
/// use ordspan_spaces::chars::CharSpace;
///
/// let range = Range::new('a', 'g', CharSpace);
/// assert_eq!(range.current(), 'a');
/// assert_eq!(range.count(), 7);
/// assert!(range.included('d'));
/// assert!(!range.included('h'));
///
/// let stepped = range.advance();
/// assert_eq!(stepped.current(), 'b');
/// // The original is unaffected.
/// assert_eq!(range.current(), 'a');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<V, S> {
    start: V,
    end: V,
    cursor: V,
    space: S,
}

/// Named-field construction form for [`Range`].
///
/// `Range::from(Bounds { .. })` and [`Range::new`] produce structurally equal
/// values for identical arguments.
///
/// # Examples
///
/// ```
/// use ordspan_core::range::{Bounds, Range};
/// use ordspan_spaces::chars::CharSpace;
///
/// let positional = Range::new('a', 'g', CharSpace);
/// let named = Range::from(Bounds {
///     start: 'a',
///     end: 'g',
///     space: CharSpace,
/// });
/// assert_eq!(positional, named);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds<V, S> {
    pub start: V,
    pub end: V,
    pub space: S,
}

impl<V, S> From<Bounds<V, S>> for Range<V, S>
where
    V: SpanValue,
    S: ValueSpace<V>,
{
    #[inline]
    fn from(bounds: Bounds<V, S>) -> Self {
        Range::new(bounds.start, bounds.end, bounds.space)
    }
}

impl<V, S> Range<V, S>
where
    V: SpanValue,
    S: ValueSpace<V>,
{
    /// Creates a new range with the cursor placed on `start`.
    #[inline]
    pub fn new(start: V, end: V, space: S) -> Self {
        Self {
            start,
            end,
            cursor: start,
            space,
        }
    }

    /// Returns the fixed start bound.
    #[inline]
    pub fn start(&self) -> V {
        self.start
    }

    /// Returns the fixed end bound.
    #[inline]
    pub fn end(&self) -> V {
        self.end
    }

    /// Returns the current cursor value.
    #[inline]
    pub fn current(&self) -> V {
        self.cursor
    }

    /// Returns the bound domain operations.
    #[inline]
    pub fn space(&self) -> &S {
        &self.space
    }

    /// Returns whether the cursor sits on the end bound.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.cursor == self.end
    }

    /// Returns whether the cursor sits on the start bound.
    #[inline]
    pub fn at_start(&self) -> bool {
        self.cursor == self.start
    }

    /// Moves the cursor one step towards the end bound.
    ///
    /// When the cursor already sits on the end bound, the range is returned
    /// unchanged; repeated calls are stable there.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordspan_core::range::Range;
    /// use ordspan_spaces::chars::CharSpace;
    ///
    /// let range = Range::new('a', 'b', CharSpace);
    /// let at_end = range.advance();
    /// assert_eq!(at_end.current(), 'b');
    /// assert_eq!(at_end.advance(), at_end);
    /// ```
    #[inline]
    pub fn advance(self) -> Self {
        if self.cursor == self.end {
            return self;
        }
        let cursor = self.space.next(self.cursor);
        Self { cursor, ..self }
    }

    /// Moves the cursor one step back towards the start bound.
    ///
    /// When the cursor already sits on the start bound, the range is returned
    /// unchanged; repeated calls are stable there.
    #[inline]
    pub fn retreat(self) -> Self {
        if self.cursor == self.start {
            return self;
        }
        let cursor = self.space.previous(self.cursor);
        Self { cursor, ..self }
    }

    /// Returns the number of values between the bounds, inclusive.
    ///
    /// Delegates to the domain; the cursor position plays no role.
    #[inline]
    pub fn count(&self) -> usize {
        self.space.count(self.start, self.end)
    }

    /// Returns whether `candidate` lies on the stepped path between the
    /// bounds, under the domain's step semantics.
    #[inline]
    pub fn included(&self, candidate: V) -> bool {
        self.space.included(self.start, self.end, candidate)
    }

    /// Returns up to `len` values beginning at the element with the given
    /// absolute index.
    ///
    /// A negative index counts from the end (`-1` is the last element). The
    /// index is resolved to a starting value through the domain's
    /// [`subset`](ValueSpace::subset), then the domain produces the run
    /// directly; elements before the index are never handed to the caller.
    /// Requests reaching past the last element are clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordspan_core::range::Range;
    /// use ordspan_spaces::chars::CharSpace;
    ///
    /// let range = Range::new('a', 'g', CharSpace);
    /// assert_eq!(range.subset(2, 3), vec!['c', 'd', 'e']);
    /// assert_eq!(range.subset(-2, 5), vec!['f', 'g']);
    /// assert_eq!(range.subset(9, 1), Vec::<char>::new());
    /// ```
    pub fn subset(&self, index: isize, len: usize) -> Vec<V> {
        let total = self.count();
        let resolved = if index < 0 {
            index + total as isize
        } else {
            index
        };
        let resolved = resolved.max(0) as usize;
        if resolved >= total || len == 0 {
            return Vec::new();
        }
        let len = len.min(total - resolved);
        self.space.subset(self.locate(resolved), len)
    }

    /// Re-borrows the range with a referenced space, so iteration and other
    /// consuming operations can run without giving up the original.
    #[inline]
    pub fn by_ref(&self) -> Range<V, &S> {
        Range {
            start: self.start,
            end: self.end,
            cursor: self.cursor,
            space: &self.space,
        }
    }

    /// Resolves a non-negative absolute index to the value at that position,
    /// using the domain's random access.
    #[inline]
    pub(crate) fn locate(&self, index: usize) -> V {
        if index == 0 {
            return self.start;
        }
        self.space
            .subset(self.start, index + 1)
            .last()
            .copied()
            .unwrap_or(self.start)
    }
}
