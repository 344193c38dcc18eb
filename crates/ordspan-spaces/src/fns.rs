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

//! Ad-hoc value spaces assembled from plain function values.
//!
//! A one-off domain does not always deserve a named type. [`FnSpace`] bundles
//! the domain operations as closures so a caller can stand up a space inline,
//! at the cost of dynamic dispatch per step.

use crate::err::MissingOperationError;
use ordspan_core::SpanValue;
use ordspan_core::space::ValueSpace;
use std::fmt::{self, Debug};

/// A value space whose operations are supplied as boxed closures.
///
/// Built through [`FnSpaceBuilder`]; the `subset` operation is optional and
/// defaults to repeated application of `next`.
///
/// # Examples
///
/// ```
/// use ordspan_core::range::Range;
/// use ordspan_spaces::fns::FnSpace;
///
/// let doubling = FnSpace::builder()
///     .next(|v: u32| v * 2)
///     .previous(|v: u32| v / 2)
///     .included(|start, end, c: u32| start <= c && c <= end && c.is_power_of_two())
///     .count(|start: u32, end: u32| (end.ilog2() - start.ilog2()) as usize + 1)
///     .build()?;
///
/// let range = Range::new(1u32, 16, doubling);
/// assert_eq!(range.count(), 5);
/// let values: Vec<u32> = (&range).into_iter().collect();
/// assert_eq!(values, vec![1, 2, 4, 8, 16]);
/// # Ok::<(), ordspan_spaces::err::MissingOperationError>(())
/// ```
pub struct FnSpace<V> {
    next: Box<dyn Fn(V) -> V>,
    previous: Box<dyn Fn(V) -> V>,
    included: Box<dyn Fn(V, V, V) -> bool>,
    count: Box<dyn Fn(V, V) -> usize>,
    subset: Option<Box<dyn Fn(V, usize) -> Vec<V>>>,
}

impl<V> FnSpace<V>
where
    V: SpanValue + 'static,
{
    /// Starts assembling a space from individual operations.
    #[inline]
    pub fn builder() -> FnSpaceBuilder<V> {
        FnSpaceBuilder::new()
    }
}

impl<V> Debug for FnSpace<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnSpace")
    }
}

impl<V> ValueSpace<V> for FnSpace<V>
where
    V: SpanValue,
{
    #[inline]
    fn next(&self, current: V) -> V {
        (self.next)(current)
    }

    #[inline]
    fn previous(&self, current: V) -> V {
        (self.previous)(current)
    }

    #[inline]
    fn included(&self, start: V, end: V, candidate: V) -> bool {
        (self.included)(start, end, candidate)
    }

    #[inline]
    fn count(&self, start: V, end: V) -> usize {
        (self.count)(start, end)
    }

    fn subset(&self, start: V, count: usize) -> Vec<V> {
        match &self.subset {
            Some(subset) => subset(start, count),
            None => {
                let mut out = Vec::with_capacity(count);
                let mut current = start;
                for step in 0..count {
                    if step > 0 {
                        current = (self.next)(current);
                    }
                    out.push(current);
                }
                out
            }
        }
    }
}

/// Collects the operations of an [`FnSpace`] one at a time.
///
/// `next`, `previous`, `included` and `count` are required; `build` reports
/// the first missing one through [`MissingOperationError`].
pub struct FnSpaceBuilder<V> {
    next: Option<Box<dyn Fn(V) -> V>>,
    previous: Option<Box<dyn Fn(V) -> V>>,
    included: Option<Box<dyn Fn(V, V, V) -> bool>>,
    count: Option<Box<dyn Fn(V, V) -> usize>>,
    subset: Option<Box<dyn Fn(V, usize) -> Vec<V>>>,
}

impl<V> FnSpaceBuilder<V>
where
    V: SpanValue + 'static,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            next: None,
            previous: None,
            included: None,
            count: None,
            subset: None,
        }
    }

    /// Sets the forward stepping operation.
    #[inline]
    pub fn next(mut self, f: impl Fn(V) -> V + 'static) -> Self {
        self.next = Some(Box::new(f));
        self
    }

    /// Sets the backward stepping operation.
    #[inline]
    pub fn previous(mut self, f: impl Fn(V) -> V + 'static) -> Self {
        self.previous = Some(Box::new(f));
        self
    }

    /// Sets the membership test, called as `included(start, end, candidate)`.
    #[inline]
    pub fn included(mut self, f: impl Fn(V, V, V) -> bool + 'static) -> Self {
        self.included = Some(Box::new(f));
        self
    }

    /// Sets the inclusive element count, called as `count(start, end)`.
    #[inline]
    pub fn count(mut self, f: impl Fn(V, V) -> usize + 'static) -> Self {
        self.count = Some(Box::new(f));
        self
    }

    /// Sets the optional bulk enumeration, called as `subset(start, count)`.
    #[inline]
    pub fn subset(mut self, f: impl Fn(V, usize) -> Vec<V> + 'static) -> Self {
        self.subset = Some(Box::new(f));
        self
    }

    /// Finalizes the space.
    ///
    /// # Errors
    ///
    /// Returns [`MissingOperationError`] naming the first required operation
    /// that was never supplied.
    pub fn build(self) -> Result<FnSpace<V>, MissingOperationError> {
        Ok(FnSpace {
            next: self.next.ok_or(MissingOperationError::new("next"))?,
            previous: self
                .previous
                .ok_or(MissingOperationError::new("previous"))?,
            included: self
                .included
                .ok_or(MissingOperationError::new("included"))?,
            count: self.count.ok_or(MissingOperationError::new("count"))?,
            subset: self.subset,
        })
    }
}

impl<V> Default for FnSpaceBuilder<V>
where
    V: SpanValue + 'static,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::CharSpace;
    use ordspan_core::range::Range;
    use ordspan_core::slice::slice;

    fn char_bundle() -> FnSpace<char> {
        FnSpace::builder()
            .next(|c| CharSpace.next(c))
            .previous(|c| CharSpace.previous(c))
            .included(|start, end, c| CharSpace.included(start, end, c))
            .count(|start, end| CharSpace.count(start, end))
            .subset(|start, count| CharSpace.subset(start, count))
            .build()
            .expect("all operations supplied")
    }

    #[test]
    fn test_bundle_matches_the_named_space_it_wraps() {
        let range = Range::new('a', 'g', char_bundle());
        assert_eq!(range.count(), 7);
        assert!(range.included('c'));
        assert!(!range.included('h'));
        assert_eq!(slice(&range, 2..=4), vec!['c', 'd', 'e']);
        let values: Vec<char> = (&range).into_iter().collect();
        assert_eq!(values, vec!['a', 'b', 'c', 'd', 'e', 'f', 'g']);
    }

    #[test]
    fn test_build_reports_the_first_missing_operation() {
        let err = FnSpace::<char>::builder()
            .next(|c| CharSpace.next(c))
            .build()
            .expect_err("previous, included and count are missing");
        assert_eq!(err.op(), "previous");
    }

    #[test]
    fn test_omitted_subset_falls_back_to_repeated_next() {
        let space = FnSpace::builder()
            .next(|v: i64| v + 10)
            .previous(|v: i64| v - 10)
            .included(|start, end, c: i64| start <= c && c <= end && (c - start) % 10 == 0)
            .count(|start: i64, end: i64| ((end - start) / 10) as usize + 1)
            .build()
            .expect("all required operations supplied");
        assert_eq!(space.subset(0, 4), vec![0, 10, 20, 30]);
        assert_eq!(space.subset(5, 0), Vec::<i64>::new());
    }

    #[test]
    fn test_debug_does_not_expose_the_closures() {
        assert_eq!(format!("{:?}", char_bundle()), "FnSpace");
    }

    #[test]
    fn test_slice_descriptor_is_copyable_over_a_boxed_space() {
        use ordspan_core::slice::Slice;
        let range = Range::new('a', 'g', char_bundle());
        let view = Slice::new(&range);
        let copy = view;
        assert_eq!(view.total(), 7);
        assert_eq!(copy.fetch(2, 3), vec!['c', 'd', 'e']);
    }
}
