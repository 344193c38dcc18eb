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

/// The capability set a domain type must implement to back a range.
///
/// A `ValueSpace` supplies stepping, membership, counting, and random access
/// over a value type `V`. The generic range machinery never inspects domain
/// values itself; every decision is delegated here.
///
/// # Contract
///
/// - `count(start, end)` must equal the number of elements actually produced
///   by repeatedly applying `next` from `start` to `end` inclusive, and must
///   report the same magnitude for the reversed pair of bounds.
/// - `included(start, end, v)` must hold exactly for the values appearing on
///   that same stepped path. This is stronger than "between": a domain with a
///   stride must reject values off its step lattice.
/// - `next`/`previous` carry no contract past the declared bounds; callers
///   are expected to check bounds first, and domain authors may return a
///   sentinel or repeat the input there.
///
/// These obligations are not runtime-checked; the randomized consistency
/// tests in `ordspan-spaces` show how implementers can cover them.
///
/// # Examples
///
/// ```
/// use ordspan_core::space::ValueSpace;
///
/// /// Even integers, stepping by two.
/// struct Evens;
///
/// impl ValueSpace<i64> for Evens {
///     fn next(&self, current: i64) -> i64 {
///         current + 2
///     }
///
///     fn previous(&self, current: i64) -> i64 {
///         current - 2
///     }
///
///     fn included(&self, start: i64, end: i64, candidate: i64) -> bool {
///         candidate >= start && candidate <= end && (candidate - start) % 2 == 0
///     }
///
///     fn count(&self, start: i64, end: i64) -> usize {
///         ((end - start).unsigned_abs() / 2 + 1) as usize
///     }
/// }
///
/// let evens = Evens;
/// assert_eq!(evens.count(0, 10), 6);
/// assert!(evens.included(0, 10, 4));
/// assert!(!evens.included(0, 10, 5));
/// assert_eq!(evens.subset(0, 3), vec![0, 2, 4]);
/// ```
pub trait ValueSpace<V: SpanValue> {
    /// Returns the successor of `current` in the domain's chosen step order.
    fn next(&self, current: V) -> V;

    /// Returns the predecessor of `current`; symmetric to [`next`](Self::next).
    fn previous(&self, current: V) -> V;

    /// Returns whether `candidate` lies on the stepped path from `start` to
    /// `end` inclusive, under this domain's step semantics.
    fn included(&self, start: V, end: V, candidate: V) -> bool;

    /// Returns the number of distinct values visited stepping from `start`
    /// to `end` inclusive, in either direction.
    fn count(&self, start: V, end: V) -> usize;

    /// Returns the first `count` values obtained by repeated
    /// [`next`](Self::next) starting at `start`, inclusive of `start` itself.
    ///
    /// The default implementation steps one value at a time; domains with
    /// random access should override it, which is what makes the slice path
    /// cheaper than a full traversal.
    fn subset(&self, start: V, count: usize) -> Vec<V> {
        let mut out = Vec::with_capacity(count);
        let mut current = start;
        for produced in 0..count {
            if produced > 0 {
                current = self.next(current);
            }
            out.push(current);
        }
        out
    }
}

/// Forwarding impl so many ranges can share one space instance by reference.
impl<V: SpanValue, S: ValueSpace<V> + ?Sized> ValueSpace<V> for &S {
    #[inline]
    fn next(&self, current: V) -> V {
        (**self).next(current)
    }

    #[inline]
    fn previous(&self, current: V) -> V {
        (**self).previous(current)
    }

    #[inline]
    fn included(&self, start: V, end: V, candidate: V) -> bool {
        (**self).included(start, end, candidate)
    }

    #[inline]
    fn count(&self, start: V, end: V) -> usize {
        (**self).count(start, end)
    }

    #[inline]
    fn subset(&self, start: V, count: usize) -> Vec<V> {
        (**self).subset(start, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Decades;

    impl ValueSpace<i32> for Decades {
        fn next(&self, current: i32) -> i32 {
            current + 10
        }

        fn previous(&self, current: i32) -> i32 {
            current - 10
        }

        fn included(&self, start: i32, end: i32, candidate: i32) -> bool {
            candidate >= start && candidate <= end && (candidate - start) % 10 == 0
        }

        fn count(&self, start: i32, end: i32) -> usize {
            ((end - start).unsigned_abs() / 10 + 1) as usize
        }
    }

    #[test]
    fn test_default_subset_steps_from_start_inclusive() {
        let space = Decades;
        assert_eq!(space.subset(30, 4), vec![30, 40, 50, 60]);
    }

    #[test]
    fn test_default_subset_zero_count_is_empty() {
        let space = Decades;
        assert!(space.subset(30, 0).is_empty());
    }

    #[test]
    fn test_reference_forwarding_matches_owned() {
        let space = Decades;
        let by_ref: &Decades = &space;
        assert_eq!(by_ref.count(0, 50), space.count(0, 50));
        assert_eq!(by_ref.next(10), space.next(10));
        assert_eq!(by_ref.previous(10), space.previous(10));
        assert!(by_ref.included(0, 50, 20));
        assert_eq!(by_ref.subset(0, 3), space.subset(0, 3));
    }
}
