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
use crate::range::Range;
use crate::space::ValueSpace;

/// An iterator over the remaining values of a range, from its cursor to its
/// end bound inclusive.
///
/// A domain whose `next` stops making progress before the end bound is ever
/// reached ends the iteration at the stalled element instead of looping.
///
/// # Examples
///
/// ```
/// use ordspan_core::range::Range;
/// use ordspan_spaces::chars::CharSpace;
///
/// let letters: Vec<char> = Range::new('a', 'e', CharSpace).into_iter().collect();
/// assert_eq!(letters, vec!['a', 'b', 'c', 'd', 'e']);
///
/// let range = Range::new('a', 'e', CharSpace);
/// let skipped: Vec<char> = (&range).into_iter().skip(2).collect();
/// assert_eq!(skipped, vec!['c', 'd', 'e']);
/// ```
#[derive(Debug, Clone)]
pub struct RangeIter<V, S> {
    rest: Option<Range<V, S>>,
}

impl<V, S> Iterator for RangeIter<V, S>
where
    V: SpanValue,
    S: ValueSpace<V>,
{
    type Item = V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let range = self.rest.take()?;
        let value = range.current();
        if !range.at_end() {
            let stepped = range.advance();
            // A stalled cursor means the domain saturated before the end
            // bound was ever reachable; iteration is over.
            if stepped.current() != value {
                self.rest = Some(stepped);
            }
        }
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .rest
            .as_ref()
            .map_or(0, |range| range.space().count(range.current(), range.end()));
        (remaining, Some(remaining))
    }
}

impl<V, S> ExactSizeIterator for RangeIter<V, S>
where
    V: SpanValue,
    S: ValueSpace<V>,
{
}

impl<V, S> std::iter::FusedIterator for RangeIter<V, S>
where
    V: SpanValue,
    S: ValueSpace<V>,
{
}

impl<V, S> IntoIterator for Range<V, S>
where
    V: SpanValue,
    S: ValueSpace<V>,
{
    type Item = V;
    type IntoIter = RangeIter<V, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        RangeIter { rest: Some(self) }
    }
}

impl<'r, V, S> IntoIterator for &'r Range<V, S>
where
    V: SpanValue,
    S: ValueSpace<V>,
{
    type Item = V;
    type IntoIter = RangeIter<V, &'r S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        RangeIter {
            rest: Some(self.by_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Letters;

    impl ValueSpace<char> for Letters {
        fn next(&self, current: char) -> char {
            if current >= 'z' {
                'z'
            } else {
                (current as u8 + 1) as char
            }
        }

        fn previous(&self, current: char) -> char {
            if current <= 'a' {
                'a'
            } else {
                (current as u8 - 1) as char
            }
        }

        fn included(&self, start: char, end: char, candidate: char) -> bool {
            start <= candidate && candidate <= end
        }

        fn count(&self, start: char, end: char) -> usize {
            (start as u32).abs_diff(end as u32) as usize + 1
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Steps(i64);

    impl ValueSpace<i64> for Steps {
        fn next(&self, current: i64) -> i64 {
            current + self.0
        }

        fn previous(&self, current: i64) -> i64 {
            current - self.0
        }

        fn included(&self, start: i64, end: i64, candidate: i64) -> bool {
            start <= candidate && candidate <= end && (candidate - start) % self.0 == 0
        }

        fn count(&self, start: i64, end: i64) -> usize {
            ((end - start).unsigned_abs() / self.0.unsigned_abs()) as usize + 1
        }
    }

    #[test]
    fn test_iterator_yields_bounds_inclusive() {
        let values: Vec<char> = Range::new('a', 'd', Letters).into_iter().collect();
        assert_eq!(values, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_iterator_over_single_element_range() {
        let values: Vec<char> = Range::new('z', 'z', Letters).into_iter().collect();
        assert_eq!(values, vec!['z']);
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut iter = Range::new('a', 'b', Letters).into_iter();
        assert_eq!(iter.next(), Some('a'));
        assert_eq!(iter.next(), Some('b'));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iterator_len_tracks_remaining() {
        let mut iter = Range::new('a', 'e', Letters).into_iter();
        assert_eq!(iter.len(), 5);
        iter.next();
        assert_eq!(iter.len(), 4);
        for _ in iter.by_ref() {}
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_iterator_starts_at_cursor() {
        let range = Range::new('a', 'e', Letters).advance();
        let values: Vec<char> = range.into_iter().collect();
        assert_eq!(values, vec!['b', 'c', 'd', 'e']);
    }

    #[test]
    fn test_borrowed_iteration_leaves_range_usable() {
        let range = Range::new(0i64, 20, Steps(5));
        let sum: i64 = (&range).into_iter().sum();
        assert_eq!(sum, 0 + 5 + 10 + 15 + 20);
        assert_eq!(range.count(), 5);
    }

    #[test]
    fn test_iterator_composes_with_std_adapters() {
        let evens: Vec<i64> = Range::new(0i64, 10, Steps(1))
            .into_iter()
            .filter(|v| v % 2 == 0)
            .collect();
        assert_eq!(evens, vec![0, 2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_iteration_terminates_when_next_stops_progressing() {
        // 'a' is unreachable stepping up from 'z'; the saturated cursor ends
        // the iteration instead of spinning on it.
        let values: Vec<char> = Range::new('z', 'a', Letters).into_iter().collect();
        assert_eq!(values, vec!['z']);
    }
}
