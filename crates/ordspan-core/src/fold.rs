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

//! Cooperative external iteration over ranges.
//!
//! The consumer, not the range, decides whether traversal continues: the step
//! closure answers every element with a [`Step`] signal, and the driver
//! translates that into a [`Folded`] outcome. Suspension is not a scheduling
//! primitive but a plain value: a [`Resume`] continuation capturing the
//! remaining range and the step closure, which the caller may resume at will
//! or simply drop.

use crate::SpanValue;
use crate::range::Range;
use crate::space::ValueSpace;

/// The signal a step closure returns for each visited element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<A> {
    /// Keep the accumulator and move on to the next element.
    Continue(A),
    /// Pause traversal, handing the caller a resumable continuation.
    Suspend(A),
    /// Stop immediately; remaining elements are never visited.
    Halt(A),
}

/// The outcome of driving a fold.
pub enum Folded<A, V, S, F> {
    /// Traversal ran to completion; the end value was delivered exactly once.
    Done(A),
    /// Traversal paused; resume through the captured continuation or drop it.
    Suspended(A, Resume<V, S, F>),
    /// Traversal was cut short by [`Step::Halt`].
    Halted(A),
}

impl<A, V, S, F> Folded<A, V, S, F> {
    /// Extracts the accumulator, discarding any continuation.
    #[inline]
    pub fn into_acc(self) -> A {
        match self {
            Folded::Done(acc) => acc,
            Folded::Suspended(acc, _) => acc,
            Folded::Halted(acc) => acc,
        }
    }

    /// Returns the accumulator when the fold ran to completion.
    #[inline]
    pub fn done(self) -> Option<A> {
        match self {
            Folded::Done(acc) => Some(acc),
            _ => None,
        }
    }
}

/// A paused traversal: the range positioned past the element that triggered
/// the suspension, plus the original step closure.
///
/// When the suspension happened on the end element there is nothing left, and
/// resuming completes immediately with [`Folded::Done`].
pub struct Resume<V, S, F> {
    rest: Option<Range<V, S>>,
    step: F,
}

impl<V, S, F> Resume<V, S, F> {
    /// Continues the paused traversal with a (possibly adjusted) accumulator.
    pub fn resume<A>(self, acc: A) -> Folded<A, V, S, F>
    where
        V: SpanValue,
        S: ValueSpace<V>,
        F: FnMut(V, A) -> Step<A>,
    {
        match self.rest {
            Some(range) => drive(range, acc, self.step),
            None => Folded::Done(acc),
        }
    }
}

/// Folds over every value from the range's cursor to its end bound.
///
/// The step closure receives each element together with the accumulator and
/// answers with a [`Step`] signal. The end value is always delivered exactly
/// once, as the last element; a range with `start == end` delivers exactly
/// one element in total.
///
/// Domain failures are not caught here; they propagate to the caller
/// untouched. A domain whose `next` stops making progress before the end
/// bound is ever reached — the saturating past-the-end behavior the
/// [`ValueSpace`] contract permits — ends the fold at the stalled element
/// with [`Folded::Done`] instead of looping.
///
/// # Examples
///
/// ```
/// use ordspan_core::fold::{Folded, Step, fold};
/// use ordspan_core::range::Range;
/// use ordspan_spaces::chars::CharSpace;
///
/// let range = Range::new('a', 'g', CharSpace);
/// let outcome = fold(range, Vec::new(), |value, mut acc| {
///     acc.insert(0, value);
///     Step::Continue(acc)
/// });
/// assert_eq!(
///     outcome.into_acc(),
///     vec!['g', 'f', 'e', 'd', 'c', 'b', 'a'],
/// );
///
/// // Halting keeps the elements seen so far and visits nothing else.
/// let range = Range::new('a', 'g', CharSpace);
/// let outcome = fold(range, 0usize, |value, seen| {
///     if value == 'c' {
///         Step::Halt(seen + 1)
///     } else {
///         Step::Continue(seen + 1)
///     }
/// });
/// assert!(matches!(outcome, Folded::Halted(3)));
/// ```
pub fn fold<V, S, F, A>(range: Range<V, S>, init: A, step: F) -> Folded<A, V, S, F>
where
    V: SpanValue,
    S: ValueSpace<V>,
    F: FnMut(V, A) -> Step<A>,
{
    drive(range, init, step)
}

impl<V, S> Range<V, S>
where
    V: SpanValue,
    S: ValueSpace<V>,
{
    /// Method form of [`fold`], starting at this range's cursor.
    #[inline]
    pub fn fold<A, F>(self, init: A, step: F) -> Folded<A, V, S, F>
    where
        F: FnMut(V, A) -> Step<A>,
    {
        drive(self, init, step)
    }
}

fn drive<V, S, F, A>(mut range: Range<V, S>, mut acc: A, mut step: F) -> Folded<A, V, S, F>
where
    V: SpanValue,
    S: ValueSpace<V>,
    F: FnMut(V, A) -> Step<A>,
{
    loop {
        match step(range.current(), acc) {
            Step::Continue(next) => {
                if range.at_end() {
                    return Folded::Done(next);
                }
                let before = range.current();
                let stepped = range.advance();
                // A stalled cursor means the domain saturated before the end
                // bound was ever reachable; the traversal is over.
                if stepped.current() == before {
                    return Folded::Done(next);
                }
                acc = next;
                range = stepped;
            }
            Step::Suspend(next) => {
                let rest = if range.at_end() {
                    None
                } else {
                    let before = range.current();
                    let stepped = range.advance();
                    (stepped.current() != before).then_some(stepped)
                };
                return Folded::Suspended(next, Resume { rest, step });
            }
            Step::Halt(next) => return Folded::Halted(next),
        }
    }
}
