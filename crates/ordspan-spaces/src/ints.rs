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

//! Signed-integer domains stepping by a fixed stride.

use crate::err::ZeroStrideError;
use num_traits::{PrimInt, Signed};
use ordspan_core::space::ValueSpace;
use std::fmt::Debug;

/// A signed-integer domain whose elements lie on the lattice
/// `start + k * stride`.
///
/// The stride fixes the forward direction: a negative stride makes `next`
/// step downward and `previous` step upward. Membership follows that
/// direction and demands lattice alignment, while `count` only measures the
/// magnitude of the span, so it is the same whichever way the bounds are
/// written.
///
/// Steps that would leave the representable range of `T` stay put, matching
/// the saturating behavior ranges rely on at their bounds.
///
/// # Examples
///
/// ```
/// use ordspan_core::space::ValueSpace;
/// use ordspan_spaces::ints::StrideSpace;
///
/// let threes = StrideSpace::new(3i64)?;
/// assert_eq!(threes.next(0), 3);
/// assert_eq!(threes.count(0, 12), 5);
/// assert!(threes.included(0, 12, 9));
/// assert!(!threes.included(0, 12, 10));
///
/// let down = StrideSpace::new(-2i32)?;
/// assert_eq!(down.next(10), 8);
/// assert!(down.included(10, 0, 4));
/// # Ok::<(), ordspan_spaces::err::ZeroStrideError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrideSpace<T> {
    stride: T,
}

impl<T> StrideSpace<T>
where
    T: PrimInt + Signed,
{
    /// Creates a space stepping by `stride`.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroStrideError`] if `stride` is zero, since a zero stride
    /// can never make progress.
    #[inline]
    pub fn new(stride: T) -> Result<Self, ZeroStrideError> {
        if stride.is_zero() {
            return Err(ZeroStrideError);
        }
        Ok(Self { stride })
    }

    /// The space stepping by one, i.e. the ordinary consecutive integers.
    #[inline]
    pub fn unit() -> Self {
        Self { stride: T::one() }
    }

    /// Returns the stride of this space.
    #[inline]
    pub fn stride(&self) -> T {
        self.stride
    }
}

/// Widens any primitive signed integer into `i128` for overflow-free
/// lattice arithmetic.
#[inline]
fn widen<T: PrimInt + Signed>(value: T) -> i128 {
    value.to_i128().expect("primitive signed integer fits in i128")
}

impl<T> ValueSpace<T> for StrideSpace<T>
where
    T: PrimInt + Signed + Debug,
{
    #[inline]
    fn next(&self, current: T) -> T {
        T::from(widen(current) + widen(self.stride)).unwrap_or(current)
    }

    #[inline]
    fn previous(&self, current: T) -> T {
        T::from(widen(current) - widen(self.stride)).unwrap_or(current)
    }

    fn included(&self, start: T, end: T, candidate: T) -> bool {
        let start = widen(start);
        let end = widen(end);
        let candidate = widen(candidate);
        let stride = widen(self.stride);
        let in_bounds = if stride > 0 {
            start <= candidate && candidate <= end
        } else {
            end <= candidate && candidate <= start
        };
        in_bounds && (candidate - start) % stride == 0
    }

    fn count(&self, start: T, end: T) -> usize {
        let span = (widen(end) - widen(start)).unsigned_abs();
        let steps = span / widen(self.stride).unsigned_abs();
        usize::try_from(steps).unwrap_or(usize::MAX).saturating_add(1)
    }

    fn subset(&self, start: T, count: usize) -> Vec<T> {
        let base = widen(start);
        let stride = widen(self.stride);
        let mut current = start;
        let mut out = Vec::with_capacity(count);
        for offset in 0..count as i128 {
            current = T::from(base + offset * stride).unwrap_or(current);
            out.push(current);
        }
        out
    }
}
