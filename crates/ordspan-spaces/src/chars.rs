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

//! The Unicode scalar-value domain.

use ordspan_core::space::ValueSpace;

/// The rank of `char::MAX` once the surrogate block is collapsed out of the
/// codepoint sequence.
const MAX_RANK: u32 = 0x10F7FF;

/// Width of the surrogate block `U+D800..=U+DFFF`, which `char` excludes.
const SURROGATE_GAP: u32 = 0x800;

/// The domain of Unicode scalar values, stepping one codepoint at a time and
/// skipping the surrogate block the way `char` itself does.
///
/// Ordering is the natural codepoint order; membership follows the ascending
/// direction, so a range written end-before-start still counts its elements
/// but contains none of its interior values.
///
/// # Examples
///
/// ```
/// use ordspan_core::space::ValueSpace;
/// use ordspan_spaces::chars::CharSpace;
///
/// assert_eq!(CharSpace.next('a'), 'b');
/// assert_eq!(CharSpace.previous('b'), 'a');
/// assert_eq!(CharSpace.count('a', 'e'), 5);
/// assert!(CharSpace.included('a', 'e', 'c'));
/// assert_eq!(CharSpace.subset('x', 3), vec!['x', 'y', 'z']);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CharSpace;

/// Maps a scalar value to its position in the gap-free sequence of valid
/// `char`s.
#[inline]
fn rank(value: char) -> u32 {
    let code = value as u32;
    if code >= 0xE000 { code - SURROGATE_GAP } else { code }
}

/// Inverse of [`rank`]; ranks past [`MAX_RANK`] saturate to `char::MAX`.
#[inline]
fn unrank(rank: u32) -> char {
    let code = if rank >= 0xD800 {
        rank + SURROGATE_GAP
    } else {
        rank
    };
    char::from_u32(code).unwrap_or(char::MAX)
}

impl ValueSpace<char> for CharSpace {
    #[inline]
    fn next(&self, current: char) -> char {
        unrank(rank(current).saturating_add(1).min(MAX_RANK))
    }

    #[inline]
    fn previous(&self, current: char) -> char {
        unrank(rank(current).saturating_sub(1))
    }

    #[inline]
    fn included(&self, start: char, end: char, candidate: char) -> bool {
        start <= candidate && candidate <= end
    }

    #[inline]
    fn count(&self, start: char, end: char) -> usize {
        rank(start).abs_diff(rank(end)) as usize + 1
    }

    fn subset(&self, start: char, count: usize) -> Vec<char> {
        let base = rank(start) as u64;
        (0..count as u64)
            .map(|offset| unrank((base + offset).min(MAX_RANK as u64) as u32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_previous_are_inverses() {
        assert_eq!(CharSpace.next('a'), 'b');
        assert_eq!(CharSpace.previous(CharSpace.next('m')), 'm');
    }

    #[test]
    fn test_stepping_skips_the_surrogate_block() {
        assert_eq!(CharSpace.next('\u{D7FF}'), '\u{E000}');
        assert_eq!(CharSpace.previous('\u{E000}'), '\u{D7FF}');
    }

    #[test]
    fn test_next_saturates_at_char_max() {
        assert_eq!(CharSpace.next(char::MAX), char::MAX);
    }

    #[test]
    fn test_previous_saturates_at_nul() {
        assert_eq!(CharSpace.previous('\0'), '\0');
    }

    #[test]
    fn test_count_is_inclusive_of_both_bounds() {
        assert_eq!(CharSpace.count('a', 'e'), 5);
        assert_eq!(CharSpace.count('q', 'q'), 1);
    }

    #[test]
    fn test_count_ignores_direction() {
        assert_eq!(CharSpace.count('z', 'a'), 26);
    }

    #[test]
    fn test_count_spans_the_surrogate_gap_without_counting_it() {
        assert_eq!(CharSpace.count('\u{D7FF}', '\u{E000}'), 2);
    }

    #[test]
    fn test_included_follows_the_ascending_direction() {
        assert!(CharSpace.included('a', 'e', 'c'));
        assert!(CharSpace.included('a', 'e', 'a'));
        assert!(CharSpace.included('a', 'e', 'e'));
        assert!(!CharSpace.included('a', 'e', 'f'));
        assert!(!CharSpace.included('z', 'a', 'b'));
    }

    #[test]
    fn test_subset_walks_forward_from_the_seed() {
        assert_eq!(CharSpace.subset('x', 3), vec!['x', 'y', 'z']);
        assert_eq!(CharSpace.subset('a', 0), Vec::<char>::new());
    }

    #[test]
    fn test_subset_matches_repeated_next() {
        let arithmetic = CharSpace.subset('\u{D7FD}', 6);
        let mut stepped = Vec::new();
        let mut current = '\u{D7FD}';
        for _ in 0..6 {
            stepped.push(current);
            current = CharSpace.next(current);
        }
        assert_eq!(arithmetic, stepped);
    }

    mod protocol {
        use super::*;
        use ordspan_core::fold::{Folded, Step, fold};
        use ordspan_core::range::Range;
        use ordspan_core::slice::slice;

        #[test]
        fn test_prepend_fold_reverses_the_letter_range() {
            let range = Range::new('a', 'g', CharSpace);
            let reversed = fold(range, Vec::new(), |value, mut acc| {
                acc.insert(0, value);
                Step::Continue(acc)
            })
            .into_acc();
            assert_eq!(reversed, vec!['g', 'f', 'e', 'd', 'c', 'b', 'a']);
            assert_eq!(range.count(), 7);
            assert!(range.included('d'));
            assert!(!range.included('h'));
        }

        #[test]
        fn test_descending_range_counts_without_membership() {
            let range = Range::new('z', 'a', CharSpace);
            assert_eq!(range.count(), 26);
            assert!(!range.included('b'));
        }

        #[test]
        fn test_slice_scenarios_over_letters() {
            let range = Range::new('a', 'g', CharSpace);
            assert_eq!(slice(&range, 2..=50), vec!['c', 'd', 'e', 'f', 'g']);
            assert_eq!(slice(&range, -1..=-1), vec!['g']);
        }

        #[test]
        fn test_suspend_and_resume_over_letters() {
            let range = Range::new('a', 'g', CharSpace);
            let outcome = fold(range, Vec::new(), |value, mut acc| {
                acc.push(value);
                if value == 'c' {
                    Step::Suspend(acc)
                } else {
                    Step::Continue(acc)
                }
            });
            let (acc, cont) = match outcome {
                Folded::Suspended(acc, cont) => (acc, cont),
                _ => panic!("expected a suspended fold"),
            };
            assert_eq!(acc, vec!['a', 'b', 'c']);
            let finished = cont.resume(acc).into_acc();
            assert_eq!(finished, vec!['a', 'b', 'c', 'd', 'e', 'f', 'g']);
        }

        #[test]
        fn test_descending_fold_terminates_at_domain_saturation() {
            // 'a' is unreachable stepping up from 'z'; traversal must stop
            // once the cursor saturates at char::MAX.
            let outcome = Range::new('z', 'a', CharSpace)
                .fold(0usize, |_, visited| Step::Continue(visited + 1));
            match outcome {
                Folded::Done(visited) => {
                    assert_eq!(visited, (MAX_RANK - rank('z')) as usize + 1);
                }
                _ => panic!("expected a completed fold"),
            }
        }
    }
}
