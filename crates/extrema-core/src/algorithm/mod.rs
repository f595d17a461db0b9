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

//! # Single-Pass Extremes
//!
//! Functions that compute the minimum and maximum of a sequence in one linear
//! pass and return them as a `Pair` with `first = min` and `second = max`.
//!
//! ## Tie-breaking
//!
//! Candidates are only displaced by elements that compare *strictly* less
//! (minimum) or *strictly* greater (maximum). Among comparison-equal
//! elements the first one encountered is kept, for both extremes. This
//! differs from `Iterator::max_by`, which returns the last maximum.
//!
//! ## Empty input
//!
//! An empty sequence has no extremes. The scans return `None`;
//! `try_minmax_by` returns `EmptyInputError` for callers using `?`.
//!
//! ## Submodules
//!
//! - `accumulator`: `MinMaxAccumulator`, the incremental form of the scan.

pub mod accumulator;

use crate::{
    algorithm::accumulator::MinMaxAccumulator, error::EmptyInputError, pair::Pair,
    utils::iter::MaybeIter,
};
use std::cmp::Ordering;

/// Returns the minimum and maximum of `items` under `compare`, or `None` if
/// `items` is empty.
///
/// Both candidates start at the first element. Every later element is tested
/// against the minimum and, independently, against the maximum. The first
/// occurrence wins among equal elements.
///
/// For a single element the result holds that element twice.
///
/// # Examples
///
/// ```rust
/// # use extrema_core::algorithm::minmax_by;
///
/// let words = ["Mary", "had", "a", "little", "lamb"];
/// let mm = minmax_by(words, |a, b| a.cmp(b)).unwrap();
/// assert_eq!(*mm.first(), "Mary");
/// assert_eq!(*mm.second(), "little");
///
/// let none: Option<_> = minmax_by(Vec::<i32>::new(), |a, b| a.cmp(b));
/// assert!(none.is_none());
/// ```
#[inline]
pub fn minmax_by<I, F>(items: I, compare: F) -> Option<Pair<I::Item>>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let mut acc = MinMaxAccumulator::new(compare);
    acc.extend(items);
    acc.finish()
}

/// Returns the minimum and maximum of `items` under their natural order.
///
/// # Examples
///
/// ```rust
/// # use extrema_core::algorithm::minmax;
/// # use extrema_core::pair::Pair;
///
/// assert_eq!(minmax([3, 9, -1, 4]), Some(Pair::new(-1, 9)));
/// ```
#[inline]
pub fn minmax<I>(items: I) -> Option<Pair<I::Item>>
where
    I: IntoIterator,
    I::Item: Ord + Clone,
{
    minmax_by(items, Ord::cmp)
}

/// Returns the elements with the smallest and largest `key`.
///
/// `key` is evaluated exactly once per element. Each key travels with its
/// element through the scan, so `K: Clone` is needed to seed both slots.
///
/// # Examples
///
/// ```rust
/// # use extrema_core::algorithm::minmax_by_key;
///
/// let words = ["Mary", "had", "a", "little", "lamb"];
/// let mm = minmax_by_key(words, |w| w.len()).unwrap();
/// assert_eq!(mm.into_tuple(), ("a", "little"));
/// ```
#[inline]
pub fn minmax_by_key<I, K, F>(items: I, mut key: F) -> Option<Pair<I::Item>>
where
    I: IntoIterator,
    I::Item: Clone,
    K: Ord + Clone,
    F: FnMut(&I::Item) -> K,
{
    let keyed = items.into_iter().map(|item| (key(&item), item));
    minmax_by(keyed, |a, b| a.0.cmp(&b.0)).map(|extremes| extremes.map(|(_, item)| item))
}

/// Like [`minmax_by`], but for a sequence that may be absent.
///
/// A missing sequence has no extremes, exactly like an empty one.
///
/// # Examples
///
/// ```rust
/// # use extrema_core::algorithm::minmax_opt_by;
///
/// let missing: Option<Vec<u32>> = None;
/// assert!(minmax_opt_by(missing, |a, b| a.cmp(b)).is_none());
///
/// let present = Some(vec![4_u32, 2, 8]);
/// let mm = minmax_opt_by(present, |a, b| a.cmp(b)).unwrap();
/// assert_eq!(mm.into_tuple(), (2, 8));
/// ```
#[inline]
pub fn minmax_opt_by<I, F>(items: Option<I>, compare: F) -> Option<Pair<I::Item>>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    minmax_by(MaybeIter::new(items.map(IntoIterator::into_iter)), compare)
}

/// Like [`minmax_by`], but reports an empty sequence as an error.
///
/// # Errors
///
/// Returns [`EmptyInputError`] if `items` yields no elements.
///
/// # Examples
///
/// ```rust
/// # use extrema_core::algorithm::try_minmax_by;
/// # use extrema_core::error::EmptyInputError;
///
/// fn spread(readings: &[i64]) -> Result<i64, EmptyInputError> {
///     let (lo, hi) = try_minmax_by(readings, |a, b| a.cmp(b))?.into_tuple();
///     Ok(hi - lo)
/// }
///
/// assert_eq!(spread(&[3, 11, 5]), Ok(8));
/// assert_eq!(spread(&[]), Err(EmptyInputError));
/// ```
pub fn try_minmax_by<I, F>(items: I, compare: F) -> Result<Pair<I::Item>, EmptyInputError>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    minmax_by(items, compare).ok_or_else(|| {
        log::trace!("extremes requested for an empty sequence");
        EmptyInputError
    })
}

/// Returns the zero-based positions of the minimum and maximum of `items`.
///
/// Uses the same tie-break as [`minmax_by`]: the position of the first
/// occurrence is reported for each extreme.
///
/// # Examples
///
/// ```rust
/// # use extrema_core::algorithm::position_minmax_by;
/// # use extrema_core::pair::Pair;
///
/// let words = ["b", "a", "a", "c", "c"];
/// let pos = position_minmax_by(words, |a, b| a.cmp(b));
/// assert_eq!(pos, Some(Pair::new(1, 3)));
/// ```
pub fn position_minmax_by<I, F>(items: I, mut compare: F) -> Option<Pair<usize>>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    // Elements are compared by reference, so no `Clone` bound is needed here.
    let items: Vec<I::Item> = items.into_iter().collect();
    let indexed = items.iter().enumerate();
    let extremes = minmax_by(indexed, |&(_, a), &(_, b)| compare(a, b))?;
    Some(extremes.map(|(index, _)| index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

    /// A value whose ordering ignores `tag`, so equal-ranked values can be
    /// told apart after the scan.
    #[derive(Debug, Clone, Copy)]
    struct Ranked {
        rank: u32,
        tag: char,
    }

    fn by_rank(a: &Ranked, b: &Ranked) -> Ordering {
        a.rank.cmp(&b.rank)
    }

    fn r(rank: u32, tag: char) -> Ranked {
        Ranked { rank, tag }
    }

    #[test]
    fn test_minmax_by_empty_is_none() {
        let empty: [i32; 0] = [];
        assert!(minmax_by(empty, |a, b| a.cmp(b)).is_none());
        assert!(minmax(Vec::<String>::new()).is_none());
    }

    #[test]
    fn test_minmax_by_single_element() {
        let mm = minmax_by([String::from("x")], |a, b| a.cmp(b)).unwrap();
        assert_eq!(mm.first(), "x");
        assert_eq!(mm.second(), "x");
    }

    #[test]
    fn test_minmax_by_mary_had_a_little_lamb() {
        let words = ["Mary", "had", "a", "little", "lamb"];
        let mm = minmax_by(words, |a, b| a.cmp(b)).unwrap();
        // Uppercase sorts before lowercase in byte order.
        assert_eq!(mm.into_tuple(), ("Mary", "little"));
    }

    #[test]
    fn test_minmax_by_tie_break_keeps_first_reference() {
        let words = [
            String::from("b"),
            String::from("a"),
            String::from("a"),
            String::from("c"),
        ];
        let mm = minmax_by(words.iter(), |a, b| a.cmp(b)).unwrap();
        assert_eq!(mm.first().as_str(), "a");
        assert_eq!(mm.second().as_str(), "c");
        assert!(std::ptr::eq(*mm.first(), &words[1]));
        assert!(!std::ptr::eq(*mm.first(), &words[2]));
        assert!(std::ptr::eq(*mm.second(), &words[3]));
    }

    #[test]
    fn test_minmax_by_tie_break_for_both_extremes() {
        let data = [
            r(4, 'a'),
            r(4, 'b'),
            r(8, 'c'),
            r(22, 'e'),
            r(8, 'd'),
            r(22, 'f'),
        ];
        let mm = minmax_by(data, by_rank).unwrap();
        assert_eq!(mm.first().tag, 'a');
        assert_eq!(mm.second().tag, 'e');
    }

    #[test]
    fn test_minmax_by_all_equal_returns_first_twice() {
        let data = [r(1, 'x'), r(1, 'y'), r(1, 'z')];
        let mm = minmax_by(data, by_rank).unwrap();
        assert_eq!((mm.first().tag, mm.second().tag), ('x', 'x'));
    }

    #[test]
    fn test_minmax_by_custom_order_reverses_slots() {
        let mm = minmax_by([1, 5, 3], |a, b| b.cmp(a)).unwrap();
        assert_eq!(mm, Pair::new(5, 1));
    }

    #[test]
    fn test_minmax_by_does_not_mutate_borrowed_input() {
        let data = vec![9, 2, 7];
        let before = data.clone();
        let _ = minmax_by(&data, |a, b| a.cmp(b));
        assert_eq!(data, before);
    }

    #[test]
    fn test_minmax_by_is_idempotent() {
        let data = ["lamb", "Mary", "a"];
        let once = minmax_by(&data, |a, b| a.cmp(b));
        let twice = minmax_by(&data, |a, b| a.cmp(b));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_minmax_by_permutation_invariant_values() {
        let mut data: Vec<i32> = (0..64).map(|x| x * 7 - 100).collect();
        let expected = Pair::new(-100, 63 * 7 - 100);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            data.shuffle(&mut rng);
            assert_eq!(minmax(data.iter().copied()), Some(expected));
        }
    }

    #[test]
    fn test_minmax_matches_sorted_ends() {
        let data = [5, -3, 12, 0, 12, -3, 7];
        let mut sorted = data;
        sorted.sort();
        let mm = minmax(data).unwrap();
        assert_eq!(*mm.first(), sorted[0]);
        assert_eq!(*mm.second(), sorted[sorted.len() - 1]);
    }

    #[test]
    fn test_minmax_by_key_uses_first_on_equal_keys() {
        let words = ["had", "Mary", "lamb", "a", "little", "ewe"];
        let mm = minmax_by_key(words, |w| w.len()).unwrap();
        assert_eq!(mm.into_tuple(), ("a", "little"));

        let mm = minmax_by_key(["Mary", "lamb"], |w| w.len()).unwrap();
        assert_eq!(mm.into_tuple(), ("Mary", "Mary"));
    }

    #[test]
    fn test_minmax_by_key_evaluates_key_once_per_element() {
        let mut calls = 0;
        let mm = minmax_by_key([3, 1, 2], |x: &i32| {
            calls += 1;
            *x
        })
        .unwrap();
        assert_eq!(mm.into_tuple(), (1, 3));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_minmax_opt_by_absent_and_present() {
        let absent: Option<Vec<i32>> = None;
        assert!(minmax_opt_by(absent, |a, b| a.cmp(b)).is_none());

        let empty: Option<Vec<i32>> = Some(Vec::new());
        assert!(minmax_opt_by(empty, |a, b| a.cmp(b)).is_none());

        let present = Some(["c", "a", "b"]);
        let mm = minmax_opt_by(present, |a, b| a.cmp(b)).unwrap();
        assert_eq!(mm.into_tuple(), ("a", "c"));
    }

    #[test]
    fn test_try_minmax_by() {
        assert_eq!(
            try_minmax_by(Vec::<u8>::new(), |a, b| a.cmp(b)),
            Err(EmptyInputError)
        );
        assert_eq!(try_minmax_by([2_u8, 1], |a, b| a.cmp(b)), Ok(Pair::new(1, 2)));
    }

    #[test]
    fn test_position_minmax_by() {
        assert_eq!(position_minmax_by(Vec::<i32>::new(), |a, b| a.cmp(b)), None);
        assert_eq!(position_minmax_by([42], |a, b| a.cmp(b)), Some(Pair::new(0, 0)));

        let words = ["Mary", "had", "a", "little", "lamb"];
        assert_eq!(
            position_minmax_by(words, |a, b| a.cmp(b)),
            Some(Pair::new(0, 3))
        );
    }

    #[test]
    fn test_position_minmax_by_agrees_with_minmax_by() {
        let data = [r(3, 'a'), r(1, 'b'), r(9, 'c'), r(1, 'd'), r(9, 'e')];
        let values = minmax_by(data, by_rank).unwrap();
        let positions = position_minmax_by(data, by_rank).unwrap();
        assert_eq!(data[*positions.first()].tag, values.first().tag);
        assert_eq!(data[*positions.second()].tag, values.second().tag);
        assert_eq!(positions, Pair::new(1, 2));
    }

    #[test]
    fn test_position_minmax_by_accepts_non_clone_items() {
        struct Opaque(i32);
        let items = vec![Opaque(5), Opaque(-2), Opaque(11)];
        let pos = position_minmax_by(items, |a, b| a.0.cmp(&b.0));
        assert_eq!(pos, Some(Pair::new(1, 2)));
    }
}
