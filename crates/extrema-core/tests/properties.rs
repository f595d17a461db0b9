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

use extrema_core::algorithm::{
    accumulator::MinMaxAccumulator, minmax, minmax_by, position_minmax_by,
};
use extrema_core::pair::Pair;
use proptest::prelude::*;

proptest! {
    #[test]
    fn extremes_bound_every_element(items in prop::collection::vec(any::<i32>(), 1..200)) {
        let mm = minmax_by(&items, |a, b| a.cmp(b)).unwrap();
        for e in &items {
            prop_assert!(*mm.first() <= e);
            prop_assert!(*mm.second() >= e);
        }
    }

    #[test]
    fn extremes_are_members(items in prop::collection::vec(any::<i16>(), 1..200)) {
        let (lo, hi) = minmax(items.iter().copied()).unwrap().into_tuple();
        prop_assert!(items.contains(&lo));
        prop_assert!(items.contains(&hi));
    }

    #[test]
    fn agrees_with_std_min_and_max(items in prop::collection::vec(any::<u64>(), 1..200)) {
        let mm = minmax(items.iter().copied()).unwrap();
        prop_assert_eq!(Some(*mm.first()), items.iter().copied().min());
        prop_assert_eq!(Some(*mm.second()), items.iter().copied().max());
    }

    #[test]
    fn reversed_order_swaps_slots_for_distinct_items(
        items in prop::collection::hash_set(any::<i32>(), 1..100)
    ) {
        let items: Vec<i32> = items.into_iter().collect();
        let natural = minmax_by(items.iter().copied(), |a, b| a.cmp(b)).unwrap();
        let reversed = minmax_by(items.iter().copied(), |a, b| b.cmp(a)).unwrap();
        prop_assert_eq!(natural.swap(), reversed);
    }

    #[test]
    fn first_occurrence_wins_on_ties(items in prop::collection::vec(0_u8..4, 1..100)) {
        let pos = position_minmax_by(&items, |a, b| a.cmp(b)).unwrap();
        let (lo, hi) = minmax(items.iter().copied()).unwrap().into_tuple();
        prop_assert_eq!(Some(*pos.first()), items.iter().position(|&x| x == lo));
        prop_assert_eq!(Some(*pos.second()), items.iter().position(|&x| x == hi));
    }

    #[test]
    fn scan_is_idempotent(items in prop::collection::vec(".{0,6}", 0..50)) {
        let once = minmax_by(&items, |a, b| a.cmp(b));
        let twice = minmax_by(&items, |a, b| a.cmp(b));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn accumulator_matches_batch_scan(items in prop::collection::vec(any::<i64>(), 0..100)) {
        let mut acc = MinMaxAccumulator::new(|a: &i64, b: &i64| a.cmp(b));
        for &x in &items {
            acc.push(x);
        }
        prop_assert_eq!(acc.len(), items.len());
        prop_assert_eq!(acc.finish(), minmax(items.iter().copied()));
    }

    #[test]
    fn single_element_is_both_extremes(x in any::<i128>()) {
        prop_assert_eq!(minmax([x]), Some(Pair::new(x, x)));
    }
}

#[test]
fn empty_sequence_has_no_extremes() {
    assert_eq!(minmax(Vec::<i32>::new()), None);
    assert_eq!(position_minmax_by(Vec::<i32>::new(), |a, b| a.cmp(b)), None);
}
