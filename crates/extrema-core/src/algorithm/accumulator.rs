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

//! # Incremental Min/Max
//!
//! `MinMaxAccumulator` keeps the running minimum and maximum of the elements
//! pushed into it so far. It is the state machine behind every scan in the
//! parent module: the first element seeds both candidates, and each later
//! element is tested against the current minimum and, independently, against
//! the current maximum.
//!
//! Only strict comparisons displace a candidate, so among comparison-equal
//! elements the one pushed first is kept for both extremes.
//!
//! ## Usage
//!
//! ```rust
//! use extrema_core::algorithm::accumulator::MinMaxAccumulator;
//!
//! let mut acc = MinMaxAccumulator::new(|a: &i32, b: &i32| a.cmp(b));
//! for reading in [12, -3, 40, 7] {
//!     acc.push(reading);
//! }
//! let extremes = acc.finish().unwrap();
//! assert_eq!(extremes.into_tuple(), (-3, 40));
//! ```

use crate::pair::Pair;
use std::cmp::Ordering;

/// Running minimum and maximum under a caller-supplied ordering.
///
/// `T: Clone` is needed because the first element occupies both slots.
/// For borrowed inputs (`T = &U`) the clone is a reference copy.
#[derive(Clone)]
pub struct MinMaxAccumulator<T, F> {
    compare: F,
    extremes: Option<(T, T)>,
    len: usize,
}

impl<T, F> MinMaxAccumulator<T, F>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    /// Creates an empty accumulator using `compare` as the ordering.
    #[inline]
    pub fn new(compare: F) -> Self {
        Self {
            compare,
            extremes: None,
            len: 0,
        }
    }

    /// Feeds one element into the accumulator.
    ///
    /// Both tests run for every element after the first; neither short-circuits
    /// the other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extrema_core::algorithm::accumulator::MinMaxAccumulator;
    ///
    /// let mut acc = MinMaxAccumulator::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// acc.push("had");
    /// acc.push("lamb");
    /// acc.push("Mary"); // same length as "lamb", does not replace it
    /// let p = acc.current().unwrap();
    /// assert_eq!((**p.first(), **p.second()), ("had", "lamb"));
    /// ```
    pub fn push(&mut self, item: T) {
        self.len += 1;
        let Some((min, max)) = self.extremes.as_mut() else {
            self.extremes = Some((item.clone(), item));
            return;
        };

        let below_min = (self.compare)(&item, &*min) == Ordering::Less;
        let above_max = (self.compare)(&item, &*max) == Ordering::Greater;

        match (below_min, above_max) {
            (true, true) => {
                // Only reachable with an inconsistent ordering.
                *max = item.clone();
                *min = item;
            }
            (true, false) => *min = item,
            (false, true) => *max = item,
            (false, false) => {}
        }
    }

    /// Number of elements pushed so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been pushed yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrows the current extremes as `(min, max)`, or `None` while empty.
    #[inline]
    pub fn current(&self) -> Option<Pair<&T>> {
        self.extremes
            .as_ref()
            .map(|(min, max)| Pair::new(min, max))
    }

    /// Consumes the accumulator and returns `(min, max)`, or `None` if no
    /// element was ever pushed.
    #[inline]
    pub fn finish(self) -> Option<Pair<T>> {
        self.extremes.map(Pair::from)
    }
}

impl<T, F> Extend<T> for MinMaxAccumulator<T, F>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, F> std::fmt::Debug for MinMaxAccumulator<T, F>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinMaxAccumulator")
            .field("extremes", &self.extremes)
            .field("len", &self.len)
            .finish()
    }
}
