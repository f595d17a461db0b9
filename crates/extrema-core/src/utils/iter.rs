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

//! # Possibly-Absent Sequences
//!
//! A sequence handed to a scan may be missing altogether rather than merely
//! empty. `MaybeIter<I>` folds both situations into one iterator: an absent
//! source yields nothing, a present one forwards every element untouched.
//!
//! Scans built on top of it (see `algorithm::minmax_opt_by`) therefore need a
//! single "no elements" path instead of separate `None` and empty checks.
//!
//! ## Usage
//!
//! ```rust
//! use extrema_core::utils::iter::MaybeIter;
//!
//! let words = MaybeIter::present(["had", "a"].into_iter());
//! let missing: MaybeIter<std::array::IntoIter<&str, 2>> = MaybeIter::absent();
//!
//! assert_eq!(words.collect::<Vec<_>>(), ["had", "a"]);
//! assert!(missing.is_absent());
//! ```

use std::iter::FusedIterator;

/// An iterator over a source that may not exist.
///
/// # Examples
///
/// ```rust
/// # use extrema_core::utils::iter::MaybeIter;
///
/// let source: Option<Vec<u8>> = None;
/// let mut it = MaybeIter::new(source.map(Vec::into_iter));
/// assert_eq!(it.next(), None);
/// assert_eq!(it.len(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MaybeIter<I> {
    inner: Option<I>,
}

impl<I> MaybeIter<I> {
    /// Wraps an optional iterator.
    #[inline]
    pub fn new(inner: Option<I>) -> Self {
        Self { inner }
    }

    /// Wraps an iterator that is known to exist.
    #[inline]
    pub fn present(inner: I) -> Self {
        Self { inner: Some(inner) }
    }

    /// An iterator over a missing source. Always empty.
    #[inline]
    pub fn absent() -> Self {
        Self { inner: None }
    }

    /// Returns `true` if there is no underlying source.
    ///
    /// A present but exhausted source is not absent.
    #[inline]
    pub fn is_absent(&self) -> bool {
        self.inner.is_none()
    }
}

impl<I> Default for MaybeIter<I> {
    #[inline]
    fn default() -> Self {
        Self::absent()
    }
}

impl<I> From<Option<I>> for MaybeIter<I> {
    #[inline]
    fn from(inner: Option<I>) -> Self {
        Self::new(inner)
    }
}

impl<I: Iterator> Iterator for MaybeIter<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(i) => i.size_hint(),
            None => (0, Some(0)),
        }
    }

    #[inline]
    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        match self.inner {
            Some(i) => i.fold(init, f),
            None => init,
        }
    }
}

impl<I> DoubleEndedIterator for MaybeIter<I>
where
    I: DoubleEndedIterator,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next_back()
    }
}

impl<I> ExactSizeIterator for MaybeIter<I>
where
    I: ExactSizeIterator,
{
    #[inline]
    fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, ExactSizeIterator::len)
    }
}

impl<I> FusedIterator for MaybeIter<I> where I: FusedIterator {}
