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

//! # Homogeneous Pair
//!
//! A two-slot, order-preserving container for values of a single type.
//! `Pair<T>` is written once at construction and read positionally afterwards;
//! there is no way to replace a slot in place.
//!
//! ## Highlights
//!
//! - Positional accessors `first` / `second` and their consuming variants.
//! - Structural helpers: `as_ref`, `map`, `swap`, tuple conversions.
//! - `checked_spread` for numeric pairs, which on a `(min, max)` pair yields
//!   the width of the observed range.
//!
//! ## Usage
//!
//! ```rust
//! use extrema_core::pair::Pair;
//!
//! let p = Pair::new("min", "max");
//! assert_eq!(*p.first(), "min");
//! assert_eq!(*p.second(), "max");
//! assert_eq!(format!("{}", p), "(min, max)");
//! ```

use num_traits::CheckedSub;

/// An immutable pair of two values of the same type.
///
/// The slots are private. Once constructed, `first` and `second` never change;
/// the only way to obtain a different pair is to build a new one.
///
/// # Examples
///
/// ```rust
/// # use extrema_core::pair::Pair;
///
/// let p = Pair::new(1, 2);
/// assert_eq!(p.into_tuple(), (1, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pair<T> {
    first: T,
    second: T,
}

impl<T> Pair<T> {
    /// Creates a new pair from its two slots.
    ///
    /// No validation is performed: equal values, or a value paired with a copy
    /// of itself, are accepted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extrema_core::pair::Pair;
    ///
    /// let p = Pair::new(7, 7);
    /// assert_eq!(p.first(), p.second());
    /// ```
    #[inline]
    pub const fn new(first: T, second: T) -> Self {
        Self { first, second }
    }

    /// Returns a reference to the first slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extrema_core::pair::Pair;
    ///
    /// let p = Pair::new('a', 'z');
    /// assert_eq!(*p.first(), 'a');
    /// ```
    #[inline]
    pub const fn first(&self) -> &T {
        &self.first
    }

    /// Returns a reference to the second slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extrema_core::pair::Pair;
    ///
    /// let p = Pair::new('a', 'z');
    /// assert_eq!(*p.second(), 'z');
    /// ```
    #[inline]
    pub const fn second(&self) -> &T {
        &self.second
    }

    /// Consumes the pair and returns the first slot.
    #[inline]
    pub fn into_first(self) -> T {
        self.first
    }

    /// Consumes the pair and returns the second slot.
    #[inline]
    pub fn into_second(self) -> T {
        self.second
    }

    /// Consumes the pair and returns both slots as `(first, second)`.
    #[inline]
    pub fn into_tuple(self) -> (T, T) {
        (self.first, self.second)
    }

    /// Borrows both slots, producing a `Pair<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extrema_core::pair::Pair;
    ///
    /// let p = Pair::new(String::from("a"), String::from("b"));
    /// let lens = p.as_ref().map(|s| s.len());
    /// assert_eq!(lens, Pair::new(1, 1));
    /// assert_eq!(p.first(), "a");
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Pair<&T> {
        Pair {
            first: &self.first,
            second: &self.second,
        }
    }

    /// Applies `f` to both slots, first then second, preserving their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extrema_core::pair::Pair;
    ///
    /// let p = Pair::new(2, 3).map(|x| x * 10);
    /// assert_eq!(p, Pair::new(20, 30));
    /// ```
    #[inline]
    pub fn map<U, F>(self, mut f: F) -> Pair<U>
    where
        F: FnMut(T) -> U,
    {
        let first = f(self.first);
        let second = f(self.second);
        Pair { first, second }
    }

    /// Returns a new pair with the two slots exchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extrema_core::pair::Pair;
    ///
    /// assert_eq!(Pair::new(1, 2).swap(), Pair::new(2, 1));
    /// ```
    #[inline]
    pub fn swap(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}

impl<T> Pair<T>
where
    T: CheckedSub,
{
    /// Returns `second - first`, or `None` if the subtraction overflows.
    ///
    /// For a `(min, max)` pair this is the width of the observed range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use extrema_core::pair::Pair;
    ///
    /// assert_eq!(Pair::new(-5_i32, 12).checked_spread(), Some(17));
    /// assert_eq!(Pair::new(i8::MIN, i8::MAX).checked_spread(), None);
    /// ```
    #[inline]
    pub fn checked_spread(&self) -> Option<T> {
        self.second.checked_sub(&self.first)
    }
}

impl<T> From<(T, T)> for Pair<T> {
    #[inline]
    fn from((first, second): (T, T)) -> Self {
        Self::new(first, second)
    }
}

impl<T> From<Pair<T>> for (T, T) {
    #[inline]
    fn from(pair: Pair<T>) -> Self {
        pair.into_tuple()
    }
}

impl<T> std::fmt::Display for Pair<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
