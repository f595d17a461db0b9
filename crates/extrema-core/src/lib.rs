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

//! # Extrema Core
//!
//! A homogeneous two-slot container and the single-pass scans that fill it
//! with the minimum and maximum of a sequence.
//!
//! ## Modules
//!
//! - `pair`: `Pair<T>`, an immutable, order-preserving pair of values of one
//!   type, with positional accessors and structural helpers.
//! - `algorithm`: `minmax_by` and its relatives (`minmax`, `minmax_by_key`,
//!   `minmax_opt_by`, `try_minmax_by`, `position_minmax_by`), plus the
//!   incremental `MinMaxAccumulator`.
//! - `error`: `EmptyInputError`, the only failure a scan can report.
//! - `utils`: `MaybeIter<I>`, which lets a missing sequence be scanned like an
//!   empty one.
//!
//! ## Ordering and ties
//!
//! The ordering is always an explicit argument (`*_by`) or derived from one
//! (`minmax`, `minmax_by_key`), never a hidden trait requirement on the
//! scan itself. Only strictly smaller or strictly larger elements replace a
//! candidate, so the first of several equal elements is the one returned.
//!
//! ```rust
//! use extrema_core::algorithm::minmax_by;
//!
//! let words = ["b", "a", "a", "c"];
//! let mm = minmax_by(words.iter(), |a, b| a.cmp(b)).unwrap();
//! assert!(std::ptr::eq(*mm.first(), &words[1]));
//! assert_eq!(**mm.second(), "c");
//! ```

pub mod algorithm;
pub mod error;
pub mod pair;
pub mod utils;
