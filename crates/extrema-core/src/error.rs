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

use thiserror::Error;

/// The sequence handed to an extremes scan contained no elements.
///
/// Only returned by the `try_*` entry points; the primary API reports the
/// same situation as `None`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[error("cannot compute extremes of an empty sequence")]
pub struct EmptyInputError;

#[cfg(test)]
mod tests {
    use super::EmptyInputError;

    #[test]
    fn test_empty_input_error_display() {
        assert_eq!(
            EmptyInputError.to_string(),
            "cannot compute extremes of an empty sequence"
        );
    }

    #[test]
    fn test_empty_input_error_is_std_error() {
        let e: Box<dyn std::error::Error> = Box::new(EmptyInputError);
        assert!(e.source().is_none());
    }
}
