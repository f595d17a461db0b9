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

//! # extrema
//!
//! Prints the smallest and largest word of a sequence:
//!
//! ```text
//! $ extrema
//! min = Mary
//! max = little
//! $ extrema --order length --positions the quick brown fox
//! min = the
//! max = quick
//! min position = 0
//! max position = 1
//! ```

mod app;
mod config;
mod logging;
mod order;

use clap::Parser;
use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = app::Args::parse();
    logging::init(args.verbose);

    let stdout = std::io::stdout();
    match app::run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("{}", failure_message(&e));
            ExitCode::FAILURE
        }
    }
}

/// The line printed on stderr for a fatal error. Written regardless of the
/// log filter, so `RUST_LOG=off` still says why the run failed.
fn failure_message(e: &anyhow::Error) -> String {
    format!("error: {e:#}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_failure_message_includes_cause_chain() {
        let e = Err::<(), _>(std::io::Error::other("no such file"))
            .context("failed to read words from 'words.txt'")
            .unwrap_err();
        assert_eq!(
            failure_message(&e),
            "error: failed to read words from 'words.txt': no such file"
        );
    }
}
