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

use crate::{config::Config, order::WordOrder};
use anyhow::Context;
use clap::{ArgAction, Parser};
use extrema_core::algorithm::{minmax_by, position_minmax_by};
use log::{debug, info};
use std::{
    io::{Read, Write},
    path::PathBuf,
};

/// Scanned when neither words nor an input file are given.
pub const DEMO_SENTENCE: &str = "Mary had a little lamb";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Print the smallest and largest of a sequence of words",
    long_about = None
)]
pub struct Args {
    /// Words to scan. Defaults to "Mary had a little lamb".
    #[arg(conflicts_with = "input")]
    pub words: Vec<String>,

    /// Read whitespace-separated words from a file, or from stdin with "-".
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Ordering used to compare words [default: lexicographic].
    #[arg(short, long, value_enum)]
    pub order: Option<WordOrder>,

    /// Also print the zero-based positions of the extremes.
    #[arg(short, long, overrides_with = "no_positions")]
    pub positions: bool,

    /// Do not print positions, even if the config file asks for them.
    #[arg(long, overrides_with = "positions")]
    pub no_positions: bool,

    /// TOML file with default settings.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The positions switch as given on the command line, `None` if neither
    /// `--positions` nor `--no-positions` was passed. The last one wins.
    pub fn positions_flag(&self) -> Option<bool> {
        match (self.positions, self.no_positions) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Effective settings after merging the config file under the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub order: WordOrder,
    pub positions: bool,
}

impl Settings {
    pub fn resolve(args: &Args, config: &Config) -> Self {
        Self {
            order: args.order.or(config.order).unwrap_or_default(),
            positions: args.positions_flag().or(config.positions).unwrap_or(false),
        }
    }
}

pub fn run<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let settings = Settings::resolve(args, &config);
    debug!("effective settings: {:?}", settings);

    let words = collect_words(args)?;
    info!("scanning {} words by {} order", words.len(), settings.order);

    report(&words, settings, out)
}

fn collect_words(args: &Args) -> anyhow::Result<Vec<String>> {
    let Some(path) = &args.input else {
        if args.words.is_empty() {
            return Ok(split_words(DEMO_SENTENCE));
        }
        return Ok(args.words.clone());
    };

    let text = if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read words from stdin")?;
        text
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read words from '{}'", path.display()))?
    };
    Ok(split_words(&text))
}

fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}

/// Writes the extremes of `words` to `out`.
///
/// An empty word list is reported, not treated as an error.
pub fn report<W: Write>(words: &[String], settings: Settings, out: &mut W) -> anyhow::Result<()> {
    let order = settings.order;

    let Some(extremes) = minmax_by(words, |a, b| order.compare(a, b)) else {
        writeln!(out, "no extremes: input is empty")?;
        return Ok(());
    };
    writeln!(out, "min = {}", extremes.first())?;
    writeln!(out, "max = {}", extremes.second())?;

    if settings.positions {
        if let Some(positions) = position_minmax_by(words, |a, b| order.compare(a, b)) {
            writeln!(out, "min position = {}", positions.first())?;
            writeln!(out, "max position = {}", positions.second())?;
        }
    }
    Ok(())
}
