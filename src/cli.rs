use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use glob::Pattern;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// First directory (A)
    pub dir1: PathBuf,

    /// Second directory (B)
    pub dir2: PathBuf,

    /// Equivalence threshold as an integer percentage (0-100)
    pub threshold: Option<String>,

    /// Glob patterns to ignore (can be repeated or comma separated)
    #[arg(short, long, value_delimiter = ',', num_args = 1..)]
    pub ignore: Vec<String>,
}

#[derive(Debug)]
pub struct Options {
    pub threshold: usize,
    pub ignore_patterns: Vec<Pattern>,
}

pub fn build_options(args: &Args) -> Result<Options> {
    let threshold = match &args.threshold {
        Some(raw) => parse_threshold(raw)?,
        None => 100,
    };

    let patterns = args
        .ignore
        .iter()
        .map(|s| Pattern::new(s).with_context(|| format!("Invalid glob pattern: {s}")))
        .collect::<Result<Vec<_>>>()?;

    Ok(Options {
        threshold,
        ignore_patterns: patterns,
    })
}

fn parse_threshold(raw: &str) -> Result<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        bail!("Threshold must be an integer between 0 and 100, got {raw:?}");
    }
    let value: usize = raw
        .parse()
        .with_context(|| format!("Threshold out of range: {raw:?}"))?;
    if value > 100 {
        bail!("Threshold must be at most 100, got {value}");
    }
    Ok(value)
}
