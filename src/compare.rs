use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::cli::Options;
use crate::lcs::longest_common_substring_length;
use crate::report::render_report;
use crate::scanner::{scan_dir, FileEntry};
use crate::score::{is_equivalent, similarity_percent};
use crate::suffix::SuffixError;

#[derive(Debug)]
pub struct PairOutcome {
    pub name_a: String,
    pub name_b: String,
    pub percent: usize,
    pub equivalent: bool,
}

#[derive(Debug)]
pub struct Report {
    pub pairs: Vec<PairOutcome>,
    pub unmatched_a: Vec<String>,
    pub unmatched_b: Vec<String>,
}

fn pair_outcome(a: &FileEntry, b: &FileEntry, threshold: usize) -> Result<PairOutcome, SuffixError> {
    // Equal digests mean equal bytes: the common substring is the
    // whole file and the engine can be skipped.
    let lcs_len = if a.digest == b.digest {
        a.bytes.len()
    } else {
        longest_common_substring_length(&a.bytes, &b.bytes)?
    };
    Ok(PairOutcome {
        name_a: a.name.clone(),
        name_b: b.name.clone(),
        percent: similarity_percent(lcs_len, a.bytes.len(), b.bytes.len()),
        equivalent: is_equivalent(lcs_len, a.bytes.len(), b.bytes.len(), threshold),
    })
}

/// Score every (file-in-A, file-in-B) pair and collect the files on
/// each side that found no equivalent match on the other.
pub fn compare_dirs(
    files_a: &[FileEntry],
    files_b: &[FileEntry],
    threshold: usize,
) -> Result<Report, SuffixError> {
    // Pairs are fully independent, so the grid is evaluated in
    // parallel and flattened back in row-major order.
    let grid: Vec<Vec<PairOutcome>> = files_a
        .par_iter()
        .map(|a| {
            files_b
                .iter()
                .map(|b| pair_outcome(a, b, threshold))
                .collect()
        })
        .collect::<Result<_, _>>()?;

    let unmatched_a = files_a
        .iter()
        .zip(&grid)
        .filter(|(_, row)| !row.iter().any(|pair| pair.equivalent))
        .map(|(file, _)| file.name.clone())
        .collect();
    let unmatched_b = files_b
        .iter()
        .enumerate()
        .filter(|(col, _)| !grid.iter().any(|row| row[*col].equivalent))
        .map(|(_, file)| file.name.clone())
        .collect();

    Ok(Report {
        pairs: grid.into_iter().flatten().collect(),
        unmatched_a,
        unmatched_b,
    })
}

/// Scan both directories, compare every pair, and render the report.
pub fn run(dir_a: &Path, dir_b: &Path, opts: &Options, out: &mut impl Write) -> Result<()> {
    let files_a = scan_dir(dir_a, &opts.ignore_patterns)
        .with_context(|| format!("Failed to scan {}", dir_a.display()))?;
    let files_b = scan_dir(dir_b, &opts.ignore_patterns)
        .with_context(|| format!("Failed to scan {}", dir_b.display()))?;

    let report = compare_dirs(&files_a, &files_b, opts.threshold)?;
    render_report(out, dir_a, dir_b, &report)?;
    Ok(())
}
