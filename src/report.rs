use std::io::{self, Write};
use std::path::Path;

use crate::compare::Report;

/// Write the pairwise report: one line per pair, then the two
/// semicolon-terminated lists of files without an equivalent match.
pub fn render_report(
    out: &mut impl Write,
    dir_a: &Path,
    dir_b: &Path,
    report: &Report,
) -> io::Result<()> {
    for pair in &report.pairs {
        write!(
            out,
            "{}/{} - {}/{}",
            dir_a.display(),
            pair.name_a,
            dir_b.display(),
            pair.name_b
        )?;
        if pair.equivalent {
            writeln!(out)?;
        } else {
            writeln!(out, " - {}", pair.percent)?;
        }
    }

    for name in &report.unmatched_a {
        write!(out, "{}/{};", dir_a.display(), name)?;
    }
    writeln!(out)?;
    for name in &report.unmatched_b {
        write!(out, "{}/{};", dir_b.display(), name)?;
    }
    writeln!(out)?;

    out.flush()
}
