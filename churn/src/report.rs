// src/report.rs
use crate::models::RankedReport;
use std::io::{self, Write};

/// Writes the ranking table and summary line.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_report<W: Write>(out: &mut W, report: &RankedReport) -> io::Result<()> {
    if report.is_empty() {
        writeln!(out, "No files found")?;
    } else {
        writeln!(out)?;
        writeln!(out, "Next to refactor:")?;
        writeln!(out, "commits\tfile")?;
        writeln!(out, "-------\t----")?;
        for entry in &report.entries {
            writeln!(out, "{}\t{}", entry.count, entry.path.display())?;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "Scanned {} files in {:.2?}",
        report.total_files, report.elapsed
    )?;
    if !report.skipped.is_empty() {
        writeln!(out, "Skipped {} unreadable paths", report.skipped.len())?;
    }
    Ok(())
}
