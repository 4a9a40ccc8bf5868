// src/core/ranker.rs
use crate::models::{RankedReport, ScanResult};
use std::time::Duration;

/// Orders a scan by change count, highest first, and keeps the top `n`.
///
/// The sort is stable, so files with equal counts stay in discovery order and
/// repeated runs over the same tree print the same table. Asking for more than
/// the scan holds returns everything; an empty scan gives an empty report.
#[must_use]
pub fn rank(results: ScanResult, n: usize, elapsed: Duration) -> RankedReport {
    let total_files = results.len();
    let skipped = results.skipped().to_vec();

    let mut entries = results.into_files();
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    let limit = n.min(total_files);
    entries.truncate(limit);

    RankedReport {
        entries,
        limit,
        total_files,
        elapsed,
        skipped,
    }
}
