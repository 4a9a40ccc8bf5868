// src/models/ranked_report.rs

use crate::models::FileChange;
use std::path::PathBuf;
use std::time::Duration;

/// The top of a scan, ready to print.
#[derive(Debug, Default)]
pub struct RankedReport {
    /// Sorted by `count`, highest first.
    pub entries: Vec<FileChange>,
    /// The `n` actually applied, never more than `total_files`.
    pub limit: usize,
    pub total_files: usize,
    pub elapsed: Duration,
    /// Subtrees the walk could not read.
    pub skipped: Vec<PathBuf>,
}

impl RankedReport {
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
