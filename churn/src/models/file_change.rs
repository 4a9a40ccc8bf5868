// src/models/file_change.rs

use std::path::PathBuf;

/// One scanned file and the number of commits that touched it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// Relative to the scan root.
    pub path: PathBuf,
    pub count: u64,
}

impl FileChange {
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, count: u64) -> Self {
        Self {
            path: path.into(),
            count,
        }
    }
}
