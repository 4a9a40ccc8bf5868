// src/models/scan_result.rs

use crate::models::FileChange;
use std::path::{Path, PathBuf};

/// Everything one walk produced, in discovery order.
#[derive(Debug, Default)]
pub struct ScanResult {
    files: Vec<FileChange>,
    skipped: Vec<PathBuf>,
}

impl ScanResult {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files: Vec::new(),
            skipped: Vec::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, change: FileChange) {
        self.files.push(change);
    }

    /// Records a subtree the walker could not read and stepped over.
    #[inline]
    pub fn record_skipped(&mut self, path: impl Into<PathBuf>) {
        self.skipped.push(path.into());
    }

    #[inline]
    #[must_use]
    pub fn files(&self) -> &[FileChange] {
        &self.files
    }

    #[inline]
    #[must_use]
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.files.iter().any(|file| file.path == path)
    }

    #[inline]
    #[must_use]
    pub fn into_files(self) -> Vec<FileChange> {
        self.files
    }
}
