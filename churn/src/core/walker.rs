// src/core/walker.rs
use crate::core::filter::FilterSpec;
use crate::core::git::ChangeCounter;
use crate::error::{ChurnError, Result};
use crate::models::{FileChange, ScanResult};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};


/// Walks a tree and asks a [`ChangeCounter`] about every file it keeps.
pub struct Walker<C> {
    filters: FilterSpec,
    branch: String,
    counter: C,
    progress: bool,
}

impl<C: ChangeCounter> Walker<C> {
    #[inline]
    pub fn new(filters: FilterSpec, branch: impl Into<String>, counter: C) -> Self {
        Self {
            filters,
            branch: branch.into(),
            counter,
            progress: false,
        }
    }

    /// Write an `Entering <dir>` line for every directory visited.
    #[inline]
    #[must_use]
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Walks `root` depth-first in file name order and counts changes for
    /// every file that survives the filters.
    ///
    /// An excluded directory is never descended into. A subtree that cannot
    /// be read is logged, recorded in [`ScanResult::skipped`] and passed over.
    ///
    /// # Arguments
    ///
    /// * `root` - The directory to scan; reported paths are relative to it
    /// * `out` - Receives the progress lines when progress is on
    ///
    /// # Returns
    ///
    /// * `Ok(ScanResult)` - Every counted file in discovery order
    ///
    /// # Errors
    ///
    /// Returns [`ChurnError::Walk`] wrapping the first failure of the change
    /// counter, or [`ChurnError::Progress`] if `out` stops accepting writes.
    /// No partial result is returned.
    pub fn walk<W: Write>(&self, root: &Path, out: &mut W) -> Result<ScanResult> {
        info!(root = %root.display(), branch = %self.branch, "scanning");
        let mut result = ScanResult::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !should_exclude(e, root, &self.filters))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    let path = error
                        .path()
                        .map_or_else(|| root.to_path_buf(), |p| relative_path(p, root));
                    let skipped = ChurnError::DirectoryRead {
                        path: path.clone(),
                        error,
                    };
                    warn!("{skipped}");
                    result.record_skipped(path);
                    continue;
                }
            };

            let path = relative_path(entry.path(), root);
            let file_type = entry.file_type();

            if file_type.is_dir() {
                if self.progress {
                    writeln!(out, "Entering {}", path.display())
                        .map_err(|source| ChurnError::Progress { source })?;
                }
                continue;
            }

            if !file_type.is_file() && !file_type.is_symlink() {
                debug!(path = %path.display(), "not a regular file");
                continue;
            }

            let count = self
                .counter
                .count_changes(&path, &self.branch)
                .map_err(|source| ChurnError::Walk {
                    root: root.to_path_buf(),
                    source: Box::new(source),
                })?;

            result.push(FileChange::new(path, count));
        }

        info!(
            files = result.len(),
            skipped = result.skipped().len(),
            "scan finished"
        );
        Ok(result)
    }
}

/// Decides whether `entry` and, for a directory, everything under it is
/// left out. The root itself is always kept.
fn should_exclude(entry: &DirEntry, root: &Path, filters: &FilterSpec) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let excluded = filters.matches(relative_path(entry.path(), root));
    if excluded {
        debug!(path = %entry.path().display(), "excluded by filter");
    }
    excluded
}

/// `path` relative to `root`, or `.` for the root itself.
fn relative_path(path: &Path, root: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => PathBuf::from("."),
        Ok(rel) => rel.to_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}
