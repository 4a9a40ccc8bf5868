// src/core/git.rs
use crate::error::{ChurnError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Something that knows how many times a path changed on a branch.
pub trait ChangeCounter {
    /// Counts the commits on `branch` that touched `path`.
    ///
    /// # Errors
    ///
    /// Implementations fail when the history cannot be queried or the answer
    /// is not a commit count. The walk treats either as fatal.
    fn count_changes(&self, path: &Path, branch: &str) -> Result<u64>;
}

/// Asks `git rev-list --count` from inside a working tree.
#[derive(Debug, Clone)]
pub struct GitChangeCounter {
    repo_dir: PathBuf,
}

impl GitChangeCounter {
    /// `repo_dir` becomes git's working directory, so paths passed to
    /// [`ChangeCounter::count_changes`] are relative to it.
    #[inline]
    #[must_use]
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }
}

impl ChangeCounter for GitChangeCounter {
    fn count_changes(&self, path: &Path, branch: &str) -> Result<u64> {
        debug!(path = %path.display(), branch, "git rev-list --count");

        // `output` waits for exit and drains both pipes.
        let output = Command::new("git")
            .arg("rev-list")
            .arg("--count")
            .arg(branch)
            .arg("--")
            .arg(path)
            .current_dir(&self.repo_dir)
            .output()
            .map_err(|source| ChurnError::ProviderSpawn {
                path: path.to_path_buf(),
                source,
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(ChurnError::Provider {
                path: path.to_path_buf(),
                status: output.status,
                output: combined,
            });
        }

        parse_count(path, &combined)
    }
}

/// Parses the single integer git prints, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`ChurnError::Parse`] carrying the raw output when it is not a
/// non-negative integer.
pub fn parse_count(path: &Path, output: &str) -> Result<u64> {
    output
        .trim()
        .parse::<u64>()
        .map_err(|source| ChurnError::Parse {
            path: path.to_path_buf(),
            output: output.to_owned(),
            source,
        })
}
