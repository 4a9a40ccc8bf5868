// src/error.rs
use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors raised while walking a tree and asking git for change counts.
///
/// Messages leave the underlying cause to the `source` chain, so print them
/// with `{:#}` through `anyhow` to see the whole story.
#[derive(Debug, Error)]
pub enum ChurnError {
    #[error("resolve scan root")]
    PathResolution { source: io::Error },

    #[error("invalid filter pattern {pattern:?}")]
    Filter {
        pattern: String,
        source: glob::PatternError,
    },

    /// Never returned from a walk, only logged before the subtree is skipped.
    #[error("skipping {} because of: {error}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        error: walkdir::Error,
    },

    #[error("count commits {}: run git", .path.display())]
    ProviderSpawn { path: PathBuf, source: io::Error },

    #[error("count commits {}: git rev-list exited with {status}: {}", .path.display(), .output.trim())]
    Provider {
        path: PathBuf,
        status: ExitStatus,
        output: String,
    },

    #[error("count commits {}: parse count from {output:?}", .path.display())]
    Parse {
        path: PathBuf,
        output: String,
        source: ParseIntError,
    },

    #[error("write progress")]
    Progress { source: io::Error },

    #[error("walk directory {}", .root.display())]
    Walk {
        root: PathBuf,
        source: Box<ChurnError>,
    },
}

pub type Result<T> = std::result::Result<T, ChurnError>;
