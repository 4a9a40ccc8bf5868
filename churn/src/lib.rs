// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;

use anyhow::{Context as _, Result};
use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

pub use crate::cli::Args;
pub use crate::config::{FileConfig, Settings, load_config};
pub use crate::core::filter::{FilterSpec, clean_pattern};
pub use crate::core::git::{ChangeCounter, GitChangeCounter};
pub use crate::core::ranker::rank;
pub use crate::core::walker::Walker;
pub use crate::error::ChurnError;
pub use crate::models::{FileChange, RankedReport, ScanResult};
pub use crate::report::print_report;

/// Scans the current directory and prints the ranking to stdout.
///
/// # Errors
///
/// Fails if the current directory cannot be determined, or for any reason
/// [`run_in`] fails.
pub fn run(args: &Args) -> Result<()> {
    let root = env::current_dir().map_err(|source| ChurnError::PathResolution { source })?;
    run_in(&root, args, &mut io::stdout())
}

/// Runs the whole pipeline against `root`: config, filters, walk, rank, print.
///
/// # Arguments
///
/// * `root` - The directory to scan, which must sit inside a git working tree
/// * `args` - Parsed command line flags
/// * `out` - Where the report goes
///
/// # Errors
///
/// This function may return an error if:
/// * `root` cannot be resolved
/// * A config file cannot be read or parsed
/// * A filter pattern is not valid glob syntax
/// * git fails for any file, or prints something that is not a count
/// * The report cannot be written
pub fn run_in<W: Write>(root: &Path, args: &Args, out: &mut W) -> Result<()> {
    let root = root
        .canonicalize()
        .map_err(|source| ChurnError::PathResolution { source })
        .with_context(|| format!("Failed to resolve {}", root.display()))?;

    let (config, config_path) = load_config(&root)?;
    if let Some(path) = config_path {
        info!(config = %path.display(), "loaded config");
    }
    let settings = Settings::resolve(args, config)?;
    let filters = FilterSpec::new(&settings.filters)?;

    let walker = Walker::new(filters, settings.branch, GitChangeCounter::new(root.clone()))
        .with_progress(settings.progress);

    let start = Instant::now();
    let results = walker.walk(&root, out)?;
    let report = rank(results, settings.top, start.elapsed());

    print_report(out, &report).context("Failed to write report")?;
    Ok(())
}
