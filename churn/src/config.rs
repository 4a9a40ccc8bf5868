// src/config.rs
use crate::cli::Args;
use anyhow::{Context as _, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".churn.toml";
pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_TOP: usize = 10;

/// Contents of a `.churn.toml`. Every key is optional.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub branch: Option<String>,
    pub top: Option<usize>,
    pub filters: Vec<String>,
}

/// What a run actually uses once flags, config file and defaults are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub branch: String,
    pub top: usize,
    /// User patterns only; the `.git` default is added by the filter itself.
    pub filters: Vec<String>,
    pub progress: bool,
}

impl Settings {
    /// Flags win over the config file, which wins over the defaults.
    /// Filters from both sources are kept, config file first.
    ///
    /// # Errors
    ///
    /// Fails if the config file asks for a `top` of zero.
    #[inline]
    pub fn resolve(args: &Args, config: FileConfig) -> Result<Self> {
        if config.top == Some(0) {
            bail!("{CONFIG_FILE}: top must be at least 1");
        }

        let top = args
            .top
            .map(|top| usize::try_from(top).unwrap_or(usize::MAX))
            .or(config.top)
            .unwrap_or(DEFAULT_TOP);

        let branch = args
            .branch
            .clone()
            .or(config.branch)
            .unwrap_or_else(|| DEFAULT_BRANCH.to_owned());

        let mut filters = config.filters;
        filters.extend(args.filter.iter().cloned());

        Ok(Self {
            branch,
            top,
            filters,
            progress: !args.quiet,
        })
    }
}

/// Finds the nearest `.churn.toml`, starting at `dir` and walking up through
/// its parents. No file anywhere means an empty config.
///
/// # Arguments
///
/// * `dir` - The directory to start the search from
///
/// # Returns
///
/// * `Ok((FileConfig, Option<PathBuf>))` - The parsed config and where it came from
///
/// # Errors
///
/// This function may return an error if:
/// * A config file exists but cannot be read
/// * The file is not valid TOML or has unknown keys
#[inline]
pub fn load_config(dir: &Path) -> Result<(FileConfig, Option<PathBuf>)> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let config_file = current_dir.join(CONFIG_FILE);

        if config_file.is_file() {
            let content = fs::read_to_string(&config_file)
                .with_context(|| format!("Failed to read {}", config_file.display()))?;
            let config = toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", config_file.display()))?;
            return Ok((config, Some(config_file)));
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    Ok((FileConfig::default(), None))
}
