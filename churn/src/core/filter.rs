// src/core/filter.rs
use crate::error::{ChurnError, Result};
use glob::{MatchOptions, Pattern};
use std::path::Path;

/// Always excluded, whatever the user passes on the command line.
pub const DEFAULT_PATTERN: &str = ".git";

/// Shell-style matching: wildcards never cross a `/`.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug)]
pub struct FilterSpec {
    /// Compiled exclusion patterns in the order they were configured.
    patterns: Vec<Pattern>,
}

impl FilterSpec {
    /// Builds a filter holding [`DEFAULT_PATTERN`] followed by `extra`.
    ///
    /// # Arguments
    ///
    /// * `extra` - Additional glob patterns, matched against paths relative to the scan root
    ///
    /// # Errors
    ///
    /// Returns [`ChurnError::Filter`] naming the first pattern that is not valid glob syntax.
    #[inline]
    pub fn new<I, S>(extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut spec = Self {
            patterns: Vec::new(),
        };
        spec.add_pattern(DEFAULT_PATTERN)?;
        for pattern in extra {
            spec.add_pattern(pattern.as_ref())?;
        }
        Ok(spec)
    }

    /// Cleans and compiles `pattern`, appending it to the exclusion list.
    ///
    /// # Errors
    ///
    /// Returns [`ChurnError::Filter`] if the cleaned pattern is not valid glob syntax.
    #[inline]
    pub fn add_pattern(&mut self, pattern: &str) -> Result<()> {
        let cleaned = clean_pattern(pattern);
        let compiled = Pattern::new(&cleaned).map_err(|source| ChurnError::Filter {
            pattern: pattern.to_owned(),
            source,
        })?;
        self.patterns.push(compiled);
        Ok(())
    }

    /// Reports whether `path` (relative to the scan root) hits any pattern.
    /// Stops at the first match. Names that are not UTF-8 are matched with
    /// their invalid bytes replaced, so wildcards still catch them.
    #[inline]
    pub fn matches<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref().to_string_lossy();
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_with(&path, MATCH_OPTIONS))
    }

    #[inline]
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Pattern::as_str)
    }
}

/// Lexically normalizes a pattern the way a path would be cleaned: repeated
/// and trailing separators go, `.` elements go, and `..` eats its parent
/// where there is one. An empty result becomes `.`.
#[must_use]
pub fn clean_pattern(pattern: &str) -> String {
    let rooted = pattern.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for part in pattern.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            _ => parts.push(part),
        }
    }

    let joined = parts.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        String::from(".")
    } else {
        joined
    }
}
