//! Exclusion patterns: literal substrings matched against entry names.

use crate::error::CombineError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Patterns active on every run unless the caller builds its own set:
/// version-control internals, OS metadata, dependency directories, and the
/// default output file itself.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    ".git",
    ".gitignore",
    ".DS_Store",
    "__pycache__",
    "node_modules",
    "venv",
    "env",
    ".env",
    "combined_files.txt",
];

/// An ordered, duplicate-free set of exclusion patterns.
///
/// Matching is substring-based against file and directory *names*, never
/// full paths and never globs: the pattern `env` excludes `environment.json`
/// as well as `.env`. The set is assembled once, before a walk starts, by
/// merging the built-in defaults with config-file and caller patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionSet {
    patterns: Vec<String>,
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::defaults()
    }
}

impl ExclusionSet {
    /// The built-in pattern set ([`DEFAULT_EXCLUDE_PATTERNS`]).
    pub fn defaults() -> Self {
        Self {
            patterns: DEFAULT_EXCLUDE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }

    /// A set with no patterns; nothing is excluded.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Appends further patterns in order, skipping duplicates and empty
    /// strings (an empty substring would match every name).
    pub fn merge<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for pattern in patterns {
            let pattern = pattern.into();
            if pattern.is_empty() || self.patterns.contains(&pattern) {
                continue;
            }
            self.patterns.push(pattern);
        }
        self
    }

    /// True if any pattern occurs as a substring of `name`.
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| name.contains(p.as_str()))
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

/// Reads exclusion patterns from a config file: one pattern per line, with
/// blank lines and `#` comment lines ignored.
pub fn load_config_patterns(path: &Path) -> Result<Vec<String>, CombineError> {
    let contents = fs::read_to_string(path).map_err(|e| CombineError::io(path, e))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect())
}
