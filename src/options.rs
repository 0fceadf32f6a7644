use crate::exclude::ExclusionSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default per-file size ceiling: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default output file name. It is also one of the built-in exclusion
/// patterns, so a default-named document inside the input directory is
/// never swept into itself.
pub const DEFAULT_OUTPUT_FILE: &str = "combined_files.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombineOptions {
    pub input_dir: PathBuf,
    pub output_file: PathBuf,
    /// Per-file size ceiling in bytes; strictly larger files are skipped.
    pub max_file_size: u64,
    pub exclude: ExclusionSet,
    /// Whether the document opens with a tree listing of the input.
    pub include_tree: bool,
    /// Suppresses progress and skip notices. Error notices still print.
    pub quiet: bool,
}

impl Default for CombineOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            exclude: ExclusionSet::defaults(),
            include_tree: true,
            quiet: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct CombineOptionsBuilder {
    options: CombineOptions,
}

impl CombineOptionsBuilder {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            options: CombineOptions {
                input_dir: input_dir.into(),
                ..Default::default()
            },
        }
    }
    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output_file = path.into();
        self
    }
    pub fn max_file_size(mut self, bytes: u64) -> Self {
        self.options.max_file_size = bytes;
        self
    }
    pub fn exclude(mut self, set: ExclusionSet) -> Self {
        self.options.exclude = set;
        self
    }
    pub fn include_tree(mut self, yes: bool) -> Self {
        self.options.include_tree = yes;
        self
    }
    pub fn quiet(mut self, yes: bool) -> Self {
        self.options.quiet = yes;
        self
    }
    pub fn build(self) -> CombineOptions {
        self.options
    }
}
