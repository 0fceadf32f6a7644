//! # Treecat
//!
//! `treecat` walks a directory tree and concatenates every acceptable text
//! file into a single annotated document, optionally prefixed with an ASCII
//! tree listing of the directory structure.
//!
//! Acceptability is decided per file, in order: name-based exclusion
//! patterns (literal substrings, never globs), a size ceiling, then binary
//! detection (an extension allow-list backed by a null-byte sniff). Content
//! is decoded through a fixed chain of attempts (UTF-8, UTF-8 with BOM,
//! ASCII, Latin-1, lossy UTF-8), so decoding never fails. Per-file read
//! errors are reported and skipped; they never abort a run.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use treecat::{CombineOptionsBuilder, ExclusionSet, combine};
//!
//! let options = CombineOptionsBuilder::new("./my-project")
//!     .output_file("snapshot.txt")
//!     .max_file_size(10 * 1024 * 1024) // 10 MiB
//!     .exclude(ExclusionSet::defaults().merge(["target"]))
//!     .quiet(true)
//!     .build();
//!
//! let summary = combine(options).expect("Failed to combine directory");
//! println!("Wrote {} file blocks", summary.files_written);
//! ```

mod classify;
mod engine;
mod error;
mod exclude;
mod options;
mod output;
mod progress;
mod tree;
mod types;

pub use classify::{Classification, classify};
pub use engine::combine;
pub use error::CombineError;
pub use exclude::{DEFAULT_EXCLUDE_PATTERNS, ExclusionSet, load_config_patterns};
pub use options::{
    CombineOptions, CombineOptionsBuilder, DEFAULT_MAX_FILE_SIZE, DEFAULT_OUTPUT_FILE,
};
pub use types::RunSummary;
