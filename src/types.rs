use serde::{Deserialize, Serialize};

/// Aggregate outcome of one combine run.
///
/// Per-file skips and read errors never fail a run; they are tallied here.
/// The number of file blocks in the output document always equals
/// `files_written`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Files whose decoded content was written to the document.
    pub files_written: u64,
    /// Files skipped because their name matched an exclusion pattern.
    ///
    /// Files inside a pruned directory are never visited and are not
    /// counted here.
    pub excluded_by_pattern: u64,
    /// Files skipped for exceeding the size ceiling.
    pub excluded_too_large: u64,
    /// Files skipped as binary after the null-byte sniff.
    pub excluded_binary: u64,
    /// Files that could not be read; reported and skipped.
    pub read_errors: u64,
}
