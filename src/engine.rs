use crate::classify::{Classification, classify};
use crate::error::CombineError;
use crate::exclude::ExclusionSet;
use crate::options::CombineOptions;
use crate::output::DocumentWriter;
use crate::progress::{Progress, Reporter};
use crate::tree::render_tree;
use crate::types::RunSummary;
use ignore::WalkBuilder;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

struct Walker {
    inner: ignore::Walk,
}

impl Walker {
    fn new(options: &CombineOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.input_dir);
        // No gitignore semantics and no hidden-file filtering here; the
        // exclusion patterns are the only traversal filter.
        builder.standard_filters(false).follow_links(false);
        let exclude = options.exclude.clone();
        // Matching directories are pruned from descent entirely. Matching
        // files still reach the classifier so the skip gets counted.
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if !is_dir {
                return true;
            }
            !exclude.matches(&entry.file_name().to_string_lossy())
        });
        Self {
            inner: builder.build(),
        }
    }

    /// Collects every candidate file under the root. Walk failures on
    /// individual entries are returned alongside the survivors; they never
    /// abort the collection.
    fn collect_files(self) -> (Vec<PathBuf>, Vec<CombineError>) {
        let mut files = Vec::new();
        let mut failures = Vec::new();
        for result in self.inner {
            match result {
                Ok(entry) => {
                    if is_candidate(&entry) {
                        files.push(entry.path().to_path_buf());
                    }
                }
                Err(e) => failures.push(CombineError::Walk(e.to_string())),
            }
        }
        (files, failures)
    }
}

fn is_candidate(entry: &ignore::DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    match entry.file_type() {
        Some(ft) if ft.is_dir() => false,
        // Directory symlinks are listed by the walker but never descended;
        // skip them. File symlinks (and dangling ones) read through, with
        // any stat failure surfacing later as a per-file read error.
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        Some(_) => true,
        None => true,
    }
}

/// Document order: within a directory, files sort before subdirectories,
/// each group case-sensitively by name. This matches a depth-first walk
/// that handles a directory's own files before descending.
fn document_order(a: &Path, b: &Path) -> Ordering {
    let mut left = a.components();
    let mut right = b.components();
    loop {
        match (left.next(), right.next()) {
            (Some(la), Some(rb)) => {
                let a_is_name = left.clone().next().is_none();
                let b_is_name = right.clone().next().is_none();
                if la == rb {
                    if a_is_name && b_is_name {
                        return Ordering::Equal;
                    }
                    continue;
                }
                return match (a_is_name, b_is_name) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => la.as_os_str().cmp(rb.as_os_str()),
                };
            }
            (None, None) => return Ordering::Equal,
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
        }
    }
}

fn name_excluded(path: &Path, exclude: &ExclusionSet) -> bool {
    path.file_name()
        .is_some_and(|name| exclude.matches(&name.to_string_lossy()))
}

/// Walks `options.input_dir` and writes the combined document.
///
/// The input directory is validated before any output is produced. The
/// candidate list is snapshotted up front; its post-exclusion count is the
/// progress denominator. Per-file skips and read errors are reported and
/// tallied, never fatal. Fails only when the input directory is missing,
/// not a directory, or unreadable, or when the output file cannot be
/// created or written.
pub fn combine(options: CombineOptions) -> Result<RunSummary, CombineError> {
    let root = options.input_dir.clone();
    if !root.exists() {
        return Err(CombineError::MissingInput(root));
    }
    if !root.is_dir() {
        return Err(CombineError::NotADirectory(root));
    }
    // Probe readability up front so no output file is created for a root
    // that cannot be walked.
    fs::read_dir(&root).map_err(|e| CombineError::UnreadableInput {
        path: root.clone(),
        source: e,
    })?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Combining {} into {}",
        root.display(),
        options.output_file.display()
    );
    let (mut files, walk_failures) = Walker::new(&options).collect_files();
    files.sort_by(|a, b| document_order(a, b));
    let total = files
        .iter()
        .filter(|path| !name_excluded(path, &options.exclude))
        .count() as u64;

    let mut writer = DocumentWriter::create(&options.output_file)?;
    let mut progress = Progress::new(total);
    let reporter = Reporter::new(&progress, options.quiet);
    for failure in &walk_failures {
        reporter.error(&failure.to_string());
    }

    if options.include_tree {
        let listing = render_tree(&root)?;
        writer.tree_section(&listing)?;
    }

    let mut summary = RunSummary::default();
    for path in &files {
        match classify(path, &options.exclude, options.max_file_size) {
            Ok(Classification::Included(text)) => {
                progress.advance();
                reporter.tick(&progress);
                let relative = path.strip_prefix(&root).unwrap_or(path);
                writer.file_block(relative, &text)?;
                summary.files_written += 1;
            }
            // Pattern skips are routine control flow: no notice, and they
            // are not part of the progress denominator.
            Ok(Classification::ExcludedByPattern) => {
                summary.excluded_by_pattern += 1;
            }
            Ok(Classification::ExcludedTooLarge) => {
                progress.advance();
                reporter.tick(&progress);
                reporter.skip(&format!(
                    "Skipping {}: File too large (>{}MB)",
                    path.display(),
                    options.max_file_size / (1024 * 1024)
                ));
                summary.excluded_too_large += 1;
            }
            Ok(Classification::ExcludedBinary) => {
                progress.advance();
                reporter.tick(&progress);
                reporter.skip(&format!("Skipping {}: Binary file", path.display()));
                summary.excluded_binary += 1;
            }
            Err(e) => {
                progress.advance();
                reporter.tick(&progress);
                reporter.error(&format!("Error processing {}: {e}", path.display()));
                summary.read_errors += 1;
            }
        }
    }

    writer.finish()?;
    reporter.finish();
    Ok(summary)
}
