//! Progress state and terminal feedback for a combine run.

use indicatif::{ProgressBar, ProgressStyle};

/// Processed/total pair for one run. The traversal loop mutates it; the
/// display side only reads it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Progress {
    processed: u64,
    total: u64,
}

impl Progress {
    pub(crate) fn new(total: u64) -> Self {
        Self {
            processed: 0,
            total,
        }
    }
    pub(crate) fn advance(&mut self) {
        self.processed += 1;
    }
    pub(crate) fn processed(&self) -> u64 {
        self.processed
    }
    pub(crate) fn total(&self) -> u64 {
        self.total
    }
}

/// Terminal feedback: a progress bar on stderr plus skip and error notices
/// routed through it so they do not garble the draw.
pub(crate) struct Reporter {
    bar: ProgressBar,
    quiet: bool,
}

impl Reporter {
    /// The bar is hidden in quiet mode and when there is nothing to count.
    pub(crate) fn new(progress: &Progress, quiet: bool) -> Self {
        let bar = if quiet || progress.total() == 0 {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::new(progress.total());
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("Processing files... {pos}/{len} ({percent}%) [{bar:30}]")
                    .expect("static progress template")
                    .progress_chars("##-"),
            );
            bar
        };
        Self { bar, quiet }
    }

    pub(crate) fn tick(&self, progress: &Progress) {
        self.bar.set_position(progress.processed());
    }

    /// Routine skip notice; dropped entirely in quiet mode.
    pub(crate) fn skip(&self, message: &str) {
        if self.quiet {
            return;
        }
        if self.bar.is_hidden() {
            eprintln!("{message}");
        } else {
            self.bar.println(message);
        }
    }

    /// Per-file failure notice. Printed even in quiet mode.
    pub(crate) fn error(&self, message: &str) {
        if self.bar.is_hidden() {
            eprintln!("{message}");
        } else {
            self.bar.println(message);
        }
    }

    pub(crate) fn finish(&self) {
        if !self.bar.is_hidden() {
            self.bar.finish();
        }
    }
}
