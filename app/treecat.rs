//! Command-line interface for treecat.
//!
//! Walks a directory and writes one combined text document containing every
//! acceptable file, with progress and notices on stderr.

use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use treecat::{
    CombineOptions, CombineOptionsBuilder, DEFAULT_OUTPUT_FILE, ExclusionSet, combine,
    load_config_patterns,
};

/// treecat — flatten a directory tree into one annotated text file
#[derive(Parser)]
#[command(name = "treecat", version, about, long_about = None)]
struct Cli {
    /// Directory to combine
    #[arg(default_value = ".")]
    input_dir: PathBuf,

    /// Destination for the combined document
    #[arg(default_value = DEFAULT_OUTPUT_FILE)]
    output_file: PathBuf,

    /// Per-file size ceiling in megabytes
    #[arg(long, value_name = "MB", default_value_t = 10)]
    max_size: u64,

    /// Extra exclusion pattern, a literal name substring (can be repeated)
    #[arg(short, long, value_name = "PATTERN")]
    exclude: Vec<String>,

    /// File of newline-separated exclusion patterns; `#` starts a comment
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Skip the tree listing at the top of the output
    #[arg(long)]
    no_tree: bool,

    /// Suppress progress and informational output (errors still print)
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn into_options(self, config_patterns: Vec<String>) -> CombineOptions {
        let exclude = ExclusionSet::defaults()
            .merge(config_patterns)
            .merge(self.exclude);
        CombineOptionsBuilder::new(self.input_dir)
            .output_file(self.output_file)
            .max_file_size(self.max_size * 1024 * 1024)
            .exclude(exclude)
            .include_tree(!self.no_tree)
            .quiet(self.quiet)
            .build()
    }
}

fn main() {
    let cli = Cli::parse();

    let config_patterns = match &cli.config {
        Some(path) => match load_config_patterns(path) {
            Ok(patterns) => patterns,
            // A bad config file narrows the exclusion set; it does not
            // abort the run.
            Err(e) => {
                eprintln!("Warning: {e}");
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    let options = cli.into_options(config_patterns);

    if !options.quiet {
        println!("Processing directory: {}", options.input_dir.display());
        println!("Output file: {}", options.output_file.display());
        println!(
            "Maximum file size: {}MB",
            options.max_file_size / (1024 * 1024)
        );
        println!("Excluded patterns: {}", options.exclude.patterns().join(", "));
    }

    let output_file = options.output_file.clone();
    let quiet = options.quiet;

    match combine(options) {
        Ok(_) => {
            if !quiet {
                println!("Done! Combined files written to {}", output_file.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit(1);
        }
    }
}
