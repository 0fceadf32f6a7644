//! Output document assembly.
//!
//! The document is append-only: an optional tree section first, then one
//! block per included file, in traversal order. File content is written
//! verbatim, exactly as decoded.

use crate::error::CombineError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Streams the combined document to disk. The underlying file stays open
/// for the whole run and is flushed once by [`DocumentWriter::finish`].
pub(crate) struct DocumentWriter {
    out: BufWriter<File>,
    path: PathBuf,
}

impl DocumentWriter {
    /// Creates the output file, making parent directories as needed.
    pub(crate) fn create(path: &Path) -> Result<Self, CombineError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| CombineError::io(parent, e))?;
            }
        }
        let file = File::create(path).map_err(|e| CombineError::io(path, e))?;
        Ok(Self {
            out: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    /// Writes the tree listing and the marker separating it from the file
    /// blocks.
    pub(crate) fn tree_section(&mut self, listing: &str) -> Result<(), CombineError> {
        write!(self.out, "{listing}\n\n# Combined Files Content\n").map_err(|e| self.io(e))
    }

    /// Writes one file block: a blank-line separator, the relative-path
    /// header, then the content.
    pub(crate) fn file_block(&mut self, relative: &Path, content: &str) -> Result<(), CombineError> {
        write!(self.out, "\n\n### File: {}\n{content}", relative.display()).map_err(|e| self.io(e))
    }

    pub(crate) fn finish(mut self) -> Result<(), CombineError> {
        self.out.flush().map_err(|e| self.io(e))
    }

    fn io(&self, source: std::io::Error) -> CombineError {
        CombineError::io(&self.path, source)
    }
}
