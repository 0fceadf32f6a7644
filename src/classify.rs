use crate::error::CombineError;
use crate::exclude::ExclusionSet;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;

/// Leading bytes inspected when sniffing for binary content.
const SNIFF_WINDOW: usize = 1024;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Outcome of classifying a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Textual file; carries the decoded content.
    Included(String),
    /// Null byte in the sniff window and no allow-listed extension.
    ExcludedBinary,
    /// On-disk size strictly above the configured ceiling.
    ExcludedTooLarge,
    /// File name contains an exclusion pattern.
    ExcludedByPattern,
}

/// Decides whether `path` belongs in the combined document.
///
/// Checks run in a fixed order: exclusion patterns, then the size ceiling,
/// then binary detection. Files with an allow-listed extension never reach
/// the null-byte sniff, so `.txt` content containing stray null bytes is
/// still included. Read failures surface as errors; the caller decides
/// whether they abort the run.
pub fn classify(
    path: &Path,
    exclude: &ExclusionSet,
    max_file_size: u64,
) -> Result<Classification, CombineError> {
    if let Some(name) = path.file_name() {
        if exclude.matches(&name.to_string_lossy()) {
            return Ok(Classification::ExcludedByPattern);
        }
    }
    let metadata = fs::metadata(path).map_err(|e| CombineError::io(path, e))?;
    if metadata.len() > max_file_size {
        #[cfg(feature = "logging")]
        tracing::debug!(
            "File too large ({} > {}), skipping {}",
            metadata.len(),
            max_file_size,
            path.display()
        );
        return Ok(Classification::ExcludedTooLarge);
    }
    let file = File::open(path).map_err(|e| CombineError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::with_capacity(metadata.len() as usize);
    reader
        .by_ref()
        .take(SNIFF_WINDOW as u64)
        .read_to_end(&mut bytes)
        .map_err(|e| CombineError::io(path, e))?;
    if !has_text_extension(path) && bytes.contains(&0) {
        #[cfg(feature = "logging")]
        tracing::debug!("Binary file detected: {}", path.display());
        return Ok(Classification::ExcludedBinary);
    }
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| CombineError::io(path, e))?;
    Ok(Classification::Included(decode_text(&bytes)))
}

fn has_text_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| is_known_text_extension(&ext.to_ascii_lowercase()))
}

/// Extensions always treated as text, bypassing the null-byte sniff.
/// Comparison is against the lowercased extension.
fn is_known_text_extension(ext: &str) -> bool {
    matches!(
        ext,
        "txt" | "md" | "swift" | "py" | "js" | "jsx" | "ts" | "tsx" | "json" | "xml"
            | "yaml" | "yml" | "sh" | "bash" | "zsh" | "html" | "css" | "scss" | "sass"
            | "h" | "hpp" | "m" | "c" | "cpp" | "java" | "kt" | "rs" | "go" | "rb"
            | "php" | "pl" | "conf" | "cfg" | "ini" | "config" | "properties" | "plist"
            | "toml"
    )
}

/// Decodes file bytes through an ordered list of attempts; the first
/// success wins and the lossy pass at the end cannot fail.
fn decode_text(bytes: &[u8]) -> String {
    let attempts: [fn(&[u8]) -> Option<String>; 4] =
        [try_utf8, try_utf8_bom, try_ascii, try_latin1];
    for attempt in attempts {
        if let Some(text) = attempt(bytes) {
            return text;
        }
    }
    String::from_utf8_lossy(bytes).into_owned()
}

fn try_utf8(bytes: &[u8]) -> Option<String> {
    std::str::from_utf8(bytes).ok().map(str::to_owned)
}

fn try_utf8_bom(bytes: &[u8]) -> Option<String> {
    bytes.strip_prefix(&UTF8_BOM).and_then(try_utf8)
}

fn try_ascii(bytes: &[u8]) -> Option<String> {
    // ASCII is a strict UTF-8 subset.
    if bytes.is_ascii() { try_utf8(bytes) } else { None }
}

fn try_latin1(bytes: &[u8]) -> Option<String> {
    // Total: every byte maps to U+0000..=U+00FF.
    Some(bytes.iter().map(|&b| char::from(b)).collect())
}
