//! Internal module for rendering the tree listing at the head of the
//! combined document.

use crate::error::CombineError;
use chrono::Local;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

struct TreeEntry {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Renders the hierarchy under `root` as an ASCII tree, prefixed with a
/// generation timestamp header.
///
/// Hidden entries (names starting with `.`) are omitted. The listing is
/// independent of the exclusion patterns used for content inclusion: an
/// excluded directory still appears here. Directories sort before files,
/// each group by name. The root's own name is not printed.
///
/// # Errors
///
/// Fails only if `root` itself cannot be read; an unreadable subdirectory
/// keeps its line but lists no children.
pub(crate) fn render_tree(root: &Path) -> Result<String, CombineError> {
    let mut lines = vec![format!(
        "# File Tree - Generated on {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )];
    let entries = list_entries(root).map_err(|e| CombineError::io(root, e))?;
    render_level(&entries, "", &mut lines);
    Ok(lines.join("\n"))
}

fn render_level(entries: &[TreeEntry], prefix: &str, lines: &mut Vec<String>) {
    for (index, entry) in entries.iter().enumerate() {
        let is_last = index + 1 == entries.len();
        let connector = if is_last { "└── " } else { "├── " };
        lines.push(format!("{prefix}{connector}{}", entry.name));
        if entry.is_dir {
            let continuation = if is_last { "    " } else { "│   " };
            // An unreadable subdirectory still shows up above; it just has
            // no children to render.
            if let Ok(children) = list_entries(&entry.path) {
                render_level(&children, &format!("{prefix}{continuation}"), lines);
            }
        }
    }
}

/// One directory level: hidden names dropped, directories first, then
/// files, each group in name order. Symlinks are listed by their own type
/// and never descended.
fn list_entries(dir: &Path) -> std::io::Result<Vec<TreeEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
        entries.push(TreeEntry {
            name,
            path: entry.path(),
            is_dir,
        });
    }
    entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.cmp(&b.name),
    });
    Ok(entries)
}
