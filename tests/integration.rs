use std::fs;
use std::path::Path;
use tempfile::tempdir;
use treecat::{CombineOptions, CombineOptionsBuilder, ExclusionSet, combine};

fn quiet_options(input: &Path, output: &Path) -> CombineOptions {
    CombineOptionsBuilder::new(input)
        .output_file(output)
        .quiet(true)
        .build()
}

/// Byte offset of a file block's header in the document, panicking when the
/// block is absent.
fn block_offset(doc: &str, relative: &str) -> usize {
    doc.find(&format!("\n\n### File: {relative}\n"))
        .unwrap_or_else(|| panic!("no block for {relative}"))
}

#[test]
fn integration_text_binary_and_git_dir() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    fs::write(dir.path().join("b.bin"), b"\x00\x01\x02").unwrap();
    fs::create_dir(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(".git/config"), "[core]").unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("combined.txt");

    let summary = combine(quiet_options(dir.path(), &out)).unwrap();

    assert_eq!(summary.files_written, 1);
    assert_eq!(summary.excluded_binary, 1);
    assert_eq!(summary.excluded_by_pattern, 0); // .git was pruned, not visited
    let doc = fs::read_to_string(&out).unwrap();
    assert!(doc.contains("### File: a.txt\nhello"));
    assert!(!doc.contains("### File: b.bin"));
    assert!(!doc.contains(".git"));
}

#[test]
fn integration_block_count_matches_summary() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("one.txt"), "1").unwrap();
    fs::write(dir.path().join("two.md"), "2").unwrap();
    fs::write(dir.path().join("bin.dat"), b"\x00").unwrap();
    fs::write(dir.path().join("large.txt"), "L".repeat(4096)).unwrap();
    fs::write(dir.path().join("skip_venv.txt"), "v").unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("combined.txt");

    let summary = combine(
        CombineOptionsBuilder::new(dir.path())
            .output_file(&out)
            .max_file_size(1024)
            .quiet(true)
            .build(),
    )
    .unwrap();

    assert_eq!(summary.files_written, 2);
    assert_eq!(summary.excluded_binary, 1);
    assert_eq!(summary.excluded_too_large, 1);
    assert_eq!(summary.excluded_by_pattern, 1);
    assert_eq!(summary.read_errors, 0);
    let doc = fs::read_to_string(&out).unwrap();
    assert_eq!(doc.matches("### File: ").count() as u64, summary.files_written);
}

#[test]
fn integration_repeat_runs_differ_only_in_timestamp() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("stable.txt"), "same content").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/nested.md"), "nested").unwrap();
    let out_dir = tempdir().unwrap();
    let first = out_dir.path().join("first.txt");
    let second = out_dir.path().join("second.txt");

    combine(quiet_options(dir.path(), &first)).unwrap();
    combine(quiet_options(dir.path(), &second)).unwrap();

    let doc_a = fs::read_to_string(&first).unwrap();
    let doc_b = fs::read_to_string(&second).unwrap();
    let tail = |doc: &str| {
        let (header, rest) = doc.split_once('\n').unwrap();
        assert!(header.starts_with("# File Tree - Generated on "));
        rest.to_string()
    };
    assert_eq!(tail(&doc_a), tail(&doc_b));
}

#[test]
fn integration_no_tree_starts_with_first_block() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("only.txt"), "content").unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("combined.txt");

    combine(
        CombineOptionsBuilder::new(dir.path())
            .output_file(&out)
            .include_tree(false)
            .quiet(true)
            .build(),
    )
    .unwrap();

    let doc = fs::read_to_string(&out).unwrap();
    assert!(doc.starts_with("\n\n### File: only.txt\n"));
    assert!(!doc.contains("# File Tree"));
    assert!(!doc.contains("# Combined Files Content"));
}

#[test]
fn integration_tree_section_precedes_blocks() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data.txt"), "d").unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("combined.txt");

    combine(quiet_options(dir.path(), &out)).unwrap();

    let doc = fs::read_to_string(&out).unwrap();
    assert!(doc.starts_with("# File Tree - Generated on "));
    let marker = doc.find("\n\n# Combined Files Content\n").unwrap();
    assert!(marker < block_offset(&doc, "data.txt"));
    assert!(doc.contains("└── data.txt"));
}

#[test]
fn integration_pruned_directory_still_listed_in_tree() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("node_modules/dep.js"), "x").unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("combined.txt");

    let summary = combine(quiet_options(dir.path(), &out)).unwrap();

    assert_eq!(summary.files_written, 1);
    let doc = fs::read_to_string(&out).unwrap();
    // The tree lists everything non-hidden; exclusion only governs content.
    assert!(doc.contains("├── node_modules"));
    assert!(doc.contains("│   └── dep.js"));
    assert!(!doc.contains("### File: node_modules"));
    assert!(doc.contains("### File: main.rs"));
}

#[test]
fn integration_hidden_file_combined_but_not_listed() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".secrets.txt"), "token").unwrap();
    fs::write(dir.path().join("visible.txt"), "v").unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("combined.txt");

    let summary = combine(quiet_options(dir.path(), &out)).unwrap();

    assert_eq!(summary.files_written, 2);
    let doc = fs::read_to_string(&out).unwrap();
    let (tree_part, blocks) = doc.split_once("# Combined Files Content").unwrap();
    assert!(!tree_part.contains(".secrets.txt"));
    assert!(blocks.contains("### File: .secrets.txt\ntoken"));
}

#[test]
fn integration_own_files_before_subdirectory_files() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("aa")).unwrap();
    fs::write(dir.path().join("aa/inner.txt"), "i").unwrap();
    fs::write(dir.path().join("zz.txt"), "z").unwrap();
    fs::write(dir.path().join("B.txt"), "B").unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("combined.txt");

    combine(quiet_options(dir.path(), &out)).unwrap();

    let doc = fs::read_to_string(&out).unwrap();
    let b_upper = block_offset(&doc, "B.txt");
    let a_lower = block_offset(&doc, "a.txt");
    let z_last_file = block_offset(&doc, "zz.txt");
    let nested = block_offset(&doc, "aa/inner.txt");
    assert!(b_upper < a_lower, "case-sensitive order puts B.txt first");
    assert!(a_lower < z_last_file);
    assert!(z_last_file < nested, "a directory's own files come first");
}

#[test]
fn integration_size_boundary_at_eleven_mib() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("big.txt"), vec![b'x'; 11 * 1024 * 1024]).unwrap();
    let out_dir = tempdir().unwrap();

    let strict = out_dir.path().join("strict.txt");
    let summary = combine(
        CombineOptionsBuilder::new(dir.path())
            .output_file(&strict)
            .max_file_size(10 * 1024 * 1024)
            .quiet(true)
            .build(),
    )
    .unwrap();
    assert_eq!(summary.files_written, 0);
    assert_eq!(summary.excluded_too_large, 1);

    let lenient = out_dir.path().join("lenient.txt");
    let summary = combine(
        CombineOptionsBuilder::new(dir.path())
            .output_file(&lenient)
            .max_file_size(20 * 1024 * 1024)
            .quiet(true)
            .build(),
    )
    .unwrap();
    assert_eq!(summary.files_written, 1);
    assert!(fs::metadata(&lenient).unwrap().len() > 11 * 1024 * 1024);
}

#[test]
fn integration_missing_input_creates_no_output() {
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("never.txt");
    let result = combine(quiet_options(Path::new("no/such/dir"), &out));
    assert!(result.is_err());
    assert!(!out.exists());
}

#[test]
fn integration_input_file_is_rejected() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("not_a_dir.txt");
    fs::write(&file, "x").unwrap();
    let out = dir.path().join("out.txt");
    let result = combine(quiet_options(&file, &out));
    assert!(result.is_err());
    assert!(!out.exists());
}

#[test]
fn integration_output_parent_directories_created() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("f.txt"), "f").unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("deep/nested/combined.txt");

    combine(quiet_options(dir.path(), &out)).unwrap();
    assert!(out.exists());
}

#[test]
fn integration_empty_directory_still_produces_document() {
    let dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("combined.txt");

    let summary = combine(quiet_options(dir.path(), &out)).unwrap();

    assert_eq!(summary, treecat::RunSummary::default());
    let doc = fs::read_to_string(&out).unwrap();
    assert!(doc.starts_with("# File Tree - Generated on "));
    assert!(doc.contains("# Combined Files Content"));
    assert!(!doc.contains("### File: "));
}

#[test]
fn integration_custom_patterns_merge_with_defaults() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("keep.txt"), "k").unwrap();
    fs::write(dir.path().join("drop.generated.txt"), "g").unwrap();
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("node_modules/x.js"), "x").unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("combined.txt");

    let summary = combine(
        CombineOptionsBuilder::new(dir.path())
            .output_file(&out)
            .exclude(ExclusionSet::defaults().merge(["generated"]))
            .quiet(true)
            .build(),
    )
    .unwrap();

    assert_eq!(summary.files_written, 1);
    assert_eq!(summary.excluded_by_pattern, 1);
    let doc = fs::read_to_string(&out).unwrap();
    assert!(doc.contains("### File: keep.txt"));
    assert!(!doc.contains("### File: drop.generated.txt"));
    assert!(!doc.contains("### File: node_modules"));
}

#[cfg(unix)]
#[test]
fn integration_dangling_symlink_reported_and_run_continues() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("ok.txt"), "fine").unwrap();
    std::os::unix::fs::symlink("/nonexistent/target", dir.path().join("broken.txt")).unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("combined.txt");

    let summary = combine(quiet_options(dir.path(), &out)).unwrap();

    assert_eq!(summary.files_written, 1);
    assert_eq!(summary.read_errors, 1);
    let doc = fs::read_to_string(&out).unwrap();
    assert!(doc.contains("### File: ok.txt\nfine"));
    assert!(!doc.contains("### File: broken.txt"));
}

#[cfg(unix)]
#[test]
fn integration_directory_symlink_not_descended() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("real")).unwrap();
    fs::write(dir.path().join("real/inside.txt"), "once").unwrap();
    std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("alias")).unwrap();
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("combined.txt");

    let summary = combine(quiet_options(dir.path(), &out)).unwrap();

    // The linked directory is neither read as a file nor walked again.
    assert_eq!(summary.files_written, 1);
    assert_eq!(summary.read_errors, 0);
    let doc = fs::read_to_string(&out).unwrap();
    assert_eq!(doc.matches("once").count(), 1);
}
