//! End-to-end test suite for depcheck-core.

use crate::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

fn write_file(file: &Path, content: &str) {
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    fs::write(file, content).unwrap();
}

fn setup_temp_project() -> PathBuf {
    let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir()
        .join("depcheck_tests")
        .join(format!("{}_{}", timestamp, id));

    if dir.exists() {
        fs::remove_dir_all(&dir).ok();
    }
    fs::create_dir_all(dir.join("src")).unwrap();
    fs::create_dir_all(dir.join("include")).unwrap();
    dir
}

// Core Test 1: annotated and barely used -> OK
#[test]
fn test_annotated_function_within_threshold_is_ok() {
    let root = setup_temp_project();
    write_file(
        &root.join("src/a.c"),
        "/* \\deprecated use bar instead */\nvoid foo (int x)\n{\n    return;\n}\n",
    );
    write_file(
        &root.join("include/a.h"),
        "void foo (int x) DEPRECATED;\n",
    );

    let result = Depcheck::new(root.join("src"), root.join("include")).run();

    assert_eq!(result.records.len(), 1);
    let rec = &result.records[0];
    assert_eq!(rec.function, "foo");
    assert!(rec.code_annotated);
    // Declaration + definition: one use in each tree.
    assert_eq!(rec.usage_count, 2);
    assert!(result.all_ok());

    fs::remove_dir_all(&root).ok();
}

// Core Test 2: declared but not annotated -> reported missing
#[test]
fn test_unannotated_declaration_fails() {
    let root = setup_temp_project();
    write_file(
        &root.join("src/a.c"),
        "/* \\deprecated */\nvoid foo (int x)\n{\n}\n",
    );
    write_file(&root.join("include/a.h"), "void foo (int x);\n");

    let result = Depcheck::new(root.join("src"), root.join("include")).run();

    let rec = &result.records[0];
    assert!(rec.has_declaration());
    assert!(!rec.code_annotated);
    assert!(!result.all_ok());

    let summary = result.summary();
    assert_eq!(summary.matched, 1);
    assert_eq!(summary.missing_annotations, 1);
    assert_eq!(summary.ok, 0);

    fs::remove_dir_all(&root).ok();
}

// Core Test 3: a third usage pushes the record over the threshold
#[test]
fn test_extra_call_site_exceeds_threshold() {
    let root = setup_temp_project();
    write_file(
        &root.join("src/a.c"),
        "/* \\deprecated */\nvoid foo (int x)\n{\n}\n",
    );
    write_file(&root.join("src/b.c"), "    foo (5);\n");
    write_file(
        &root.join("include/a.h"),
        "void foo (int x) DEPRECATED;\n",
    );

    let result = Depcheck::new(root.join("src"), root.join("include")).run();

    let rec = &result.records[0];
    assert!(rec.code_annotated);
    assert_eq!(rec.usage_count, 3);
    assert_eq!(rec.usage_sites.len(), 3);
    assert!(!result.all_ok());

    let summary = result.summary();
    assert_eq!(summary.over_threshold, 1);

    // Sites come out in file-then-line order: src/a.c, src/b.c, include/a.h
    // (source tree is counted before the header tree).
    assert!(rec.usage_sites[0].file.ends_with("src/a.c"));
    assert!(rec.usage_sites[1].file.ends_with("src/b.c"));
    assert!(rec.usage_sites[2].file.ends_with("include/a.h"));

    fs::remove_dir_all(&root).ok();
}

// Core Test 4: a malformed file is skipped, the rest of the tree still scans
#[test]
fn test_malformed_file_does_not_abort_run() {
    let root = setup_temp_project();
    write_file(
        &root.join("src/bad.c"),
        "/* \\deprecated */\n/* \\deprecated */\nvoid mangled (int x);\n",
    );
    write_file(
        &root.join("src/good.c"),
        "/* \\deprecated */\nvoid survivor (int x)\n{\n}\n",
    );

    let records = scan_tree(&root.join("src"), &default_extensions());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].function, "survivor");

    fs::remove_dir_all(&root).ok();
}

// Core Test 5: no declaration anywhere -> still-missing
#[test]
fn test_record_with_no_declaration_is_still_missing() {
    let root = setup_temp_project();
    write_file(
        &root.join("src/a.c"),
        "/* \\deprecated */\nvoid orphan (int x)\n{\n}\n",
    );
    write_file(&root.join("include/a.h"), "void unrelated (int x);\n");

    let result = Depcheck::new(root.join("src"), root.join("include")).run();

    let rec = &result.records[0];
    assert!(!rec.has_declaration());
    assert!(!rec.code_annotated);
    assert_eq!(result.summary().unmatched, 1);

    fs::remove_dir_all(&root).ok();
}

// Core Test 6: the canonical two-line example
#[test]
fn test_marker_then_signature_example() {
    let root = setup_temp_project();
    write_file(
        &root.join("src/a.h"),
        "/* \\deprecated */\nvoid foo (int x);\n",
    );

    let records = scan_tree(&root.join("src"), &default_extensions());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].function, "foo");
    assert_eq!(records[0].doc_line, 1);
    assert_eq!(records[0].signature_line, Some(2));

    fs::remove_dir_all(&root).ok();
}

// Extended Test 1: custom annotation token via the builder
#[test]
fn test_custom_annotation_token() {
    let root = setup_temp_project();
    write_file(
        &root.join("src/a.c"),
        "/* \\deprecated */\nvoid foo (int x)\n{\n}\n",
    );
    write_file(
        &root.join("include/a.h"),
        "void foo (int x) SCE_GNUC_DEPRECATED;\n",
    );

    let default_run = Depcheck::new(root.join("src"), root.join("include")).run();
    assert!(!default_run.records[0].code_annotated);

    let custom_run = Depcheck::new(root.join("src"), root.join("include"))
        .annotation("SCE_GNUC_DEPRECATED")
        .run();
    assert!(custom_run.records[0].code_annotated);

    fs::remove_dir_all(&root).ok();
}

// Extended Test 2: multi-line declaration in the header tree
#[test]
fn test_multiline_header_declaration() {
    let root = setup_temp_project();
    write_file(
        &root.join("src/a.c"),
        "/* \\deprecated */\nvoid foo (int x, int y)\n{\n}\n",
    );
    write_file(
        &root.join("include/a.h"),
        "void foo (int x,\n          int y)\n    DEPRECATED;\n",
    );

    let result = Depcheck::new(root.join("src"), root.join("include")).run();

    let rec = &result.records[0];
    assert!(rec.code_annotated);
    assert_eq!(rec.header_line, Some(1));

    fs::remove_dir_all(&root).ok();
}

// Extended Test 3: missing trees produce an empty, error-free run
#[test]
fn test_missing_trees_yield_empty_result() {
    let root = setup_temp_project();
    let result = Depcheck::new(root.join("no_src"), root.join("no_include")).run();
    assert!(result.records.is_empty());
    assert!(result.all_ok());
    fs::remove_dir_all(&root).ok();
}

// Extended Test 4: records come out in file-then-line order
#[test]
fn test_records_in_file_then_line_order() {
    let root = setup_temp_project();
    write_file(
        &root.join("src/z.c"),
        "/* \\deprecated */\nvoid zeta (int x)\n{\n}\n",
    );
    write_file(
        &root.join("src/a.c"),
        "/* \\deprecated */\nvoid alpha (int x)\n{\n}\n/* \\deprecated */\nvoid also_alpha (int x)\n{\n}\n",
    );

    let records = scan_tree(&root.join("src"), &default_extensions());
    let names: Vec<&str> = records.iter().map(|r| r.function.as_str()).collect();
    assert_eq!(names, vec!["alpha", "also_alpha", "zeta"]);

    fs::remove_dir_all(&root).ok();
}
