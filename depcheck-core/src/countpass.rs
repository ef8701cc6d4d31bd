//! Count pass: estimates real usage of each deprecated function.
//!
//! Both trees are re-scanned, independently of the first two passes. A usage
//! is any occurrence of the identifier at word boundaries; this is a textual
//! heuristic, not tokenization, and it deliberately counts the declaration
//! and definition lines themselves as uses. Usage counts only ever grow.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use crate::patterns;
use crate::record::DeprecationRecord;
use crate::scan::gather_source_files;

/// Counts usages of every resolved record within one file's content.
pub fn count_usages_in(path: &Path, content: &str, records: &mut [DeprecationRecord]) {
    // One compiled matcher per resolved record, reused across all lines.
    let matchers: Vec<(usize, Regex)> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.is_resolved())
        .filter_map(|(i, r)| patterns::usage_for(&r.function).ok().map(|re| (i, re)))
        .collect();

    for (idx, line) in content.lines().enumerate() {
        for (record_idx, matcher) in &matchers {
            let hits = matcher.find_iter(line).count();
            for _ in 0..hits {
                records[*record_idx].add_usage(path, idx + 1);
            }
        }
    }
}

/// Walks the given trees and accumulates usage counts for all records.
///
/// Unreadable files and unwalkable trees are reported to stderr and skipped.
pub fn count_trees(roots: &[PathBuf], extensions: &[String], records: &mut [DeprecationRecord]) {
    for root in roots {
        let files = match gather_source_files(root, extensions) {
            Ok(files) => files,
            Err(e) => {
                eprintln!("[WARN] failed to walk '{}': {}", root.display(), e);
                continue;
            }
        };

        for file in &files {
            match fs::read_to_string(file) {
                Ok(content) => count_usages_in(file, &content, records),
                Err(e) => eprintln!("[WARN] I/O error at {}: {}", file.display(), e),
            }
        }
    }

    for record in records.iter().filter(|r| r.is_resolved()) {
        debug!(
            function = %record.function,
            usages = record.usage_count,
            "usage count"
        );
    }
}
