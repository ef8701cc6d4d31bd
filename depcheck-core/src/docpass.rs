//! Doc pass: extracts deprecation markers from documentation comments.
//!
//! A line matching the marker pattern opens a record; the scan then moves
//! forward until a function signature line binds the name. A second marker
//! before a signature is ambiguous input and aborts that file's scan with a
//! data error (records already found in the file are discarded). A marker
//! with no signature before end-of-file keeps the unresolved placeholder.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{DepcheckError, DepcheckResult, IoResultExt};
use crate::patterns;
use crate::record::DeprecationRecord;
use crate::scan::gather_source_files;

/// Scans a single file for documentation deprecation markers.
pub fn find_deprecated(path: &Path) -> DepcheckResult<Vec<DeprecationRecord>> {
    let content = fs::read_to_string(path).with_path(path)?;
    find_deprecated_in(path, &content)
}

/// Scanning core over in-memory content, separated from I/O for testability.
pub fn find_deprecated_in(path: &Path, content: &str) -> DepcheckResult<Vec<DeprecationRecord>> {
    let marker = patterns::deprecation_marker();
    let signature = patterns::function_signature();
    let mut records = Vec::new();

    let mut lines = content.lines().enumerate();
    while let Some((idx, line)) = lines.next() {
        if !marker.is_match(line) {
            continue;
        }

        let mut record = DeprecationRecord::new(path, idx + 1);
        for (next_idx, next_line) in lines.by_ref() {
            if let Some(caps) = signature.captures(next_line) {
                record.function = caps[1].to_string();
                record.signature_line = Some(next_idx + 1);
                break;
            }
            if marker.is_match(next_line) {
                return Err(DepcheckError::malformed(
                    path,
                    next_idx + 1,
                    "deprecation found before function name",
                ));
            }
        }

        debug!(
            file = %path.display(),
            function = %record.function,
            doc_line = record.doc_line,
            signature_line = ?record.signature_line,
            "deprecation marker found"
        );
        records.push(record);
    }

    Ok(records)
}

/// Walks a source tree and accumulates records from every eligible file.
///
/// Per-file failures (unreadable file, malformed ordering) are printed to
/// stderr and traversal continues with the next file; a single bad file
/// never aborts the run. A missing or unwalkable tree is reported the same
/// way and yields an empty list.
pub fn scan_tree(root: &Path, extensions: &[String]) -> Vec<DeprecationRecord> {
    let files = match gather_source_files(root, extensions) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("[WARN] failed to walk '{}': {}", root.display(), e);
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for file in &files {
        match find_deprecated(file) {
            Ok(mut found) => records.append(&mut found),
            Err(e) => eprintln!("[WARN] {}", e),
        }
    }
    records
}
