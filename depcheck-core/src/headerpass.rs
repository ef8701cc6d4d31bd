//! Header pass: verifies code-level deprecation annotations.
//!
//! For each resolved record, a line where the function name appears followed
//! by whitespace or an opening parenthesis is treated as a declaration site.
//! Declarations may span multiple lines, so the scan continues to the
//! terminator line (`)` or whitespace, optional annotation token, optional
//! whitespace, `;`) before deciding whether the annotation is present.
//!
//! Every textual match overwrites the record's declaration fields, so a
//! function declared multiple times keeps the last match. Records with no
//! match anywhere keep their initial "not annotated, unknown location"
//! state and are reported as still-missing.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::patterns;
use crate::record::DeprecationRecord;
use crate::scan::gather_source_files;

/// Checks one file's content against every resolved record.
pub fn verify_records_in(
    path: &Path,
    content: &str,
    annotation: &str,
    records: &mut [DeprecationRecord],
) {
    let terminator = match patterns::terminator_for(annotation) {
        Ok(re) => re,
        Err(e) => {
            eprintln!("[WARN] invalid annotation token '{}': {}", annotation, e);
            return;
        }
    };
    let lines: Vec<&str> = content.lines().collect();

    for record in records.iter_mut().filter(|r| r.is_resolved()) {
        let declaration = match patterns::declaration_for(&record.function) {
            Ok(re) => re,
            Err(_) => continue,
        };

        let mut i = 0;
        while i < lines.len() {
            if !declaration.is_match(lines[i]) {
                i += 1;
                continue;
            }

            let decl_line = i + 1;
            // Scan forward (starting on the declaration line itself) for the
            // statement terminator; the declaration may span lines.
            let mut annotated = false;
            let mut j = i;
            while j < lines.len() {
                if let Some(caps) = terminator.captures(lines[j]) {
                    annotated = caps.get(1).is_some();
                    break;
                }
                j += 1;
            }

            record.header_file = Some(path.to_path_buf());
            record.header_line = Some(decl_line);
            record.code_annotated = annotated;

            debug!(
                file = %path.display(),
                function = %record.function,
                line = decl_line,
                annotated,
                "declaration matched"
            );

            // Resume after the terminator (or at end-of-file).
            i = j + 1;
        }
    }
}

/// Walks the header tree and verifies every record against each file.
///
/// Unreadable files are reported to stderr and skipped.
pub fn verify_tree(root: &Path, extensions: &[String], annotation: &str, records: &mut [DeprecationRecord]) {
    let files = match gather_source_files(root, extensions) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("[WARN] failed to walk '{}': {}", root.display(), e);
            return;
        }
    };

    for file in &files {
        match fs::read_to_string(file) {
            Ok(content) => verify_records_in(file, &content, annotation, records),
            Err(e) => eprintln!("[WARN] I/O error at {}: {}", file.display(), e),
        }
    }
}
