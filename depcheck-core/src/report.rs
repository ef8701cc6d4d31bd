//! Per-function verdict reporting with colorized output.
//!
//! A record passes only when its declaration carries the code-level
//! annotation AND its usage count stays at or below the threshold. The
//! default threshold of 2 admits exactly the declaration and the definition;
//! anything above that means real call sites still exist.

use colored::Colorize;

use crate::record::DeprecationRecord;

/// Usage counts above this are flagged (declaration + definition = 2).
pub const DEFAULT_USAGE_THRESHOLD: usize = 2;

/// Aggregated counts over all records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Total records found by the doc pass.
    pub total: usize,
    /// Records whose declaration was located in the header tree.
    pub matched: usize,
    /// Records with no textual match anywhere (still-missing).
    pub unmatched: usize,
    /// Records located but lacking the code annotation.
    pub missing_annotations: usize,
    /// Records used more often than the threshold allows.
    pub over_threshold: usize,
    /// Records passing both checks.
    pub ok: usize,
}

/// Whether the record's usage count is within the acceptable threshold.
pub fn usage_ok(record: &DeprecationRecord, threshold: usize) -> bool {
    record.usage_count <= threshold
}

/// Overall verdict: annotated in code and usage within the threshold.
pub fn record_ok(record: &DeprecationRecord, threshold: usize) -> bool {
    record.code_annotated && usage_ok(record, threshold)
}

/// Computes the aggregate summary without printing anything.
pub fn summarize(records: &[DeprecationRecord], threshold: usize) -> ReportSummary {
    let mut summary = ReportSummary {
        total: records.len(),
        ..ReportSummary::default()
    };
    for record in records {
        if record.has_declaration() {
            summary.matched += 1;
        } else {
            summary.unmatched += 1;
        }
        if !record.code_annotated {
            summary.missing_annotations += 1;
        }
        if !usage_ok(record, threshold) {
            summary.over_threshold += 1;
        }
        if record_ok(record, threshold) {
            summary.ok += 1;
        }
    }
    summary
}

/// Prints one verdict line per record plus diagnostic detail, and returns
/// the aggregate summary.
///
/// With `color` disabled, plain text goes out instead of ANSI sequences.
pub fn print_report(records: &[DeprecationRecord], threshold: usize, color: bool) -> ReportSummary {
    colored::control::set_override(color);

    for record in records {
        let status = if record_ok(record, threshold) {
            " OK ".green().bold()
        } else {
            "FAIL".red().bold()
        };
        println!(
            "[{}] {}() ({}:{}, {} use(s))",
            status,
            record.function,
            record.doc_file.display(),
            record.doc_line,
            record.usage_count
        );

        if !record.has_declaration() {
            println!("       no declaration found in header tree");
        } else if !record.code_annotated {
            // Both set together by the header pass; the unwraps cannot fire.
            if let (Some(file), Some(line)) = (&record.header_file, record.header_line) {
                println!(
                    "       {}:{}::{}() not marked as deprecated",
                    file.display(),
                    line,
                    record.function
                );
            }
        }

        if !usage_ok(record, threshold) {
            println!(
                "       used {} times (threshold {}):",
                record.usage_count, threshold
            );
            for site in &record.usage_sites {
                println!("         {}:{}", site.file.display(), site.line);
            }
        }
    }

    summarize(records, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DeprecationRecord;
    use std::path::Path;

    fn record_for(name: &str) -> DeprecationRecord {
        let mut rec = DeprecationRecord::new("src/a.c", 1);
        rec.function = name.to_string();
        rec
    }

    #[test]
    fn test_usage_within_threshold_is_ok() {
        let mut rec = record_for("foo");
        rec.code_annotated = true;
        rec.add_usage(Path::new("src/a.c"), 3);
        rec.add_usage(Path::new("include/a.h"), 10);

        assert!(usage_ok(&rec, DEFAULT_USAGE_THRESHOLD));
        assert!(record_ok(&rec, DEFAULT_USAGE_THRESHOLD));
    }

    #[test]
    fn test_third_usage_fails_the_record() {
        let mut rec = record_for("foo");
        rec.code_annotated = true;
        rec.add_usage(Path::new("src/a.c"), 3);
        rec.add_usage(Path::new("include/a.h"), 10);
        rec.add_usage(Path::new("src/b.c"), 42);

        assert!(!usage_ok(&rec, DEFAULT_USAGE_THRESHOLD));
        assert!(!record_ok(&rec, DEFAULT_USAGE_THRESHOLD));
    }

    #[test]
    fn test_missing_annotation_fails_even_with_low_usage() {
        let rec = record_for("foo");
        assert!(usage_ok(&rec, DEFAULT_USAGE_THRESHOLD));
        assert!(!record_ok(&rec, DEFAULT_USAGE_THRESHOLD));
    }

    #[test]
    fn test_summarize_counts() {
        let mut good = record_for("good");
        good.code_annotated = true;
        good.header_file = Some("include/a.h".into());
        good.header_line = Some(1);

        let mut noisy = record_for("noisy");
        noisy.code_annotated = true;
        noisy.header_file = Some("include/a.h".into());
        noisy.header_line = Some(2);
        for line in 0..3 {
            noisy.add_usage(Path::new("src/a.c"), line + 1);
        }

        let unmatched = record_for("ghost");

        let summary = summarize(&[good, noisy, unmatched], DEFAULT_USAGE_THRESHOLD);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.matched, 2);
        assert_eq!(summary.unmatched, 1);
        assert_eq!(summary.missing_annotations, 1);
        assert_eq!(summary.over_threshold, 1);
        assert_eq!(summary.ok, 1);
    }
}
