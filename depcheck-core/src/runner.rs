//! Builder API for running the full check pipeline.
//!
//! Provides a fluent interface over the three passes:
//!
//! ```rust,ignore
//! use depcheck_core::prelude::*;
//!
//! let result = Depcheck::new("src", "include")
//!     .annotation("SCE_GNUC_DEPRECATED")
//!     .usage_threshold(2)
//!     .run();
//!
//! for record in &result.records {
//!     println!("{}: annotated={}", record.function, record.code_annotated);
//! }
//! ```
//!
//! The passes are strictly sequential: the doc pass produces the record
//! list, then the header pass mutates annotation fields, then the count
//! pass mutates usage fields. Per-file errors are reported and skipped
//! inside the passes, so `run` itself cannot fail.

use std::path::PathBuf;

use crate::config::DEFAULT_ANNOTATION;
use crate::record::DeprecationRecord;
use crate::report::{self, ReportSummary, DEFAULT_USAGE_THRESHOLD};
use crate::scan::default_extensions;
use crate::{countpass, docpass, headerpass};

/// Builder for configuring a deprecation check run.
#[derive(Debug, Clone)]
pub struct Depcheck {
    /// Tree scanned for documentation markers.
    source_dir: PathBuf,

    /// Tree scanned for declarations.
    header_dir: PathBuf,

    /// Annotation token expected on deprecated declarations.
    annotation: String,

    /// Extensions recognized while walking both trees.
    extensions: Vec<String>,

    /// Maximum acceptable usage count.
    usage_threshold: usize,
}

impl Depcheck {
    /// Create a new check for the given source and header trees.
    pub fn new(source_dir: impl Into<PathBuf>, header_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            header_dir: header_dir.into(),
            annotation: DEFAULT_ANNOTATION.to_string(),
            extensions: default_extensions(),
            usage_threshold: DEFAULT_USAGE_THRESHOLD,
        }
    }

    /// Set the code-side annotation token.
    pub fn annotation(mut self, token: impl Into<String>) -> Self {
        self.annotation = token.into();
        self
    }

    /// Replace the recognized file extensions.
    pub fn extensions(mut self, extensions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the maximum acceptable usage count.
    pub fn usage_threshold(mut self, threshold: usize) -> Self {
        self.usage_threshold = threshold;
        self
    }

    /// Run the doc, header, and count passes and return the results.
    pub fn run(&self) -> CheckResult {
        // 1. Doc pass: extract records from the source tree.
        let mut records = docpass::scan_tree(&self.source_dir, &self.extensions);

        if !records.is_empty() {
            // 2. Header pass: verify annotations in the header tree.
            headerpass::verify_tree(
                &self.header_dir,
                &self.extensions,
                &self.annotation,
                &mut records,
            );

            // 3. Count pass: usages across both trees.
            let roots = [self.source_dir.clone(), self.header_dir.clone()];
            countpass::count_trees(&roots, &self.extensions, &mut records);
        }

        CheckResult {
            records,
            usage_threshold: self.usage_threshold,
        }
    }
}

/// Result of a full check run.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// All records, in file-then-line order of the doc pass.
    pub records: Vec<DeprecationRecord>,

    /// Threshold the run was configured with.
    pub usage_threshold: usize,
}

impl CheckResult {
    /// Aggregate pass/fail counts.
    pub fn summary(&self) -> ReportSummary {
        report::summarize(&self.records, self.usage_threshold)
    }

    /// Whether every record is annotated and within the usage threshold.
    pub fn all_ok(&self) -> bool {
        self.records
            .iter()
            .all(|r| report::record_ok(r, self.usage_threshold))
    }
}
