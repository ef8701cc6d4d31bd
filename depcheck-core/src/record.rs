//! Data model for discovered deprecations.
//!
//! A [`DeprecationRecord`] is created by the doc pass, gets its declaration
//! fields filled in by the header pass, and its usage fields by the count
//! pass. Nothing is persisted; the list lives for one run.

use std::path::{Path, PathBuf};

/// Placeholder name used when a documentation marker is never followed by a
/// function signature before end-of-file.
pub const UNRESOLVED_NAME: &str = "???";

/// A single textual occurrence of a deprecated function name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageSite {
    /// File containing the occurrence.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
}

/// One deprecated function discovered during the doc pass.
#[derive(Debug, Clone)]
pub struct DeprecationRecord {
    /// Function identifier, or [`UNRESOLVED_NAME`] if no signature followed
    /// the marker.
    pub function: String,
    /// File containing the documentation deprecation marker.
    pub doc_file: PathBuf,
    /// Line (1-indexed) of the documentation marker.
    pub doc_line: usize,
    /// Line where the bound function signature began, if one was found.
    pub signature_line: Option<usize>,
    /// Header file of the matched declaration (set by the header pass,
    /// last match wins).
    pub header_file: Option<PathBuf>,
    /// Line of the matched declaration.
    pub header_line: Option<usize>,
    /// True once recorded; kept explicit for reporting symmetry.
    pub doc_deprecated: bool,
    /// Whether the matched declaration carries the code-level annotation.
    pub code_annotated: bool,
    /// Total textual usages across both scanned trees.
    pub usage_count: usize,
    /// Usage sites in file-then-line order.
    pub usage_sites: Vec<UsageSite>,
}

impl DeprecationRecord {
    /// Creates a record for a marker found at `doc_line` of `doc_file`.
    ///
    /// The function name starts unresolved; the doc pass binds it when the
    /// following signature line is found.
    pub fn new(doc_file: impl Into<PathBuf>, doc_line: usize) -> Self {
        Self {
            function: UNRESOLVED_NAME.to_string(),
            doc_file: doc_file.into(),
            doc_line,
            signature_line: None,
            header_file: None,
            header_line: None,
            doc_deprecated: true,
            code_annotated: false,
            usage_count: 0,
            usage_sites: Vec::new(),
        }
    }

    /// Whether the doc pass managed to bind a function name.
    pub fn is_resolved(&self) -> bool {
        self.function != UNRESOLVED_NAME
    }

    /// Whether the header pass found a declaration anywhere.
    pub fn has_declaration(&self) -> bool {
        self.header_file.is_some()
    }

    /// Appends a usage site and bumps the count.
    pub fn add_usage(&mut self, file: &Path, line: usize) {
        self.usage_sites.push(UsageSite {
            file: file.to_path_buf(),
            line,
        });
        self.usage_count += 1;
    }
}
