//! depcheck-core: deprecation cross-referencing library for C codebases.
//!
//! This library checks that functions documented as deprecated (with a
//! `\deprecated` or `@deprecated` marker in their comments) are also marked
//! as deprecated at the code level, and estimates how often they are still
//! used.
//!
//! # How it works
//!
//! Three sequential passes over the project trees:
//!
//! - **Doc pass**: walks the source tree and extracts one
//!   [`DeprecationRecord`] per documentation marker, bound to the function
//!   signature that follows it.
//! - **Header pass**: walks the header tree and checks each recorded
//!   function's declaration for the code-level annotation token.
//! - **Count pass**: walks both trees and counts word-boundary occurrences
//!   of each function name, collecting usage sites.
//!
//! The scanning is deliberately line-oriented pattern matching, not a C
//! parser; occasional false positives and negatives are an accepted
//! trade-off for simplicity.
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use depcheck_core::prelude::*;
//!
//! let result = Depcheck::new("src", "include")
//!     .annotation("SCE_GNUC_DEPRECATED")
//!     .run();
//!
//! print_report(&result.records, result.usage_threshold, true);
//! ```
//!
//! # Module Organization
//!
//! - [`record`]: the `DeprecationRecord` data model
//! - [`patterns`]: pre-compiled scanning regexes
//! - [`scan`]: deterministic file discovery
//! - [`docpass`], [`headerpass`], [`countpass`]: the three passes
//! - [`report`]: verdicts, summaries, colorized output
//! - [`runner`]: builder API over the whole pipeline
//! - [`config`]: depcheck.toml loading
//! - [`error`]: typed error handling
//! - [`logging`]: tracing subscriber setup

pub mod config;
pub mod countpass;
pub mod docpass;
pub mod error;
pub mod headerpass;
pub mod logging;
pub mod patterns;
pub mod prelude;
pub mod record;
pub mod report;
pub mod runner;
pub mod scan;

// Error types
pub use error::{DepcheckError, DepcheckResult, IoResultExt};

// Data model
pub use record::{DeprecationRecord, UsageSite, UNRESOLVED_NAME};

// Passes
pub use countpass::{count_trees, count_usages_in};
pub use docpass::{find_deprecated, find_deprecated_in, scan_tree};
pub use headerpass::{verify_records_in, verify_tree};

// File scanning
pub use scan::{default_extensions, gather_source_files, DEFAULT_EXTENSIONS};

// Reporting
pub use report::{
    print_report, record_ok, summarize, usage_ok, ReportSummary, DEFAULT_USAGE_THRESHOLD,
};

// Configuration
pub use config::{load_config, DepcheckConfig, DEFAULT_ANNOTATION};

// Logging
pub use logging::init_structured_logging;

// Builder API
pub use runner::{CheckResult, Depcheck};

#[cfg(test)]
mod tests;
