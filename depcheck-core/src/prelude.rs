//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use depcheck_core::prelude::*;
//! ```

// Core types
pub use crate::error::{DepcheckError, DepcheckResult};
pub use crate::record::{DeprecationRecord, UsageSite, UNRESOLVED_NAME};

// Passes
pub use crate::countpass::count_trees;
pub use crate::docpass::{find_deprecated, scan_tree};
pub use crate::headerpass::verify_tree;

// File scanning
pub use crate::scan::{default_extensions, gather_source_files};

// Reporting
pub use crate::report::{print_report, summarize, ReportSummary, DEFAULT_USAGE_THRESHOLD};

// Configuration
pub use crate::config::{load_config, DepcheckConfig, DEFAULT_ANNOTATION};

// Builder API
pub use crate::runner::{CheckResult, Depcheck};
