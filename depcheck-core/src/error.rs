//! Typed error handling for depcheck.
//!
//! Provides structured errors that library consumers can match on,
//! with full context about what went wrong and where.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for depcheck operations.
///
/// Only two kinds occur during normal tree traversal and both are
/// recoverable: a file that cannot be read, and malformed documentation
/// ordering. Either is reported and traversal continues with the next file.
#[derive(Error, Debug)]
pub enum DepcheckError {
    /// I/O error when reading a file or walking a tree
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Malformed documentation ordering (marker before a function name)
    #[error("Invalid data in {path}: {message} at line {line}")]
    Malformed {
        path: PathBuf,
        message: String,
        /// Line number (1-indexed) of the offending marker
        line: usize,
    },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DepcheckError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a malformed-documentation error with line info.
    pub fn malformed(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            message: message.into(),
            line,
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error (traversal can continue).
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::Malformed { .. } | Self::Config { .. }
        )
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Malformed { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            Self::Internal { .. } => None,
        }
    }
}

/// Convenience type alias for depcheck results.
pub type DepcheckResult<T> = Result<T, DepcheckError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> DepcheckResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> DepcheckResult<T> {
        self.map_err(|e| DepcheckError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        let err = DepcheckError::io(
            PathBuf::from("/test/file.c"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        assert!(matches!(err, DepcheckError::Io { .. }));
        assert_eq!(err.path(), Some(&PathBuf::from("/test/file.c")));
        assert!(err.to_string().contains("/test/file.c"));
    }

    #[test]
    fn test_malformed_error_message() {
        let err = DepcheckError::malformed(
            "/src/a.c",
            42,
            "deprecation found before function name",
        );
        assert!(err.to_string().contains("line 42"));
        assert!(err.to_string().contains("before function name"));
    }

    #[test]
    fn test_is_recoverable() {
        let io = DepcheckError::io(
            PathBuf::from("x.c"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(io.is_recoverable());
        assert!(DepcheckError::malformed("x.c", 1, "bad order").is_recoverable());
        assert!(!DepcheckError::Internal {
            message: "bug".into()
        }
        .is_recoverable());
    }

    #[test]
    fn test_io_result_ext() {
        let result: std::io::Result<()> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let depcheck_result = result.with_path("/missing/file.h");
        assert!(depcheck_result.is_err());
    }
}
