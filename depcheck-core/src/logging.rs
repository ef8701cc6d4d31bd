//! Structured logging using **tracing**.
//!
//! Logs go to stderr as JSON so stdout stays clean for the report. The
//! verbose flag raises the default filter to debug for the depcheck targets;
//! `RUST_LOG` always takes precedence when set.

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing collector (subscriber).
///
/// This should be called *once* at the beginning of the application's
/// runtime.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=depcheck_core=debug`)
pub fn init_structured_logging(verbose: bool) {
    let default_filter = if verbose {
        "depcheck_core=debug,depcheck_cli=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
