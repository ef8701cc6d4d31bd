//! Configuration loading from depcheck.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Default annotation token expected on deprecated declarations.
pub const DEFAULT_ANNOTATION: &str = "DEPRECATED";

/// Main configuration structure for depcheck.toml.
///
/// Every field is optional; command-line arguments take precedence and
/// built-in defaults fill the rest.
#[derive(Debug, Deserialize, Default)]
pub struct DepcheckConfig {
    /// Directory scanned for documentation deprecation markers.
    pub source_dir: Option<String>,
    /// Directory scanned for declarations.
    pub header_dir: Option<String>,
    /// Annotation token expected on deprecated declarations.
    pub annotation: Option<String>,
    /// File extensions to scan (without the dot).
    pub extensions: Option<Vec<String>>,
    /// Maximum acceptable usage count per deprecated function.
    pub usage_threshold: Option<usize>,
}

/// Loads configuration from depcheck.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<DepcheckConfig>> {
    let path = root.join("depcheck.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid depcheck.toml")?;
    Ok(Some(cfg))
}
