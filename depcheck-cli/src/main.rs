//! depcheck CLI - checks documented deprecations against code annotations.
//!
//! Searches a source tree for functions documented as deprecated, verifies
//! that their declarations in the header tree carry the code-level
//! deprecation annotation, and counts remaining textual usages of each.
//!
//! Exit code is always 0; problems are printed, not surfaced via the exit
//! status.

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use depcheck_core::{
    count_trees, default_extensions, init_structured_logging, load_config, print_report,
    scan_tree, verify_tree, DEFAULT_ANNOTATION, DEFAULT_USAGE_THRESHOLD,
};

#[derive(Parser, Debug)]
#[command(
    author,
    about = "Checks that functions documented as deprecated are annotated as such in the code",
    disable_version_flag = true
)]
pub struct Cli {
    /// Enable verbose tracing
    #[arg(short = 'v')]
    verbose: bool,

    /// Disable verbose tracing (wins over -v)
    #[arg(short = 'V')]
    no_verbose: bool,

    /// Force colorized output (the default)
    #[arg(short = 'c')]
    color: bool,

    /// Disable colorized output (wins over -c)
    #[arg(short = 'C')]
    no_color: bool,

    /// Annotation token expected on deprecated declarations
    #[arg(long, value_name = "TOKEN")]
    annotation: Option<String>,

    /// Directory scanned for documentation markers [default: src]
    source_dir: Option<String>,

    /// Directory scanned for declarations [default: include]
    header_dir: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Initialize structured logging (JSON to stderr, respects RUST_LOG).
    let verbose = cli.verbose && !cli.no_verbose;
    init_structured_logging(verbose);

    // 2. Load depcheck.toml if present (safe - don't fail on config errors).
    let config = match load_config(Path::new(".")) {
        Ok(cfg) => cfg.unwrap_or_default(),
        Err(e) => {
            eprintln!("[WARN] config load failed: {}", e);
            Default::default()
        }
    };

    // 3. Resolve settings: CLI > config > built-in defaults.
    let source_dir = cli
        .source_dir
        .or(config.source_dir)
        .unwrap_or_else(|| "src".to_string());
    let header_dir = cli
        .header_dir
        .or(config.header_dir)
        .unwrap_or_else(|| "include".to_string());
    let annotation = cli
        .annotation
        .or(config.annotation)
        .unwrap_or_else(|| DEFAULT_ANNOTATION.to_string());
    let extensions = config.extensions.unwrap_or_else(default_extensions);
    let threshold = config.usage_threshold.unwrap_or(DEFAULT_USAGE_THRESHOLD);
    let color = !cli.no_color;

    // 4. Doc pass: find documented deprecations in the source tree.
    println!("Searching for deprecated functions in the documentation...");
    let mut records = scan_tree(Path::new(&source_dir), &extensions);
    println!("Done, {} deprecation(s) found.", records.len());

    if records.is_empty() {
        return Ok(());
    }

    // 5. Header pass: check for corresponding code annotations.
    println!("Checking for corresponding code deprecations...");
    verify_tree(Path::new(&header_dir), &extensions, &annotation, &mut records);

    // 6. Count pass: usages across both trees.
    let roots: [std::path::PathBuf; 2] = [source_dir.into(), header_dir.into()];
    count_trees(&roots, &extensions, &mut records);

    // 7. Report per-record verdicts and the aggregate summary.
    let summary = print_report(&records, threshold, color);
    println!(
        "Done, {} matches found ({} missing), {} missing deprecation(s).",
        summary.matched, summary.unmatched, summary.missing_annotations
    );

    // Errors are diagnostics, not failures: always exit 0.
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["depcheck"]);
        assert!(!cli.verbose);
        assert!(!cli.no_color);
        assert!(cli.source_dir.is_none());
        assert!(cli.header_dir.is_none());
    }

    #[test]
    fn test_cli_flags_and_positionals() {
        let cli = Cli::parse_from(["depcheck", "-v", "-C", "sources", "headers"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.source_dir.as_deref(), Some("sources"));
        assert_eq!(cli.header_dir.as_deref(), Some("headers"));
    }

    #[test]
    fn test_cli_disable_wins() {
        let cli = Cli::parse_from(["depcheck", "-v", "-V"]);
        assert!(cli.verbose && cli.no_verbose);
        // Effective verbosity is off when both are given.
        assert!(!(cli.verbose && !cli.no_verbose));
    }

    #[test]
    fn test_cli_annotation_option() {
        let cli = Cli::parse_from(["depcheck", "--annotation", "SCE_GNUC_DEPRECATED"]);
        assert_eq!(cli.annotation.as_deref(), Some("SCE_GNUC_DEPRECATED"));
    }
}
