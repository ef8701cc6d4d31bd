//! Pre-compiled regular expressions for line-oriented scanning.
//!
//! These are deliberately textual heuristics, not a C parser; unusual
//! formatting can produce false positives or negatives, which is an accepted
//! limitation of the design.
//!
//! Fixed patterns are compiled once behind `OnceLock`; per-function patterns
//! (declaration, terminator, usage) are built on demand with the identifier
//! escaped.

use regex::Regex;
use std::sync::OnceLock;

/// Matches a documentation deprecation marker: `\deprecated` or
/// `@deprecated` anywhere on the line.
pub fn deprecation_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\\@]deprecated").expect("Hardcoded regex pattern is valid"))
}

/// Matches a function signature line and captures the identifier.
///
/// The line must not start with a space (rules out doc-comment bodies),
/// and must contain whitespace, an identifier, optional whitespace, an
/// opening parenthesis, and at least one non-`)` character after it
/// (rules out empty `()` mentions).
pub fn function_signature() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^ ].*[ \t]([A-Za-z0-9_]+)[ \t]*\([^)]")
            .expect("Hardcoded regex pattern is valid")
    })
}

/// Builds the declaration pattern for one function: the identifier followed
/// by whitespace or an opening parenthesis.
pub fn declaration_for(name: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"{}[ \t(]", regex::escape(name)))
}

/// Builds the declaration-terminator pattern: a closing parenthesis or
/// whitespace, optionally the annotation token (capture group 1), optional
/// whitespace, then the statement terminator `;`.
pub fn terminator_for(annotation: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"(?:\)|[ \t])({})?[ \t]*;",
        regex::escape(annotation)
    ))
}

/// Builds the word-boundary usage pattern for one function name.
///
/// Identifiers are `[A-Za-z0-9_]+`, so `\b` is exactly the
/// non-identifier-character boundary the count pass needs.
pub fn usage_for(name: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\b{}\b", regex::escape(name)))
}
