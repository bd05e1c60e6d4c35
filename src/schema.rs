//! Rule catalog schema and parsing.
//!
//! Defines the on-wire JSON shape of a rule catalog and
//! deserializes it into an in-memory, uncompiled representation. The catalog
//! is data, read once via `serde_json`, rather than code.
//!
//! Unknown top-level keys inside a rule object are ignored for forward
//! compatibility; this falls out of `serde`'s default behavior for structs
//! (no `deny_unknown_fields`) and needs no extra code.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, RuleBoxError};

/// A regex source plus its (possibly empty) flag token list, as it appears in
/// the JSON rule file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPatternSpec {
    pub pattern: String,
    #[serde(default)]
    pub flags: Vec<String>,
}

/// The boolean predicate attached to a rule: three independently-optional
/// clause lists. An absent list deserializes to an empty `Vec`, which is
/// treated identically to an explicit `[]` — both are vacuously true.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawPredicate {
    #[serde(default)]
    pub or_patterns: Vec<RawPatternSpec>,
    #[serde(default)]
    pub and_patterns: Vec<RawPatternSpec>,
    #[serde(default)]
    pub not_patterns: Vec<RawPatternSpec>,
}

/// A single `(label, predicate)` entry as it appears in the top-level JSON
/// array.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRule {
    pub label: String,
    #[serde(default)]
    pub rule: RawPredicate,
}

/// The uncompiled catalog: an ordered sequence of [`RawRule`]s, exactly as
/// parsed from JSON and not yet validated against the regex engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct RawCatalog {
    pub rules: Vec<RawRule>,
}

/// Parse a rule catalog from an in-memory JSON string.
///
/// `serde_json` reports both syntax errors (unparseable text) and schema
/// errors (missing/mistyped fields) as the same `serde_json::Error` type;
/// we split them back into [`RuleBoxError::JsonSyntax`] and
/// [`RuleBoxError::SchemaViolation`] using `Error::classify` so callers get
/// the distinction callers need.
pub fn parse_json(text: &str) -> Result<RawCatalog> {
    serde_json::from_str(text).map_err(|source| {
        if source.classify() == serde_json::error::Category::Data {
            RuleBoxError::SchemaViolation { detail: source.to_string() }
        } else {
            RuleBoxError::JsonSyntax { source }
        }
    })
}

/// Read and parse a rule catalog from a filesystem path. The file must be
/// valid UTF-8 JSON; non-UTF-8 bytes or missing/unreadable files are reported
/// as [`RuleBoxError::IoFailure`], not as `JsonSyntax`.
pub fn parse_path(path: &Path) -> Result<RawCatalog> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| RuleBoxError::IoFailure { path: path.to_path_buf(), source })?;
    parse_json(&text)
}
