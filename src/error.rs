//! Construction-time error taxonomy.
//!
//! Every error RuleBox can produce happens while building a [`crate::RuleBox`]
//! (loading, parsing, compiling). Once a catalog is built, evaluation is
//! infallible — see `src/evaluator.rs` and `src/batch.rs`.

use std::path::PathBuf;

use thiserror::Error;

/// Which clause list a pattern belongs to. Used only for diagnostics; clause
/// kind has no bearing on evaluation order (see `src/evaluator.rs`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKind {
    And,
    Or,
    Not,
}

impl std::fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ClauseKind::And => "and_patterns",
            ClauseKind::Or => "or_patterns",
            ClauseKind::Not => "not_patterns",
        };
        f.write_str(name)
    }
}

/// All failure modes RuleBox can report during catalog construction.
#[derive(Debug, Error)]
pub enum RuleBoxError {
    #[error("failed to read rule file {path}: {source}")]
    IoFailure { path: PathBuf, source: std::io::Error },

    #[error("malformed rule JSON: {source}")]
    JsonSyntax {
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid rule schema: {detail}")]
    SchemaViolation { detail: String },

    #[error(
        "unknown flag '{token}' in rule #{rule_index} {clause}[{pattern_index}] (recognized: i, m, s, x, U)"
    )]
    UnknownFlag { token: char, rule_index: usize, clause: ClauseKind, pattern_index: usize },

    #[error(
        "invalid regex in rule #{rule_index} {clause}[{pattern_index}] (pattern: {pattern:?}): {source}"
    )]
    RegexSyntax {
        rule_index: usize,
        clause: ClauseKind,
        pattern_index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, RuleBoxError>;
