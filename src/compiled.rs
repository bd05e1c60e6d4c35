//! Regex compilation and the compiled, immutable catalog.
//!
//! Turns the loosely-typed, schema-level representation into a form the
//! evaluator can run directly. Every pattern is only known at construction
//! time, so compilation happens once, eagerly, and atomically — a single
//! failing pattern aborts the whole catalog.

use regex::{Regex, RegexBuilder};

use crate::error::{ClauseKind, Result, RuleBoxError};
use crate::flags::{parse_flags, PatternFlags};
use crate::schema::{RawCatalog, RawPatternSpec, RawPredicate, RawRule};

/// A compiled regex plus nothing else — flags were already folded into the
/// `Regex` at build time, so evaluation never has to consult them again.
#[derive(Debug)]
pub struct CompiledPattern {
    regex: Regex,
}

impl CompiledPattern {
    /// Whether the pattern finds at least one match anywhere in `input`
    /// (unanchored search). Handles multi-byte UTF-8 input without splitting
    /// code points, since `regex::Regex` operates on `&str`.
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

/// A rule's predicate, compiled: each clause list becomes a `Vec` of
/// [`CompiledPattern`]s in declaration order. An empty `Vec` is vacuously
/// true, same as the uncompiled `RawPredicate`.
#[derive(Debug)]
pub struct CompiledPredicate {
    pub or_patterns: Vec<CompiledPattern>,
    pub and_patterns: Vec<CompiledPattern>,
    pub not_patterns: Vec<CompiledPattern>,
}

/// A compiled `(label, predicate)` rule.
#[derive(Debug)]
pub struct CompiledRule {
    pub label: String,
    pub predicate: CompiledPredicate,
}

/// The compiled, immutable rule catalog. Safe for concurrent read access
/// across `rayon` worker threads since `regex::Regex` is itself
/// `Send + Sync` and nothing here is mutated after construction.
#[derive(Debug)]
pub struct Catalog {
    pub rules: Vec<CompiledRule>,
}

fn compile_pattern(
    spec: &RawPatternSpec,
    rule_index: usize,
    clause: ClauseKind,
    pattern_index: usize,
) -> Result<CompiledPattern> {
    let flags = parse_flags(&spec.flags, rule_index, clause, pattern_index)?;
    let regex = build_regex(&spec.pattern, flags).map_err(|source| RuleBoxError::RegexSyntax {
        rule_index,
        clause,
        pattern_index,
        pattern: spec.pattern.clone(),
        source,
    })?;
    Ok(CompiledPattern { regex })
}

fn build_regex(pattern: &str, flags: PatternFlags) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(flags.contains(PatternFlags::CASE_INSENSITIVE))
        .multi_line(flags.contains(PatternFlags::MULTI_LINE))
        .dot_matches_new_line(flags.contains(PatternFlags::DOT_MATCHES_NL))
        .ignore_whitespace(flags.contains(PatternFlags::EXTENDED))
        .swap_greed(flags.contains(PatternFlags::SWAP_GREED))
        .build()
}

fn compile_clause(
    patterns: &[RawPatternSpec],
    rule_index: usize,
    clause: ClauseKind,
) -> Result<Vec<CompiledPattern>> {
    patterns
        .iter()
        .enumerate()
        .map(|(pattern_index, spec)| compile_pattern(spec, rule_index, clause, pattern_index))
        .collect()
}

fn compile_predicate(predicate: &RawPredicate, rule_index: usize) -> Result<CompiledPredicate> {
    Ok(CompiledPredicate {
        or_patterns: compile_clause(&predicate.or_patterns, rule_index, ClauseKind::Or)?,
        and_patterns: compile_clause(&predicate.and_patterns, rule_index, ClauseKind::And)?,
        not_patterns: compile_clause(&predicate.not_patterns, rule_index, ClauseKind::Not)?,
    })
}

fn compile_rule(rule: &RawRule, rule_index: usize) -> Result<CompiledRule> {
    Ok(CompiledRule { label: rule.label.clone(), predicate: compile_predicate(&rule.rule, rule_index)? })
}

impl Catalog {
    /// Compile every rule in `raw`, in declaration order. The first
    /// compilation failure aborts construction; no partial catalog is ever
    /// returned.
    pub fn compile(raw: &RawCatalog) -> Result<Self> {
        let rules =
            raw.rules.iter().enumerate().map(|(index, rule)| compile_rule(rule, index)).collect::<Result<Vec<_>>>()?;
        Ok(Catalog { rules })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::parse_json;

    fn compile(json: &str) -> Result<Catalog> {
        Catalog::compile(&parse_json(json).unwrap())
    }

    #[test]
    fn compiles_simple_catalog() {
        let catalog = compile(r#"[{"label": "g", "rule": {"or_patterns": [{"pattern": "\\bhello\\b"}]}}]"#).unwrap();
        assert_eq!(catalog.rules.len(), 1);
        assert_eq!(catalog.rules[0].label, "g");
    }

    #[test]
    fn invalid_regex_fails_construction_with_location() {
        let err = compile(r#"[{"label": "bad", "rule": {"or_patterns": [{"pattern": "["}]}}]"#).unwrap_err();
        match err {
            RuleBoxError::RegexSyntax { rule_index, clause, pattern_index, pattern, .. } => {
                assert_eq!(rule_index, 0);
                assert_eq!(clause, ClauseKind::Or);
                assert_eq!(pattern_index, 0);
                assert_eq!(pattern, "[");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn one_bad_pattern_aborts_whole_catalog() {
        let json = r#"[
            {"label": "good", "rule": {"or_patterns": [{"pattern": "ok"}]}},
            {"label": "bad", "rule": {"and_patterns": [{"pattern": "(("}]}}
        ]"#;
        assert!(compile(json).is_err());
    }

    #[test]
    fn case_insensitive_flag_applies() {
        let catalog = compile(r#"[{"label": "g", "rule": {"or_patterns": [{"pattern": "hello", "flags": ["i"]}]}}]"#)
            .unwrap();
        assert!(catalog.rules[0].predicate.or_patterns[0].is_match("HELLO"));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = compile(r#"[{"label": "g", "rule": {"or_patterns": [{"pattern": "hi", "flags": ["z"]}]}}]"#)
            .unwrap_err();
        assert!(matches!(err, RuleBoxError::UnknownFlag { .. }));
    }
}
