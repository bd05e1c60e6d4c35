//! Single-input rule evaluation.
//!
//! One rule at a time, in declaration order, with per-rule short-circuit on
//! the first failing clause. There is no stash, no fixpoint, no dependency
//! gating — a rule's firing depends only on the raw input text.

use crate::compiled::{Catalog, CompiledPredicate};

/// Ordered list of labels assigned to one input, in catalog declaration
/// order. Duplicates are preserved if two rules share a label.
pub type LabelList = Vec<String>;

/// `true` iff every present clause of `predicate` is satisfied by `input`.
///
/// Evaluation order (and_patterns, then not_patterns, then or_patterns) is an
/// implementation choice made to maximize early rejection; the three clauses
/// commute in outcome, so any order that preserves the per-clause semantics
/// below produces an identical decision.
fn predicate_fires(predicate: &CompiledPredicate, input: &str) -> bool {
    if !predicate.and_patterns.is_empty() && !predicate.and_patterns.iter().all(|p| p.is_match(input)) {
        return false;
    }
    if !predicate.not_patterns.is_empty() && predicate.not_patterns.iter().any(|p| p.is_match(input)) {
        return false;
    }
    if !predicate.or_patterns.is_empty() && !predicate.or_patterns.iter().any(|p| p.is_match(input)) {
        return false;
    }
    true
}

/// Evaluate `input` against `catalog`, returning the labels of every rule
/// that fired, in catalog declaration order. Pure and idempotent: evaluation
/// never mutates `catalog` or any shared state.
pub fn evaluate(catalog: &Catalog, input: &str) -> LabelList {
    catalog.rules.iter().filter(|rule| predicate_fires(&rule.predicate, input)).map(|rule| rule.label.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::parse_json;

    fn eval(json: &str, input: &str) -> LabelList {
        let raw = parse_json(json).unwrap();
        let catalog = Catalog::compile(&raw).unwrap();
        evaluate(&catalog, input)
    }

    #[test]
    fn empty_catalog_yields_empty_labels() {
        assert_eq!(eval("[]", "anything"), Vec::<String>::new());
    }

    #[test]
    fn rule_with_no_clauses_fires_unconditionally() {
        assert_eq!(eval(r#"[{"label": "always"}]"#, ""), vec!["always"]);
        assert_eq!(eval(r#"[{"label": "always"}]"#, "whatever"), vec!["always"]);
    }

    #[test]
    fn or_patterns_fires_on_any_match() {
        let json = r#"[{"label": "g", "rule": {"or_patterns": [{"pattern": "P"}, {"pattern": "Q"}]}}]"#;
        assert_eq!(eval(json, "xPx"), vec!["g"]);
        assert_eq!(eval(json, "xQx"), vec!["g"]);
        assert_eq!(eval(json, "xRx"), Vec::<String>::new());
    }

    #[test]
    fn and_patterns_fires_only_if_all_match() {
        let json = r#"[{"label": "g", "rule": {"and_patterns": [{"pattern": "P"}, {"pattern": "Q"}]}}]"#;
        assert_eq!(eval(json, "PQ"), vec!["g"]);
        assert_eq!(eval(json, "P"), Vec::<String>::new());
        assert_eq!(eval(json, "Q"), Vec::<String>::new());
    }

    #[test]
    fn not_patterns_fires_only_if_none_match() {
        let json = r#"[{"label": "g", "rule": {"not_patterns": [{"pattern": "P"}, {"pattern": "Q"}]}}]"#;
        assert_eq!(eval(json, "clean"), vec!["g"]);
        assert_eq!(eval(json, "has P"), Vec::<String>::new());
        assert_eq!(eval(json, "has Q"), Vec::<String>::new());
    }

    #[test]
    fn empty_clause_list_is_vacuously_true() {
        let with_empty =
            r#"[{"label": "g", "rule": {"or_patterns": [{"pattern": "P"}], "and_patterns": [], "not_patterns": []}}]"#;
        let without_empty = r#"[{"label": "g", "rule": {"or_patterns": [{"pattern": "P"}]}}]"#;
        assert_eq!(eval(with_empty, "xPx"), eval(without_empty, "xPx"));
        assert_eq!(eval(with_empty, "xQx"), eval(without_empty, "xQx"));
    }

    #[test]
    fn empty_string_matches_star_pattern() {
        let json = r#"[{"label": "g", "rule": {"or_patterns": [{"pattern": "a*"}]}}]"#;
        assert_eq!(eval(json, ""), vec!["g"]);
    }

    #[test]
    fn duplicate_labels_across_rules_are_preserved() {
        let json = r#"[
            {"label": "dup", "rule": {"or_patterns": [{"pattern": "x"}]}},
            {"label": "dup", "rule": {"or_patterns": [{"pattern": "y"}]}}
        ]"#;
        assert_eq!(eval(json, "xy"), vec!["dup", "dup"]);
    }

    #[test]
    fn output_order_follows_catalog_declaration_order() {
        let json = r#"[
            {"label": "second", "rule": {"or_patterns": [{"pattern": "b"}]}},
            {"label": "first", "rule": {"or_patterns": [{"pattern": "a"}]}}
        ]"#;
        assert_eq!(eval(json, "ab"), vec!["second", "first"]);
    }

    #[test]
    fn handles_multi_byte_input_without_splitting_code_points() {
        let json = r#"[{"label": "g", "rule": {"or_patterns": [{"pattern": "世界"}]}}]"#;
        assert_eq!(eval(json, "Hello 世界!"), vec!["g"]);
    }
}
