//! RuleBox — a rule-driven text classifier.
//!
//! Given a catalog of named labels, each defined by a boolean combination of
//! regex predicates, RuleBox determines which labels apply to a string or a
//! batch of strings. The public surface is intentionally small: two
//! constructors and two evaluation entry points (see [`RuleBox`]).
//!
//! ```
//! use rulebox::RuleBox;
//!
//! let json = r#"[
//!     {"label": "greeting", "rule": {"or_patterns": [{"pattern": "\\bhello\\b", "flags": ["i"]}]}}
//! ]"#;
//! let rulebox = RuleBox::from_json(json).unwrap();
//! assert_eq!(rulebox.assign_labels("Hello world"), vec!["greeting".to_string()]);
//! assert!(rulebox.assign_labels("goodbye").is_empty());
//! ```
//!
//! ## Module map
//!
//! - `schema`: the on-wire JSON shape and its deserialization into an
//!   uncompiled catalog.
//! - `flags`: the closed `{i,m,s,x,U}` flag enumeration.
//! - `compiled`: regex compilation and the immutable, `Send + Sync` compiled
//!   catalog that evaluation runs against.
//! - `evaluator`: single-input evaluation (AND → NOT → OR, short-circuited,
//!   in catalog declaration order).
//! - `batch`: data-parallel evaluation across an input sequence, preserving
//!   positional correspondence.
//! - `error`: the construction-time error taxonomy.

mod batch;
mod compiled;
pub mod error;
mod evaluator;
mod flags;
mod schema;

use std::path::Path;

pub use error::RuleBoxError;
pub use evaluator::LabelList;
pub use flags::PatternFlags;

/// A compiled, immutable rule catalog.
///
/// Construction (`from_path`/`from_json`) validates the JSON schema, rejects
/// unknown flag tokens, and compiles every regex; the first failure aborts
/// construction and no partial `RuleBox` is ever returned. Once built, a
/// `RuleBox` is opaque, has no inspectable state, and evaluation against it
/// is infallible and side-effect free.
#[derive(Debug)]
pub struct RuleBox {
    catalog: compiled::Catalog,
}

impl RuleBox {
    /// Load and compile a rule catalog from a filesystem path containing
    /// UTF-8 JSON. Fails with [`RuleBoxError::IoFailure`] if the
    /// path cannot be read, or with a schema/flag/regex error if the content
    /// is invalid.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RuleBoxError> {
        let raw = schema::parse_path(path.as_ref())?;
        let catalog = compiled::Catalog::compile(&raw)?;
        Ok(RuleBox { catalog })
    }

    /// Compile a rule catalog from an in-memory JSON string.
    pub fn from_json(text: &str) -> Result<Self, RuleBoxError> {
        let raw = schema::parse_json(text)?;
        let catalog = compiled::Catalog::compile(&raw)?;
        Ok(RuleBox { catalog })
    }

    /// Evaluate `text` and return the labels of every rule that fired, in
    /// catalog declaration order. Infallible: evaluation cannot fail once the
    /// catalog is built.
    pub fn assign_labels(&self, text: &str) -> LabelList {
        evaluator::evaluate(&self.catalog, text)
    }

    /// Evaluate each element of `texts` against the catalog, preserving input
    /// order 1:1: `assign_labels_vector(xs)[i] == assign_labels(xs[i])` for
    /// every `i`. May process inputs in parallel across worker threads; the
    /// output is identical regardless of scheduling.
    pub fn assign_labels_vector<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<LabelList> {
        batch::evaluate_batch(&self.catalog, texts)
    }
}
