//! Batch evaluation with data parallelism across inputs.
//!
//! Gates `rayon`'s `par_iter()` behind a small-input-count check and
//! otherwise falls back to a plain sequential map: below
//! [`PARALLEL_THRESHOLD`] inputs, parallel dispatch overhead isn't worth
//! paying.

use rayon::prelude::*;

use crate::compiled::Catalog;
use crate::evaluator::{evaluate, LabelList};

/// Below this many inputs, evaluate sequentially; fixed worker-dispatch
/// overhead outweighs any parallel speedup at this scale. This is a
/// performance knob only — both branches call the exact same `evaluate`
/// function, so output is bit-identical regardless of which path runs.
const PARALLEL_THRESHOLD: usize = 8;

/// Evaluate every input in `inputs` against `catalog`, preserving input order
/// 1:1: `evaluate_batch(xs)[i] == evaluate(xs[i])` for every `i`. Infallible,
/// since evaluation of a compiled catalog never fails.
pub fn evaluate_batch<S: AsRef<str> + Sync>(catalog: &Catalog, inputs: &[S]) -> Vec<LabelList> {
    if inputs.len() < PARALLEL_THRESHOLD {
        inputs.iter().map(|input| evaluate(catalog, input.as_ref())).collect()
    } else {
        inputs.par_iter().map(|input| evaluate(catalog, input.as_ref())).collect()
    }
}
