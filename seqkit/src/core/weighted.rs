//! Weighted random selection by cumulative-distribution inversion.

use rand::Rng;
use tracing::debug;

use crate::core::sequence::{Sequence, coerce_list};
use crate::error::{Result, SeqError};

/// Pick a value from `(weight, value)` pairs using `selector` in `[0, 1)`.
///
/// The selector is scaled by the total weight and the first pair whose running
/// weight sum is strictly greater than that point wins. A point landing exactly
/// on a cumulative boundary belongs to the next pair, and zero-weight pairs are
/// never picked. A zero total returns `fallback`.
///
/// Weights must be non-negative. Negative weights are not checked and give
/// unspecified picks.
pub fn try_select_with_weight<'a, T: Clone + 'a>(
    seq: impl Into<Sequence<'a, (f64, T)>>,
    fallback: T,
    selector: f64,
) -> Result<T> {
    if !(0.0..1.0).contains(&selector) {
        return Err(SeqError::SelectorOutOfRange(selector));
    }

    let list = coerce_list(seq);
    let total: f64 = list.iter().map(|(weight, _)| weight).sum();
    if total == 0.0 {
        debug!(choices = list.len(), "zero total weight, using fallback");
        return Ok(fallback);
    }

    let target = selector * total;
    let mut running = 0.0f64;
    for (weight, value) in &*list {
        running += weight;
        if target < running {
            return Ok(value.clone());
        }
    }

    Err(SeqError::SelectionOverrun { target, total })
}

/// [`try_select_with_weight`] with a selector drawn uniformly from `rng`.
pub fn select_with_rng<'a, T, R>(
    rng: &mut R,
    seq: impl Into<Sequence<'a, (f64, T)>>,
    fallback: T,
) -> Result<T>
where
    T: Clone + 'a,
    R: Rng,
{
    let selector = rng.gen_range(0.0..1.0);
    try_select_with_weight(seq, fallback, selector)
}
