//! Ranking of raw value scores.

use crate::domain::models::{RankedValue, ValueScores};

/// The `n` highest raw scores, descending.
///
/// Equal scores keep value declaration order.
pub fn top_values(raw: &ValueScores, n: usize) -> Vec<RankedValue> {
    let mut ranked: Vec<RankedValue> = raw
        .iter()
        .map(|(value, score)| RankedValue { value, score })
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(n);
    ranked
}
