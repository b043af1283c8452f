//! Score normalization against precomputed baselines.

use super::track_resolver::active_track;
use crate::domain::models::{Answer, Baselines, NormalizedScores, ValueScores};

/// Baseline used for a given answer set.
///
/// The active track's ceiling when the answers name one, the overall ceiling
/// otherwise (including when there are no answers at all).
pub fn baseline_for<'b>(baselines: &'b Baselines, answers: &[Answer]) -> &'b ValueScores {
    if answers.is_empty() {
        return baselines.overall();
    }
    baselines.for_track(active_track(answers))
}

/// Divide each raw score by its baseline, capped at 1.0.
///
/// A zero baseline yields 0 rather than NaN or infinity.
pub fn normalize(raw: &ValueScores, baseline: &ValueScores) -> NormalizedScores {
    raw.zip_with(baseline, |score, ceiling| {
        if ceiling == 0 {
            0.0
        } else {
            (f64::from(score) / f64::from(ceiling)).min(1.0)
        }
    })
}

/// Normalize raw scores using the baseline selected for `answers`.
pub fn normalize_scores(
    raw: &ValueScores,
    answers: &[Answer],
    baselines: &Baselines,
) -> NormalizedScores {
    normalize(raw, baseline_for(baselines, answers))
}

/// Per-value contradiction thresholds: `max(1, floor(baseline * ratio))`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn contradiction_thresholds(baseline: &ValueScores, ratio: f64) -> ValueScores {
    baseline.map(|_, ceiling| ((f64::from(ceiling) * ratio).floor() as u32).max(1))
}
