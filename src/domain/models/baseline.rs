//! Normalization baselines.
//!
//! Baselines are the highest score each value can reach on a track: the best
//! walk through its three question graphs plus the best allocation whose top
//! category is that track. They depend only on the question bank.

use serde::{Deserialize, Serialize};

use super::allocation::AllocationCategory;
use super::value::ValueScores;

/// Score ceilings for a single track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackBaseline {
    pub category: AllocationCategory,
    /// Instinct + tradeoff + deep graph maxima
    pub questions: ValueScores,
    /// Best allocation contribution among allocations topped by this category
    pub allocation: ValueScores,
    /// `questions + allocation`
    pub total: ValueScores,
}

/// Per-track and overall baselines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baselines {
    tracks: [TrackBaseline; 4],
    overall: ValueScores,
}

impl Baselines {
    /// Assemble baselines from per-track ceilings given in priority order.
    ///
    /// The overall ceiling is the elementwise max of the track totals.
    pub fn from_tracks(tracks: [TrackBaseline; 4]) -> Self {
        let overall = tracks
            .iter()
            .fold(ValueScores::zero(), |acc, track| acc.elementwise_max(&track.total));
        Self { tracks, overall }
    }

    pub const fn track(&self, category: AllocationCategory) -> &TrackBaseline {
        &self.tracks[category.index()]
    }

    pub fn tracks(&self) -> &[TrackBaseline; 4] {
        &self.tracks
    }

    pub const fn overall(&self) -> &ValueScores {
        &self.overall
    }

    /// Baseline for the given track, or the overall one when there is none.
    pub fn for_track(&self, track: Option<AllocationCategory>) -> &ValueScores {
        track.map_or(&self.overall, |category| &self.track(category).total)
    }
}
