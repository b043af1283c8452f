//! Scoring results handed back to the caller.

use serde::{Deserialize, Serialize};

use super::allocation::AllocationCategory;
use super::answer::Contradiction;
use super::archetype::Archetype;
use super::session::SessionStats;
use super::value::{NormalizedScores, Value, ValueScores};

/// A value and its raw score, as returned by top-N ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedValue {
    pub value: Value,
    pub score: u32,
}

/// How strongly a normalized profile matches one archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeAffinity {
    pub archetype_id: String,
    pub score: f64,
}

/// Everything derived from one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileReport {
    /// Track whose baseline was used, `None` for the overall baseline
    pub active_track: Option<AllocationCategory>,
    pub raw: ValueScores,
    pub normalized: NormalizedScores,
    pub archetype: Archetype,
    pub clash: Option<Archetype>,
    pub vibe: Option<Archetype>,
    /// Affinity for every archetype in catalog order
    pub affinities: Vec<ArchetypeAffinity>,
    pub contradictions: Vec<Contradiction>,
    pub top_values: Vec<RankedValue>,
    pub stats: SessionStats,
}
