//! Max-Score Calculator Service
//!
//! Computes the normalization baselines for a question bank:
//! - best attainable score vector for each question graph (memoized DFS)
//! - per-track sum of the instinct, tradeoff and deep graph maxima
//! - per-category allocation ceiling by brute force over the budget simplex
//! - overall ceiling as the elementwise max of the track totals
//!
//! Everything here is a pure function of static configuration.

use std::collections::HashMap;
use tracing::{debug, instrument};

use super::allocation_scorer::AllocationScorer;
use super::track_resolver::top_category;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    AllocationCategory, Baselines, QuestionBank, QuestionGraph, QuestionTrack, TrackBaseline,
    ValueScores,
};

/// Service for computing the highest score each value can reach
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxScoreCalculator {
    scorer: AllocationScorer,
}

// Standalone helper for the memoized walk (no self needed)
//
// `path` holds the questions on the current walk; meeting one of them again
// means the graph loops back on itself.
fn walk_best<'g>(
    graph: &'g QuestionGraph,
    question_id: &'g str,
    memo: &mut HashMap<&'g str, ValueScores>,
    path: &mut Vec<&'g str>,
) -> DomainResult<ValueScores> {
    if let Some(best) = memo.get(question_id) {
        return Ok(*best);
    }

    if let Some(cycle_start) = path.iter().position(|&id| id == question_id) {
        let mut cycle: Vec<String> = path[cycle_start..].iter().map(|id| (*id).to_string()).collect();
        cycle.push(question_id.to_string());
        return Err(DomainError::QuestionCycle(cycle));
    }

    // A dangling next id ends the walk
    let Some(question) = graph.question(question_id) else {
        return Ok(ValueScores::zero());
    };

    path.push(question_id);
    let mut best = ValueScores::zero();
    for option in &question.options {
        let rest = match option.next_id.as_deref() {
            Some(next_id) => walk_best(graph, next_id, memo, path)?,
            None => ValueScores::zero(),
        };
        best = best.elementwise_max(&rest.plus_delta(&option.values));
    }
    path.pop();

    memo.insert(question_id, best);
    Ok(best)
}

impl MaxScoreCalculator {
    pub const fn new() -> Self {
        Self {
            scorer: AllocationScorer::new(),
        }
    }

    /// Best attainable score vector from the root of `graph`
    ///
    /// Each value is maximized independently, so the result can exceed what
    /// any single path earns, but never falls below it.
    pub fn graph_max(&self, graph: &QuestionGraph) -> DomainResult<ValueScores> {
        let mut memo = HashMap::with_capacity(graph.questions.len());
        let mut path = Vec::new();
        walk_best(graph, &graph.root_id, &mut memo, &mut path)
    }

    /// Sum of the three graph maxima of a track
    pub fn track_max(&self, track: &QuestionTrack) -> DomainResult<ValueScores> {
        track
            .graphs()
            .try_fold(ValueScores::zero(), |acc, (_, graph)| Ok(acc + self.graph_max(graph)?))
    }

    /// Best allocation contribution among allocations whose top category is `category`
    pub fn allocation_max(&self, category: AllocationCategory) -> ValueScores {
        self.scorer
            .simplex_points()
            .iter()
            .filter(|allocation| top_category(allocation) == category)
            .fold(ValueScores::zero(), |best, allocation| {
                best.elementwise_max(&self.scorer.score(allocation))
            })
    }

    /// Ceilings for one track: question maxima plus allocation maxima
    pub fn track_baseline(
        &self,
        category: AllocationCategory,
        track: &QuestionTrack,
    ) -> DomainResult<TrackBaseline> {
        let questions = self.track_max(track)?;
        let allocation = self.allocation_max(category);
        Ok(TrackBaseline {
            category,
            questions,
            allocation,
            total: questions + allocation,
        })
    }

    /// Per-track and overall baselines for a whole bank
    #[instrument(skip_all)]
    pub fn baselines(&self, bank: &QuestionBank) -> DomainResult<Baselines> {
        let [career, relationships, health, adventure] = AllocationCategory::ALL;
        let tracks = [
            self.track_baseline(career, bank.track(career))?,
            self.track_baseline(relationships, bank.track(relationships))?,
            self.track_baseline(health, bank.track(health))?,
            self.track_baseline(adventure, bank.track(adventure))?,
        ];

        for track in &tracks {
            debug!(category = %track.category, total = ?track.total, "track baseline computed");
        }

        let baselines = Baselines::from_tracks(tracks);
        debug!(overall = ?baselines.overall(), "overall baseline computed");
        Ok(baselines)
    }
}
