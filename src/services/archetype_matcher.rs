//! Archetype matching by weighted affinity.

use crate::domain::models::{
    Archetype, ArchetypeAffinity, ArchetypeCatalog, NormalizedScores,
};

/// Weight applied to an archetype's two primary values.
pub const PRIMARY_WEIGHT: f64 = 2.0;

/// Weight applied to every other value.
pub const SECONDARY_WEIGHT: f64 = 0.5;

/// Weighted-sum archetype matcher
///
/// Affinity = 2 * (sum of primary values) + 0.5 * (sum of the rest).
/// The matcher is an argmax over the catalog in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeMatcher {
    primary_weight: f64,
    secondary_weight: f64,
}

impl Default for ArchetypeMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchetypeMatcher {
    pub const fn new() -> Self {
        Self::with_weights(PRIMARY_WEIGHT, SECONDARY_WEIGHT)
    }

    /// Create with custom weights
    pub const fn with_weights(primary_weight: f64, secondary_weight: f64) -> Self {
        Self {
            primary_weight,
            secondary_weight,
        }
    }

    pub fn affinity(&self, archetype: &Archetype, normalized: &NormalizedScores) -> f64 {
        normalized
            .iter()
            .map(|(value, score)| {
                if archetype.is_primary(value) {
                    self.primary_weight * score
                } else {
                    self.secondary_weight * score
                }
            })
            .sum()
    }

    /// Highest-affinity archetype; on exact ties the earlier one wins.
    ///
    /// `None` only for an empty catalog.
    pub fn best_match<'c>(
        &self,
        catalog: &'c ArchetypeCatalog,
        normalized: &NormalizedScores,
    ) -> Option<&'c Archetype> {
        let mut best: Option<(&Archetype, f64)> = None;
        for archetype in catalog {
            let score = self.affinity(archetype, normalized);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((archetype, score)),
            }
        }
        best.map(|(archetype, _)| archetype)
    }

    /// Affinity for every archetype, in catalog order.
    pub fn affinities(
        &self,
        catalog: &ArchetypeCatalog,
        normalized: &NormalizedScores,
    ) -> Vec<ArchetypeAffinity> {
        catalog
            .iter()
            .map(|archetype| ArchetypeAffinity {
                archetype_id: archetype.id.clone(),
                score: self.affinity(archetype, normalized),
            })
            .collect()
    }
}
