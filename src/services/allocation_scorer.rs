//! Focus allocation scoring.
//!
//! Turns the 12 points a user spreads over the four life areas into value
//! points, and enumerates every way of spending the budget.

use crate::domain::models::{
    Allocation, AllocationCategory, ValueScores, ALLOCATION_BUDGET, ALLOCATION_WEIGHT_SCALE,
};

/// Number of integer allocations of the budget over four categories: C(15, 3).
pub const SIMPLEX_POINT_COUNT: usize = 455;

/// Service for turning a focus allocation into value points
///
/// Contribution formula: floor((points / 12) * weight * 4) per weighted value
#[derive(Debug, Clone, Copy, Default)]
pub struct AllocationScorer;

impl AllocationScorer {
    pub const fn new() -> Self {
        Self
    }

    /// Score an allocation across all categories.
    ///
    /// Total over any record, including ones that do not spend the budget.
    pub fn score(&self, allocation: &Allocation) -> ValueScores {
        let mut scores = ValueScores::zero();
        for (category, points) in allocation.iter() {
            self.add_category(&mut scores, category, points);
        }
        scores
    }

    fn add_category(&self, scores: &mut ValueScores, category: AllocationCategory, points: u32) {
        for &(value, weight) in category.weights() {
            *scores.get_mut(value) += Self::contribution(points, weight);
        }
    }

    /// Points one weighted value earns from `points` allocated to its category.
    ///
    /// Evaluated in f64 in the documented order and truncated, which yields
    /// the score plateaus callers rely on.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn contribution(points: u32, weight: u32) -> u32 {
        let share = f64::from(points) / f64::from(ALLOCATION_BUDGET);
        (share * f64::from(weight) * f64::from(ALLOCATION_WEIGHT_SCALE)).floor() as u32
    }

    /// Every integer allocation that spends exactly the budget.
    ///
    /// The fourth category takes whatever the nested loops leave over.
    pub fn simplex_points(&self) -> Vec<Allocation> {
        let mut points = Vec::with_capacity(SIMPLEX_POINT_COUNT);
        for career in 0..=ALLOCATION_BUDGET {
            for relationships in 0..=ALLOCATION_BUDGET - career {
                for health in 0..=ALLOCATION_BUDGET - career - relationships {
                    let adventure = ALLOCATION_BUDGET - career - relationships - health;
                    points.push(Allocation::from_points(
                        career,
                        relationships,
                        health,
                        adventure,
                    ));
                }
            }
        }
        points
    }
}
