//! Track and category resolution rules.
//!
//! Both rules are deterministic and shared by baseline computation and
//! scoring:
//! - the top category of an allocation is the one holding the most points,
//!   ties going to the category declared first
//! - the active track of a session comes from the first character of the
//!   first answered question id that is at least two characters long

use crate::domain::models::{Allocation, AllocationCategory, Answer};

/// Category holding the most points, ties broken by priority order.
pub fn top_category(allocation: &Allocation) -> AllocationCategory {
    let mut best = AllocationCategory::Career;
    let mut best_points = allocation.points(best);
    for (category, points) in allocation.iter().skip(1) {
        if points > best_points {
            best = category;
            best_points = points;
        }
    }
    best
}

/// Track the session's questions were drawn from, if it can be told.
pub fn active_track(answers: &[Answer]) -> Option<AllocationCategory> {
    let question_id = &answers
        .iter()
        .find(|answer| answer.question_id.chars().count() >= 2)?
        .question_id;
    question_id
        .chars()
        .next()
        .and_then(AllocationCategory::from_id_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_category_clear_winner() {
        let allocation = Allocation::from_points(1, 2, 3, 6);
        assert_eq!(top_category(&allocation), AllocationCategory::Adventure);
    }

    #[test]
    fn test_top_category_tie_goes_to_priority() {
        assert_eq!(
            top_category(&Allocation::from_points(4, 4, 2, 2)),
            AllocationCategory::Career
        );
        assert_eq!(
            top_category(&Allocation::from_points(0, 2, 5, 5)),
            AllocationCategory::Health
        );
        assert_eq!(
            top_category(&Allocation::from_points(3, 3, 3, 3)),
            AllocationCategory::Career
        );
    }

    #[test]
    fn test_active_track_from_prefix() {
        assert_eq!(
            active_track(&[Answer::choice("ri1", 0)]),
            Some(AllocationCategory::Relationships)
        );
        assert_eq!(
            active_track(&[Answer::choice("ht2b", 1)]),
            Some(AllocationCategory::Health)
        );
    }

    #[test]
    fn test_active_track_skips_short_ids() {
        let answers = [Answer::choice("x", 0), Answer::choice("ad3", 1)];
        assert_eq!(active_track(&answers), Some(AllocationCategory::Adventure));
    }

    #[test]
    fn test_active_track_only_inspects_first_long_id() {
        let answers = [Answer::choice("zz1", 0), Answer::choice("ci1", 0)];
        assert_eq!(active_track(&answers), None);
    }

    #[test]
    fn test_active_track_empty() {
        assert_eq!(active_track(&[]), None);
    }
}
