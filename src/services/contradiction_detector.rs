//! Contradiction detection.
//!
//! Four fixed value pairs are checked in order against per-value thresholds
//! derived from the same baseline the normalizer uses. A pair is reported
//! when both raw scores reach their thresholds.

use super::normalizer::{baseline_for, contradiction_thresholds};
use crate::domain::models::{Answer, Baselines, Contradiction, Value, ValueScores};

/// Default fraction of a baseline a raw score must reach.
pub const DEFAULT_THRESHOLD_RATIO: f64 = 0.6;

struct ContradictionRule {
    values: [Value; 2],
    title: &'static str,
    description: &'static str,
}

const RULES: [ContradictionRule; 4] = [
    ContradictionRule {
        values: [Value::Loyalty, Value::Justice],
        title: "The Loyalty Paradox",
        description: "You value both loyalty and justice highly, but chose loyalty over justice \
                      in key moments.",
    },
    ContradictionRule {
        values: [Value::Ambition, Value::Harmony],
        title: "The Achiever's Dilemma",
        description: "You seek both success and peace, but your choices lean toward ambition \
                      when forced to pick.",
    },
    ContradictionRule {
        values: [Value::Freedom, Value::Security],
        title: "The Wanderer's Anchor",
        description: "You crave both freedom and stability, a tension that shapes many of your \
                      decisions.",
    },
    ContradictionRule {
        values: [Value::Honesty, Value::Compassion],
        title: "Truth vs Kindness",
        description: "You believe in honesty but also want to protect feelings. Sometimes \
                      these collide.",
    },
];

impl ContradictionRule {
    fn triggered(&self, raw: &ValueScores, thresholds: &ValueScores) -> bool {
        self.values
            .iter()
            .all(|&value| raw.get(value) >= thresholds.get(value))
    }

    fn to_contradiction(&self) -> Contradiction {
        Contradiction {
            title: self.title.to_string(),
            description: self.description.to_string(),
            values: self.values,
        }
    }
}

/// Check every rule against explicit thresholds.
pub fn detect(raw: &ValueScores, thresholds: &ValueScores) -> Vec<Contradiction> {
    RULES
        .iter()
        .filter(|rule| rule.triggered(raw, thresholds))
        .map(ContradictionRule::to_contradiction)
        .collect()
}

/// Contradictions in a session's raw scores.
///
/// Empty when there are no answers, whatever the scores.
pub fn find_contradictions(
    raw: &ValueScores,
    answers: &[Answer],
    baselines: &Baselines,
    ratio: f64,
) -> Vec<Contradiction> {
    if answers.is_empty() {
        return Vec::new();
    }
    let thresholds = contradiction_thresholds(baseline_for(baselines, answers), ratio);
    detect(raw, &thresholds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{AllocationCategory, TrackBaseline};

    fn flat_baselines(total: u32) -> Baselines {
        let track = |category| TrackBaseline {
            category,
            questions: ValueScores::splat(total),
            allocation: ValueScores::zero(),
            total: ValueScores::splat(total),
        };
        let [c, r, h, a] = AllocationCategory::ALL;
        Baselines::from_tracks([track(c), track(r), track(h), track(a)])
    }

    #[test]
    fn test_no_answers_no_contradictions() {
        let raw = ValueScores::splat(100);
        assert!(find_contradictions(&raw, &[], &flat_baselines(1), DEFAULT_THRESHOLD_RATIO).is_empty());
    }

    #[test]
    fn test_loyalty_justice_only() {
        let raw = ValueScores {
            loyalty: 5,
            justice: 5,
            ..ValueScores::zero()
        };
        let thresholds = ValueScores::splat(5);

        let found = detect(&raw, &thresholds);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "The Loyalty Paradox");
        assert_eq!(found[0].values, [Value::Loyalty, Value::Justice]);
    }

    #[test]
    fn test_one_side_below_threshold() {
        let raw = ValueScores {
            freedom: 9,
            security: 4,
            ..ValueScores::zero()
        };
        assert!(detect(&raw, &ValueScores::splat(5)).is_empty());
    }

    #[test]
    fn test_rules_reported_in_fixed_order() {
        let found = detect(&ValueScores::splat(3), &ValueScores::splat(3));
        let titles: Vec<&str> = found.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "The Loyalty Paradox",
                "The Achiever's Dilemma",
                "The Wanderer's Anchor",
                "Truth vs Kindness"
            ]
        );
    }

    #[test]
    fn test_find_contradictions_derives_thresholds() {
        // baseline 10 -> threshold 6
        let baselines = flat_baselines(10);
        let answers = [Answer::choice("ci1", 0)];
        let raw = ValueScores {
            honesty: 6,
            compassion: 6,
            freedom: 5,
            security: 9,
            ..ValueScores::zero()
        };

        let found = find_contradictions(&raw, &answers, &baselines, DEFAULT_THRESHOLD_RATIO);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].values, [Value::Honesty, Value::Compassion]);
    }

    #[test]
    fn test_zero_baseline_threshold_is_one() {
        let baselines = flat_baselines(0);
        let answers = [Answer::choice("ai1", 0)];
        let raw = ValueScores {
            ambition: 1,
            harmony: 1,
            ..ValueScores::zero()
        };

        let found = find_contradictions(&raw, &answers, &baselines, DEFAULT_THRESHOLD_RATIO);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "The Achiever's Dilemma");
    }

    #[test]
    fn test_default_ratio_matches_scoring_config() {
        let settings = crate::domain::models::ScoringConfig::default();
        assert!((settings.contradiction_threshold_ratio - DEFAULT_THRESHOLD_RATIO).abs() < f64::EPSILON);
    }
}
