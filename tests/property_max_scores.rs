mod common;

use std::collections::HashSet;

use common::graph;
use prism::domain::catalog::builtin_question_bank;
use prism::domain::models::{
    Allocation, AllocationCategory, QuestionGraph, Value, ValueDelta, ValueScores,
    ALLOCATION_BUDGET,
};
use prism::services::{
    normalize, top_category, AllocationScorer, BankValidator, MaxScoreCalculator,
};
use proptest::prelude::*;

/// Score of the walk that takes `choices[i] % options` at the i-th question.
fn walk(graph: &QuestionGraph, choices: &[usize]) -> ValueScores {
    let mut total = ValueScores::zero();
    let mut current = graph.root();
    let mut steps = 0;
    while let Some(question) = current {
        let choice = choices.get(steps).copied().unwrap_or(0) % question.options.len();
        let option = &question.options[choice];
        total.add_delta(&option.values);
        current = option.next_id.as_deref().and_then(|id| graph.question(id));
        steps += 1;
    }
    total
}

/// Elementwise max over every complete walk, by brute force.
fn best_over_all_walks(graph: &QuestionGraph, id: Option<&str>) -> ValueScores {
    let Some(question) = id.and_then(|id| graph.question(id)) else {
        return ValueScores::zero();
    };
    question
        .options
        .iter()
        .map(|option| {
            best_over_all_walks(graph, option.next_id.as_deref()).plus_delta(&option.values)
        })
        .fold(ValueScores::zero(), |acc, candidate| acc.elementwise_max(&candidate))
}

fn value_strategy() -> impl Strategy<Value = Value> {
    prop::sample::select(Value::ALL.to_vec())
}

fn delta_strategy() -> impl Strategy<Value = ValueDelta> {
    prop::collection::btree_map(value_strategy(), 0u32..5, 0..3)
}

/// Random acyclic graph: option targets always point to a later question,
/// sometimes past the end (a dangling id) or nowhere.
fn dag_strategy() -> impl Strategy<Value = QuestionGraph> {
    (1usize..7)
        .prop_flat_map(|size| {
            prop::collection::vec(
                prop::collection::vec((delta_strategy(), 0usize..8, any::<bool>()), 1..4),
                size,
            )
        })
        .prop_map(|nodes| {
            let size = nodes.len();
            let questions = nodes
                .into_iter()
                .enumerate()
                .map(|(index, options)| {
                    let options = options
                        .into_iter()
                        .map(|(values, hop, terminal)| {
                            let next = (!terminal).then(|| format!("q{}", index + 1 + hop % size));
                            (values, next)
                        })
                        .collect();
                    (format!("q{index}"), options)
                })
                .collect();
            graph(questions)
        })
}

proptest! {
    /// Property: the computed maximum dominates every walk through a built-in graph
    #[test]
    fn prop_builtin_max_dominates_random_walks(
        track in 0usize..4,
        phase in 0usize..3,
        choices in prop::collection::vec(0usize..4, 7),
    ) {
        let bank = builtin_question_bank();
        let category = AllocationCategory::ALL[track];
        let (_, graph) = bank.track(category).graphs().nth(phase).unwrap();

        let max = MaxScoreCalculator::new().graph_max(graph).unwrap();
        let path = walk(graph, &choices);
        prop_assert!(max.dominates(&path), "max {max:?} does not dominate walk {path:?}");
    }

    /// Property: on random DAGs the memoized walk equals brute-force enumeration
    #[test]
    fn prop_graph_max_matches_brute_force(graph in dag_strategy()) {
        prop_assert!(BankValidator::new().detect_cycle(&graph).is_none());

        let memoized = MaxScoreCalculator::new().graph_max(&graph).unwrap();
        let brute = best_over_all_walks(&graph, Some(&graph.root_id));
        prop_assert_eq!(memoized, brute);
    }

    /// Property: the allocation ceiling of a point's top category covers that point
    #[test]
    fn prop_allocation_max_covers_point(index in 0usize..455) {
        let scorer = AllocationScorer::new();
        let points = scorer.simplex_points();
        let allocation = points[index];

        let ceiling = MaxScoreCalculator::new().allocation_max(top_category(&allocation));
        prop_assert!(ceiling.dominates(&scorer.score(&allocation)));
    }

    /// Property: normalization always lands in [0, 1]
    #[test]
    fn prop_normalized_in_unit_range(
        raw in prop::array::uniform8(0u32..500),
        baseline in prop::array::uniform8(0u32..100),
    ) {
        let to_scores = |a: [u32; 8]| ValueScores {
            loyalty: a[0],
            justice: a[1],
            compassion: a[2],
            ambition: a[3],
            security: a[4],
            freedom: a[5],
            honesty: a[6],
            harmony: a[7],
        };
        let normalized = normalize(&to_scores(raw), &to_scores(baseline));
        for (value, score) in normalized.iter() {
            prop_assert!((0.0..=1.0).contains(&score), "{value} normalized to {score}");
        }
    }
}

#[test]
fn test_simplex_matches_explicit_enumeration() {
    let budget = ALLOCATION_BUDGET;
    let mut expected = HashSet::new();
    for career in 0..=budget {
        for relationships in 0..=budget {
            for health in 0..=budget {
                for adventure in 0..=budget {
                    if career + relationships + health + adventure == budget {
                        expected.insert((career, relationships, health, adventure));
                    }
                }
            }
        }
    }

    let points = AllocationScorer::new().simplex_points();
    let produced: HashSet<_> = points
        .iter()
        .map(|a: &Allocation| (a.career, a.relationships, a.health, a.adventure))
        .collect();

    assert_eq!(points.len(), produced.len(), "simplex points must be distinct");
    assert_eq!(produced, expected);
    assert_eq!(produced.len(), 455);
}

#[test]
fn test_builtin_track_totals() {
    let baselines = MaxScoreCalculator::new()
        .baselines(&builtin_question_bank())
        .unwrap();

    let expect = |category: AllocationCategory, scores: [u32; 8]| {
        let total = baselines.track(category).total;
        let actual: Vec<u32> = total.iter().map(|(_, score)| score).collect();
        assert_eq!(actual, scores, "{category} total");
    };

    expect(AllocationCategory::Career, [17, 16, 16, 34, 26, 21, 19, 21]);
    expect(AllocationCategory::Relationships, [32, 12, 24, 14, 16, 21, 27, 20]);
    expect(AllocationCategory::Health, [14, 5, 16, 27, 40, 29, 6, 21]);
    expect(AllocationCategory::Adventure, [20, 7, 15, 21, 35, 43, 11, 14]);

    let overall: Vec<u32> = baselines.overall().iter().map(|(_, s)| s).collect();
    assert_eq!(overall, [32, 16, 24, 34, 40, 43, 27, 21]);
}

#[test]
fn test_career_allocation_ceiling() {
    let ceiling = MaxScoreCalculator::new().allocation_max(AllocationCategory::Career);
    let actual: Vec<u32> = ceiling.iter().map(|(_, s)| s).collect();
    assert_eq!(actual, [4, 0, 2, 8, 6, 6, 0, 2]);
}
