//! Static configuration checks.
//!
//! Scoring assumes a well-formed question bank and archetype catalog. These
//! checks run once, when an engine is built or a bank is loaded from disk,
//! so that later computations never see a malformed graph.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{ArchetypeCatalog, Phase, QuestionBank, QuestionGraph};

/// Number of archetypes a catalog must declare.
pub const ARCHETYPE_COUNT: usize = 6;

/// Largest number of points one option may award a single value.
pub const MAX_OPTION_POINTS: u32 = 100;

/// Validator for question banks and archetype catalogs
#[derive(Debug, Clone, Copy, Default)]
pub struct BankValidator;

// Standalone helper for cycle detection (no self needed)
fn detect_cycle_util<'g>(
    node: &'g str,
    edges: &HashMap<&'g str, Vec<&'g str>>,
    visited: &mut HashSet<&'g str>,
    rec_stack: &mut HashSet<&'g str>,
    path: &mut Vec<&'g str>,
) -> bool {
    visited.insert(node);
    rec_stack.insert(node);
    path.push(node);

    if let Some(neighbors) = edges.get(node) {
        for &neighbor in neighbors {
            if !visited.contains(neighbor) {
                if detect_cycle_util(neighbor, edges, visited, rec_stack, path) {
                    return true;
                }
            } else if rec_stack.contains(neighbor) {
                if let Some(cycle_start) = path.iter().position(|&id| id == neighbor) {
                    path.drain(0..cycle_start);
                    path.push(neighbor);
                    return true;
                }
            }
        }
    }

    rec_stack.remove(node);
    path.pop();
    false
}

// Edges to questions that exist in the graph; dangling next ids are terminal
fn edges(graph: &QuestionGraph) -> HashMap<&str, Vec<&str>> {
    graph
        .questions
        .iter()
        .map(|(key, question)| {
            let targets = question
                .options
                .iter()
                .filter_map(|option| option.next_id.as_deref())
                .filter(|next_id| graph.questions.contains_key(*next_id))
                .collect();
            (key.as_str(), targets)
        })
        .collect()
}

impl BankValidator {
    pub const fn new() -> Self {
        Self
    }

    /// Find a cycle in a question graph
    ///
    /// Returns the cycle as a closed path (`q1 -> q2 -> q1`).
    pub fn detect_cycle(&self, graph: &QuestionGraph) -> Option<Vec<String>> {
        let edges = edges(graph);
        let mut visited = HashSet::new();
        let mut rec_stack = HashSet::new();
        let mut path = Vec::new();

        let start = std::iter::once(graph.root_id.as_str())
            .filter(|root| edges.contains_key(root))
            .chain(graph.questions.keys().map(String::as_str));

        for node in start {
            if !visited.contains(node)
                && detect_cycle_util(node, &edges, &mut visited, &mut rec_stack, &mut path)
            {
                return Some(path.into_iter().map(str::to_string).collect());
            }
        }
        None
    }

    /// Question ids reachable from the root, the root included.
    pub fn reachable<'g>(&self, graph: &'g QuestionGraph) -> HashSet<&'g str> {
        let edges = edges(graph);
        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();

        if graph.questions.contains_key(&graph.root_id) {
            queue.push_back(graph.root_id.as_str());
        }
        while let Some(id) = queue.pop_front() {
            if !seen.insert(id) {
                continue;
            }
            if let Some(targets) = edges.get(id) {
                queue.extend(targets.iter().copied().filter(|t| !seen.contains(t)));
            }
        }
        seen
    }

    /// Check one graph sitting in the `phase` slot of a track named `name`.
    pub fn validate_graph(&self, name: &str, phase: Phase, graph: &QuestionGraph) -> DomainResult<()> {
        if !graph.questions.contains_key(&graph.root_id) {
            return Err(DomainError::MissingRoot {
                graph: format!("{name} {}", phase.as_str()),
                root_id: graph.root_id.clone(),
            });
        }

        for (key, question) in &graph.questions {
            if *key != question.id {
                return Err(DomainError::QuestionIdMismatch {
                    key: key.clone(),
                    id: question.id.clone(),
                });
            }
            if question.options.is_empty() {
                return Err(DomainError::EmptyQuestion(question.id.clone()));
            }
            for option in &question.options {
                if let Some((&value, &points)) =
                    option.values.iter().find(|(_, points)| **points > MAX_OPTION_POINTS)
                {
                    return Err(DomainError::OptionPointsTooLarge {
                        question_id: question.id.clone(),
                        value,
                        points,
                        limit: MAX_OPTION_POINTS,
                    });
                }
            }
            if question.phase != phase {
                return Err(DomainError::PhaseMismatch {
                    id: question.id.clone(),
                    expected: phase.as_str().to_string(),
                    found: question.phase.as_str().to_string(),
                });
            }
        }

        if let Some(cycle) = self.detect_cycle(graph) {
            return Err(DomainError::QuestionCycle(cycle));
        }

        let reachable = self.reachable(graph);
        if let Some(orphan) = graph
            .questions
            .keys()
            .find(|key| !reachable.contains(key.as_str()))
        {
            return Err(DomainError::UnreachableQuestion(orphan.clone()));
        }

        Ok(())
    }

    /// Check every graph of every track.
    pub fn validate_bank(&self, bank: &QuestionBank) -> DomainResult<()> {
        for (category, track) in bank.tracks() {
            for (phase, graph) in track.graphs() {
                self.validate_graph(category.as_str(), phase, graph)?;
            }
        }
        Ok(())
    }

    /// Check archetype count, ids, primaries and cross references.
    pub fn validate_archetypes(&self, catalog: &ArchetypeCatalog) -> DomainResult<()> {
        if catalog.len() != ARCHETYPE_COUNT {
            return Err(DomainError::InvalidArchetype {
                id: "<catalog>".to_string(),
                reason: format!(
                    "expected {ARCHETYPE_COUNT} archetypes, found {}",
                    catalog.len()
                ),
            });
        }

        let mut ids = HashSet::new();
        for archetype in catalog {
            let invalid = |reason: &str| DomainError::InvalidArchetype {
                id: archetype.id.clone(),
                reason: reason.to_string(),
            };

            if !ids.insert(archetype.id.as_str()) {
                return Err(invalid("duplicate id"));
            }
            let [first, second] = archetype.primary_values;
            if first == second {
                return Err(invalid("primary values must differ"));
            }
            if archetype.clash_with == archetype.id || archetype.vibe_with == archetype.id {
                return Err(invalid("cannot clash or vibe with itself"));
            }
            if archetype.clash_with == archetype.vibe_with {
                return Err(invalid("clash and vibe must differ"));
            }
        }

        for archetype in catalog {
            for reference in [&archetype.clash_with, &archetype.vibe_with] {
                if catalog.get(reference).is_none() {
                    return Err(DomainError::UnknownArchetype(reference.clone()));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{builtin_archetypes, builtin_question_bank};
    use crate::domain::models::{Question, QuestionOption, Value};

    fn question(id: &str, phase: Phase, next_ids: &[Option<&str>]) -> Question {
        Question {
            id: id.to_string(),
            text: format!("{id}?"),
            phase,
            options: next_ids
                .iter()
                .map(|next_id| QuestionOption {
                    text: "option".to_string(),
                    values: Default::default(),
                    next_id: next_id.map(str::to_string),
                })
                .collect(),
            time_limit: None,
        }
    }

    fn graph(root_id: &str, questions: Vec<Question>) -> QuestionGraph {
        QuestionGraph {
            root_id: root_id.to_string(),
            length: questions.len(),
            questions: questions.into_iter().map(|q| (q.id.clone(), q)).collect(),
        }
    }

    #[test]
    fn test_builtin_bank_is_valid() {
        let validator = BankValidator::new();
        assert_eq!(validator.validate_bank(&builtin_question_bank()), Ok(()));
    }

    #[test]
    fn test_builtin_archetypes_are_valid() {
        let validator = BankValidator::new();
        assert_eq!(validator.validate_archetypes(&builtin_archetypes()), Ok(()));
    }

    #[test]
    fn test_detect_cycle_no_cycle() {
        let g = graph(
            "q1",
            vec![
                question("q1", Phase::Deep, &[Some("q2"), Some("q3")]),
                question("q2", Phase::Deep, &[Some("q3")]),
                question("q3", Phase::Deep, &[None]),
            ],
        );
        assert!(BankValidator::new().detect_cycle(&g).is_none());
    }

    #[test]
    fn test_detect_cycle_with_cycle() {
        let g = graph(
            "q1",
            vec![
                question("q1", Phase::Deep, &[Some("q2")]),
                question("q2", Phase::Deep, &[Some("q3")]),
                question("q3", Phase::Deep, &[Some("q2"), None]),
            ],
        );
        let cycle = BankValidator::new().detect_cycle(&g).unwrap();
        assert_eq!(cycle, ["q2", "q3", "q2"]);
    }

    #[test]
    fn test_validate_graph_rejects_cycle() {
        let g = graph(
            "q1",
            vec![question("q1", Phase::Instinct, &[Some("q1")])],
        );
        assert!(matches!(
            BankValidator::new().validate_graph("Career", Phase::Instinct, &g),
            Err(DomainError::QuestionCycle(_))
        ));
    }

    #[test]
    fn test_missing_root() {
        let g = graph("q0", vec![question("q1", Phase::Deep, &[None])]);
        let err = BankValidator::new()
            .validate_graph("Health", Phase::Deep, &g)
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingRoot {
                graph: "Health deep".to_string(),
                root_id: "q0".to_string()
            }
        );
    }

    #[test]
    fn test_option_points_above_limit() {
        let mut q = question("q1", Phase::Deep, &[None]);
        q.options[0].values.insert(Value::Honesty, u32::MAX);
        let g = graph("q1", vec![q]);

        let err = BankValidator::new()
            .validate_graph("Career", Phase::Deep, &g)
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::OptionPointsTooLarge {
                question_id: "q1".to_string(),
                value: Value::Honesty,
                points: u32::MAX,
                limit: MAX_OPTION_POINTS,
            }
        );

        let mut q = question("q1", Phase::Deep, &[None]);
        q.options[0].values.insert(Value::Honesty, MAX_OPTION_POINTS);
        let g = graph("q1", vec![q]);
        assert_eq!(BankValidator::new().validate_graph("Career", Phase::Deep, &g), Ok(()));
    }

    #[test]
    fn test_phase_mismatch() {
        let g = graph("q1", vec![question("q1", Phase::Tradeoff, &[None])]);
        assert!(matches!(
            BankValidator::new().validate_graph("Career", Phase::Instinct, &g),
            Err(DomainError::PhaseMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_question() {
        let g = graph("q1", vec![question("q1", Phase::Deep, &[])]);
        assert_eq!(
            BankValidator::new().validate_graph("Career", Phase::Deep, &g),
            Err(DomainError::EmptyQuestion("q1".to_string()))
        );
    }

    #[test]
    fn test_key_id_mismatch() {
        let mut g = graph("q1", vec![question("q1", Phase::Deep, &[None])]);
        g.questions
            .insert("q2".to_string(), question("q9", Phase::Deep, &[None]));
        assert!(matches!(
            BankValidator::new().validate_graph("Career", Phase::Deep, &g),
            Err(DomainError::QuestionIdMismatch { .. })
        ));
    }

    #[test]
    fn test_unreachable_question() {
        let g = graph(
            "q1",
            vec![
                question("q1", Phase::Deep, &[Some("missing")]),
                question("q2", Phase::Deep, &[None]),
            ],
        );
        assert_eq!(
            BankValidator::new().validate_graph("Career", Phase::Deep, &g),
            Err(DomainError::UnreachableQuestion("q2".to_string()))
        );
    }

    #[test]
    fn test_archetype_count() {
        let catalog = ArchetypeCatalog::new(builtin_archetypes().iter().take(5).cloned().collect());
        assert!(matches!(
            BankValidator::new().validate_archetypes(&catalog),
            Err(DomainError::InvalidArchetype { .. })
        ));
    }

    #[test]
    fn test_archetype_unknown_reference() {
        let mut archetypes: Vec<_> = builtin_archetypes().iter().cloned().collect();
        archetypes[0].vibe_with = "oracle".to_string();
        assert_eq!(
            BankValidator::new().validate_archetypes(&ArchetypeCatalog::new(archetypes)),
            Err(DomainError::UnknownArchetype("oracle".to_string()))
        );
    }

    #[test]
    fn test_archetype_duplicate_primaries() {
        let mut archetypes: Vec<_> = builtin_archetypes().iter().cloned().collect();
        archetypes[2].primary_values[1] = archetypes[2].primary_values[0];
        assert!(matches!(
            BankValidator::new().validate_archetypes(&ArchetypeCatalog::new(archetypes)),
            Err(DomainError::InvalidArchetype { id, .. }) if id == "empath"
        ));
    }
}
