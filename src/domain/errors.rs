//! Domain errors for the Prism scoring engine.
//!
//! Almost every variant describes a defect in static configuration (the
//! question bank or the archetype catalog). Scoring itself is total.

use thiserror::Error;

use super::models::Value;

/// Format a cycle path as a human-readable string: `A -> B -> C -> A`.
fn format_cycle_path(path: &[String]) -> String {
    path.join(" -> ")
}

/// Domain-level errors that can occur in Prism.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Question cycle detected: {}", format_cycle_path(.0))]
    QuestionCycle(Vec<String>),

    #[error("Root question {root_id} not found in {graph} graph")]
    MissingRoot { graph: String, root_id: String },

    #[error("Question stored under key {key} declares id {id}")]
    QuestionIdMismatch { key: String, id: String },

    #[error("Question {0} is not reachable from its graph root")]
    UnreachableQuestion(String),

    #[error("Question {0} has no options")]
    EmptyQuestion(String),

    #[error("Question {question_id} awards {points} {value} points, above the limit of {limit}")]
    OptionPointsTooLarge {
        question_id: String,
        value: Value,
        points: u32,
        limit: u32,
    },

    #[error("Question {id} is tagged {found} but sits in the {expected} graph")]
    PhaseMismatch {
        id: String,
        expected: String,
        found: String,
    },

    #[error("Question not found: {0}")]
    UnknownQuestion(String),

    #[error("Question {question_id} has no option {option_index}")]
    UnknownOption {
        question_id: String,
        option_index: usize,
    },

    #[error("Invalid allocation: {0}")]
    InvalidAllocation(String),

    #[error("Invalid archetype {id}: {reason}")]
    InvalidArchetype { id: String, reason: String },

    #[error("Archetype not found: {0}")]
    UnknownArchetype(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
