//! Question graph domain model.
//!
//! Each life-area category owns a track of three branching question graphs
//! (instinct, tradeoff, deep). An option may point at the next question; a
//! pointer with no matching question ends the walk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::allocation::AllocationCategory;
use super::answer::Answer;
use super::value::ValueDelta;
use crate::domain::errors::{DomainError, DomainResult};

/// Phase a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Fast gut-reaction questions, usually with a soft time limit
    Instinct,
    /// Either/or tradeoffs
    Tradeoff,
    /// Slower moral dilemmas
    Deep,
}

impl Phase {
    /// All phases in the order a track accumulates them.
    pub const ALL: [Self; 3] = [Self::Instinct, Self::Tradeoff, Self::Deep];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Instinct => "instinct",
            Self::Tradeoff => "tradeoff",
            Self::Deep => "deep",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "instinct" => Some(Self::Instinct),
            "tradeoff" => Some(Self::Tradeoff),
            "deep" => Some(Self::Deep),
            _ => None,
        }
    }
}

/// A selectable answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Display text
    pub text: String,

    /// Points awarded when this option is chosen
    #[serde(default)]
    pub values: ValueDelta,

    /// Question shown after this option, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_id: Option<String>,
}

/// A single question node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub phase: Phase,
    pub options: Vec<QuestionOption>,

    /// Soft time limit in seconds. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
}

impl Question {
    pub fn option(&self, index: usize) -> Option<&QuestionOption> {
        self.options.get(index)
    }
}

/// A branching question graph rooted at `root_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionGraph {
    pub root_id: String,

    /// Number of questions a single walk visits. Informational only.
    pub length: usize,

    pub questions: BTreeMap<String, Question>,
}

impl QuestionGraph {
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.get(id)
    }

    pub fn root(&self) -> Option<&Question> {
        self.question(&self.root_id)
    }
}

/// The three graphs answered for one life-area category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionTrack {
    pub instinct: QuestionGraph,
    pub tradeoff: QuestionGraph,
    pub deep: QuestionGraph,
}

impl QuestionTrack {
    pub fn graph(&self, phase: Phase) -> &QuestionGraph {
        match phase {
            Phase::Instinct => &self.instinct,
            Phase::Tradeoff => &self.tradeoff,
            Phase::Deep => &self.deep,
        }
    }

    /// Graphs paired with the phase slot they occupy.
    pub fn graphs(&self) -> impl Iterator<Item = (Phase, &QuestionGraph)> {
        Phase::ALL.into_iter().map(move |phase| (phase, self.graph(phase)))
    }
}

/// One question track per allocation category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QuestionBank {
    pub career: QuestionTrack,
    pub relationships: QuestionTrack,
    pub health: QuestionTrack,
    pub adventure: QuestionTrack,
}

impl QuestionBank {
    pub fn track(&self, category: AllocationCategory) -> &QuestionTrack {
        match category {
            AllocationCategory::Career => &self.career,
            AllocationCategory::Relationships => &self.relationships,
            AllocationCategory::Health => &self.health,
            AllocationCategory::Adventure => &self.adventure,
        }
    }

    /// Tracks in category priority order.
    pub fn tracks(&self) -> impl Iterator<Item = (AllocationCategory, &QuestionTrack)> {
        AllocationCategory::ALL
            .into_iter()
            .map(move |category| (category, self.track(category)))
    }

    /// Look a question up across every graph in the bank.
    pub fn find_question(&self, id: &str) -> Option<&Question> {
        self.tracks()
            .flat_map(|(_, track)| track.graphs())
            .find_map(|(_, graph)| graph.question(id))
    }

    /// Total number of questions across all graphs.
    pub fn question_count(&self) -> usize {
        self.tracks()
            .flat_map(|(_, track)| track.graphs())
            .map(|(_, graph)| graph.questions.len())
            .sum()
    }

    /// Record an answer, copying the chosen option's text and values.
    pub fn record_answer(
        &self,
        question_id: &str,
        option_index: usize,
        response_time_ms: u64,
        timestamp: DateTime<Utc>,
    ) -> DomainResult<Answer> {
        let question = self
            .find_question(question_id)
            .ok_or_else(|| DomainError::UnknownQuestion(question_id.to_string()))?;
        let option = question
            .option(option_index)
            .ok_or_else(|| DomainError::UnknownOption {
                question_id: question_id.to_string(),
                option_index,
            })?;

        Ok(Answer {
            question_id: question.id.clone(),
            option_index,
            option_text: option.text.clone(),
            values: option.values.clone(),
            timestamp,
            response_time_ms,
        })
    }
}
