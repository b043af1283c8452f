/// Domain models for a completed audit session.
///
/// A session is the caller-owned input to scoring: the ordered answers plus
/// the final focus allocation. The engine never stores sessions.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::allocation::Allocation;
use super::answer::Answer;

/// Answers and allocation gathered during one audit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    /// Answers in the order they were given
    #[serde(default)]
    pub answers: Vec<Answer>,

    /// Final focus allocation
    #[serde(default)]
    pub allocation: Allocation,

    /// When the audit was started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    /// When the audit was completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(answers: Vec<Answer>, allocation: Allocation) -> Self {
        Self {
            answers,
            allocation,
            started_at: None,
            ended_at: None,
        }
    }

    /// Attach start and end timestamps
    #[must_use]
    pub const fn with_timing(mut self, started_at: DateTime<Utc>, ended_at: DateTime<Utc>) -> Self {
        self.started_at = Some(started_at);
        self.ended_at = Some(ended_at);
        self
    }
}

/// Timing statistics for a session.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    /// Milliseconds from start to end, 0 when either timestamp is missing
    pub total_time_ms: u64,
    pub avg_response_time_ms: f64,
    pub fastest_response_ms: u64,
    pub slowest_response_ms: u64,
    /// Answers given to instinct questions
    pub instinct_answers: usize,
    /// Instinct answers that reached the soft time limit
    pub timed_out_answers: usize,
}
