//! Answer and contradiction records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value::{Value, ValueDelta};

/// A recorded answer to one question.
///
/// The option text and value deltas are copied at answer time so that
/// scoring does not depend on the question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub option_index: usize,
    #[serde(default)]
    pub option_text: String,
    #[serde(default)]
    pub values: ValueDelta,
    pub timestamp: DateTime<Utc>,
    /// Milliseconds between showing the question and answering it
    #[serde(default)]
    pub response_time_ms: u64,
}

impl Answer {
    /// Minimal answer with no copied option data, stamped now.
    pub fn choice(question_id: impl Into<String>, option_index: usize) -> Self {
        Self {
            question_id: question_id.into(),
            option_index,
            option_text: String::new(),
            values: ValueDelta::new(),
            timestamp: Utc::now(),
            response_time_ms: 0,
        }
    }

    #[must_use]
    pub fn with_values(mut self, values: ValueDelta) -> Self {
        self.values = values;
        self
    }

    #[must_use]
    pub const fn with_response_time(mut self, response_time_ms: u64) -> Self {
        self.response_time_ms = response_time_ms;
        self
    }

    /// Instinct question ids carry `i` as their second character.
    pub fn is_instinct(&self) -> bool {
        self.question_id.chars().nth(1) == Some('i')
    }
}

/// Two values that both scored high on the same answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contradiction {
    pub title: String,
    pub description: String,
    pub values: [Value; 2],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_instinct() {
        assert!(Answer::choice("ri1", 0).is_instinct());
        assert!(Answer::choice("ai4b", 1).is_instinct());
        assert!(!Answer::choice("ct1", 0).is_instinct());
        assert!(!Answer::choice("i", 0).is_instinct());
    }

    #[test]
    fn test_builder_helpers() {
        let answer = Answer::choice("hd2a", 1)
            .with_values([(Value::Justice, 2)].into_iter().collect())
            .with_response_time(1200);
        assert_eq!(answer.values.get(&Value::Justice), Some(&2));
        assert_eq!(answer.response_time_ms, 1200);
    }
}
