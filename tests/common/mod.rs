//! Common test utilities for integration tests
//!
//! Provides shared fixtures and helpers used across multiple integration
//! test files.

use std::collections::BTreeMap;

use chrono::Utc;
use prism::domain::models::{
    Answer, Phase, Question, QuestionGraph, QuestionOption, Value, ValueDelta,
};
use prism::{ScoringConfig, ScoringEngine};
use tempfile::TempDir;

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
#[allow(dead_code)]
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Engine over the built-in catalogs with default settings
#[allow(dead_code)]
pub fn builtin_engine() -> ScoringEngine {
    ScoringEngine::builtin(ScoringConfig::default()).expect("built-in catalogs are valid")
}

/// Record an answer against the engine's bank
#[allow(dead_code)]
pub fn answer(engine: &ScoringEngine, question_id: &str, option_index: usize) -> Answer {
    engine
        .bank()
        .record_answer(question_id, option_index, 1500, Utc::now())
        .expect("answer should resolve")
}

/// Sparse value delta from pairs
#[allow(dead_code)]
pub fn delta(pairs: &[(Value, u32)]) -> ValueDelta {
    pairs.iter().copied().collect()
}

/// Build a graph from `(id, [(delta, next_id)])` tuples; the first id is the root
#[allow(dead_code)]
pub fn graph(questions: Vec<(String, Vec<(ValueDelta, Option<String>)>)>) -> QuestionGraph {
    let root_id = questions
        .first()
        .map(|(id, _)| id.clone())
        .unwrap_or_default();
    let length = questions.len();
    let questions: BTreeMap<String, Question> = questions
        .into_iter()
        .map(|(id, options)| {
            let question = Question {
                id: id.clone(),
                text: format!("Question {id}"),
                phase: Phase::Deep,
                options: options
                    .into_iter()
                    .enumerate()
                    .map(|(i, (values, next_id))| QuestionOption {
                        text: format!("Option {i}"),
                        values,
                        next_id,
                    })
                    .collect(),
                time_limit: None,
            };
            (id, question)
        })
        .collect();

    QuestionGraph {
        root_id,
        length,
        questions,
    }
}
