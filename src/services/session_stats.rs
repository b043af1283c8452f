//! Timing statistics over a session's answers.

use crate::domain::models::{Session, SessionStats};

/// Timing statistics for a session
///
/// A session without answers reports all zeros, even when timestamps are set.
/// Total time is 0 unless both timestamps are present, and never negative.
#[allow(clippy::cast_precision_loss)]
pub fn session_stats(session: &Session, instinct_time_limit_ms: u64) -> SessionStats {
    let answers = &session.answers;
    if answers.is_empty() {
        return SessionStats::default();
    }

    let total_time_ms = match (session.started_at, session.ended_at) {
        (Some(start), Some(end)) => u64::try_from((end - start).num_milliseconds()).unwrap_or(0),
        _ => 0,
    };

    let response_times = answers.iter().map(|a| a.response_time_ms);
    // Wide accumulator: a response time may be any u64
    let sum: u128 = response_times.clone().map(u128::from).sum();
    let fastest = response_times.clone().min().unwrap_or(0);
    let slowest = response_times.max().unwrap_or(0);

    let instinct = answers.iter().filter(|a| a.is_instinct());
    let instinct_answers = instinct.clone().count();
    let timed_out_answers = instinct
        .filter(|a| a.response_time_ms >= instinct_time_limit_ms)
        .count();

    SessionStats {
        total_time_ms,
        avg_response_time_ms: sum as f64 / answers.len() as f64,
        fastest_response_ms: fastest,
        slowest_response_ms: slowest,
        instinct_answers,
        timed_out_answers,
    }
}
