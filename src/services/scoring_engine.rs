//! Scoring Engine
//!
//! Ties the scoring pipeline together:
//! answers + allocation -> raw scores -> normalized scores -> archetype,
//! with contradictions, top values and timing stats alongside.
//!
//! The engine owns the static configuration and the baselines derived from
//! it. Baselines are computed once in the constructor, so a built engine is
//! immutable and can be shared freely across threads.

use tracing::{debug, info, instrument};

use super::allocation_scorer::AllocationScorer;
use super::archetype_matcher::ArchetypeMatcher;
use super::bank_validator::BankValidator;
use super::contradiction_detector::find_contradictions;
use super::max_score_calculator::MaxScoreCalculator;
use super::normalizer::normalize_scores;
use super::session_stats::session_stats;
use super::track_resolver::active_track;
use super::value_ranking::top_values;
use crate::domain::catalog::{builtin_archetypes, builtin_question_bank};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    Allocation, Answer, Archetype, ArchetypeCatalog, Baselines, Contradiction, NormalizedScores,
    ProfileReport, QuestionBank, RankedValue, ScoringConfig, Session, ValueScores,
};

/// Immutable scoring engine over a validated bank and archetype catalog
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    bank: QuestionBank,
    archetypes: ArchetypeCatalog,
    baselines: Baselines,
    settings: ScoringConfig,
    scorer: AllocationScorer,
    matcher: ArchetypeMatcher,
}

impl ScoringEngine {
    /// Validate the static configuration and precompute baselines.
    #[instrument(skip_all, fields(questions = bank.question_count(), archetypes = archetypes.len()))]
    pub fn new(
        bank: QuestionBank,
        archetypes: ArchetypeCatalog,
        settings: ScoringConfig,
    ) -> DomainResult<Self> {
        let validator = BankValidator::new();
        validator.validate_bank(&bank)?;
        validator.validate_archetypes(&archetypes)?;

        let baselines = MaxScoreCalculator::new().baselines(&bank)?;
        info!(overall = ?baselines.overall(), "scoring engine ready");

        Ok(Self {
            bank,
            archetypes,
            baselines,
            settings,
            scorer: AllocationScorer::new(),
            matcher: ArchetypeMatcher::new(),
        })
    }

    /// Engine over the built-in question bank and archetypes.
    pub fn builtin(settings: ScoringConfig) -> DomainResult<Self> {
        Self::new(builtin_question_bank(), builtin_archetypes(), settings)
    }

    pub const fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub const fn archetypes(&self) -> &ArchetypeCatalog {
        &self.archetypes
    }

    pub const fn baselines(&self) -> &Baselines {
        &self.baselines
    }

    pub const fn settings(&self) -> &ScoringConfig {
        &self.settings
    }

    /// Sum of answer deltas plus the allocation contribution.
    pub fn raw_scores(&self, answers: &[Answer], allocation: &Allocation) -> ValueScores {
        let mut raw = self.scorer.score(allocation);
        for answer in answers {
            raw.add_delta(&answer.values);
        }
        raw
    }

    pub fn normalize(&self, raw: &ValueScores, answers: &[Answer]) -> NormalizedScores {
        normalize_scores(raw, answers, &self.baselines)
    }

    /// Best-matching archetype for a normalized profile.
    pub fn archetype(&self, normalized: &NormalizedScores) -> DomainResult<&Archetype> {
        self.matcher
            .best_match(&self.archetypes, normalized)
            .ok_or_else(|| DomainError::UnknownArchetype("<empty catalog>".to_string()))
    }

    pub fn contradictions(&self, raw: &ValueScores, answers: &[Answer]) -> Vec<Contradiction> {
        find_contradictions(
            raw,
            answers,
            &self.baselines,
            self.settings.contradiction_threshold_ratio,
        )
    }

    pub fn top_values(&self, raw: &ValueScores) -> Vec<RankedValue> {
        top_values(raw, self.settings.top_values)
    }

    /// Full profile for a finished session.
    #[instrument(skip_all, fields(answers = session.answers.len()))]
    pub fn evaluate(&self, session: &Session) -> DomainResult<ProfileReport> {
        let answers = &session.answers;
        let raw = self.raw_scores(answers, &session.allocation);
        let normalized = self.normalize(&raw, answers);
        let archetype = self.archetype(&normalized)?;
        debug!(archetype = %archetype.id, "archetype resolved");

        let contradictions = self.contradictions(&raw, answers);
        debug!(count = contradictions.len(), "contradictions checked");

        Ok(ProfileReport {
            active_track: if answers.is_empty() {
                None
            } else {
                active_track(answers)
            },
            raw,
            normalized,
            archetype: archetype.clone(),
            clash: self.archetypes.clash_of(archetype).cloned(),
            vibe: self.archetypes.vibe_of(archetype).cloned(),
            affinities: self.matcher.affinities(&self.archetypes, &normalized),
            contradictions,
            top_values: self.top_values(&raw),
            stats: session_stats(session, self.settings.instinct_time_limit_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{AllocationCategory, Value};
    use chrono::Utc;

    fn engine() -> ScoringEngine {
        ScoringEngine::builtin(ScoringConfig::default()).unwrap()
    }

    fn answer(engine: &ScoringEngine, id: &str, option: usize) -> Answer {
        engine
            .bank()
            .record_answer(id, option, 1500, Utc::now())
            .unwrap()
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScoringEngine>();
    }

    #[test]
    fn test_raw_scores_add_answers_and_allocation() {
        let engine = engine();
        let first = answer(&engine, "ci1", 0);
        let expected_from_answer = ValueScores::from(&first.values);

        let raw = engine.raw_scores(&[first], &Allocation::from_points(12, 0, 0, 0));
        assert_eq!(raw.ambition, expected_from_answer.ambition + 8);
        assert_eq!(raw.security, expected_from_answer.security + 4);
        assert_eq!(raw.loyalty, expected_from_answer.loyalty);
    }

    #[test]
    fn test_empty_session_uses_overall_baseline() {
        let engine = engine();
        let session = Session::new(Vec::new(), Allocation::from_points(0, 0, 0, 12));

        let report = engine.evaluate(&session).unwrap();
        assert_eq!(report.active_track, None);
        assert!(report.contradictions.is_empty());
        // Adventure 12: freedom 12, ambition 4; overall freedom 43, ambition 34
        assert_eq!(report.raw.freedom, 12);
        assert!((report.normalized.freedom - 12.0 / 43.0).abs() < 1e-12);
        assert!((report.normalized.ambition - 4.0 / 34.0).abs() < 1e-12);
        assert_eq!(report.archetype.id, "architect");
    }

    #[test]
    fn test_evaluate_relationships_session() {
        let engine = engine();
        let answers = vec![answer(&engine, "ri1", 0), answer(&engine, "rt1", 1)];
        let session = Session::new(answers, Allocation::from_points(2, 6, 2, 2));

        let report = engine.evaluate(&session).unwrap();
        assert_eq!(report.active_track, Some(AllocationCategory::Relationships));
        assert_eq!(report.affinities.len(), 6);
        assert_eq!(report.top_values.len(), 3);
        assert_eq!(report.stats.instinct_answers, 1);
        assert_eq!(
            report.clash.as_ref().map(|a| a.id.as_str()),
            Some(report.archetype.clash_with.as_str())
        );
        assert!(report
            .normalized
            .iter()
            .all(|(_, score)| (0.0..=1.0).contains(&score)));
    }

    #[test]
    fn test_top_values_respects_setting() {
        let engine = ScoringEngine::builtin(ScoringConfig {
            top_values: 1,
            ..ScoringConfig::default()
        })
        .unwrap();
        let raw = ValueScores {
            honesty: 3,
            ..ValueScores::zero()
        };
        let top = engine.top_values(&raw);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].value, Value::Honesty);
    }

    #[test]
    fn test_invalid_archetypes_rejected() {
        let result = ScoringEngine::new(
            builtin_question_bank(),
            ArchetypeCatalog::new(Vec::new()),
            ScoringConfig::default(),
        );
        assert!(matches!(result, Err(DomainError::InvalidArchetype { .. })));
    }
}
