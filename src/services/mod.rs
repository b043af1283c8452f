pub mod allocation_scorer;
pub mod archetype_matcher;
pub mod bank_validator;
pub mod contradiction_detector;
pub mod max_score_calculator;
pub mod normalizer;
pub mod scoring_engine;
pub mod session_stats;
pub mod track_resolver;
pub mod value_ranking;

pub use allocation_scorer::AllocationScorer;
pub use archetype_matcher::ArchetypeMatcher;
pub use bank_validator::BankValidator;
pub use contradiction_detector::{detect, find_contradictions};
pub use max_score_calculator::MaxScoreCalculator;
pub use normalizer::{baseline_for, contradiction_thresholds, normalize, normalize_scores};
pub use scoring_engine::ScoringEngine;
pub use session_stats::session_stats;
pub use track_resolver::{active_track, top_category};
pub use value_ranking::top_values;
