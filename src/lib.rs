//! Prism - value profile scoring engine
//!
//! Prism turns a sequence of branching-question answers and a 12-point focus
//! allocation into a normalized profile over eight value dimensions, a
//! best-fit archetype, and a list of value contradictions.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Value model, question and archetype catalogs, errors
//! - **Service Layer** (`services`): Baselines, normalization, matching, detection
//! - **Infrastructure Layer** (`infrastructure`): Configuration, logging, bank files
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```
//! use prism::{Allocation, ScoringConfig, ScoringEngine, Session};
//!
//! let engine = ScoringEngine::builtin(ScoringConfig::default())?;
//! let answer = engine.bank().record_answer("ci1", 0, 1800, chrono::Utc::now())?;
//! let session = Session::new(vec![answer], Allocation::new(6, 2, 2, 2)?);
//!
//! let report = engine.evaluate(&session)?;
//! println!("{} ({:?})", report.archetype.name, report.active_track);
//! # Ok::<(), prism::DomainError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Allocation, AllocationCategory, Answer, Archetype, ArchetypeCatalog, Baselines, Config,
    Contradiction, LoggingConfig, NormalizedScores, Phase, ProfileReport, QuestionBank,
    ScoringConfig, Session, SessionStats, Value, ValueScores,
};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{MaxScoreCalculator, ScoringEngine};
