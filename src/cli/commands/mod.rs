//! CLI command implementations.

pub mod archetypes;
pub mod baselines;
pub mod questions;
pub mod score;
pub mod validate;

use anyhow::{Context, Result};

use crate::domain::catalog::builtin_archetypes;
use crate::domain::models::Config;
use crate::infrastructure::question_bank::QuestionBankLoader;
use crate::services::ScoringEngine;

/// Build a scoring engine from the configured question bank.
pub fn load_engine(config: &Config) -> Result<ScoringEngine> {
    let bank = QuestionBankLoader::resolve(config)?;
    ScoringEngine::new(bank, builtin_archetypes(), config.scoring.clone())
        .context("Failed to build scoring engine")
}
