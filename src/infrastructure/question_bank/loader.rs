use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::domain::catalog::builtin_question_bank;
use crate::domain::models::{Config, QuestionBank};
use crate::services::BankValidator;

/// Loader for YAML question banks
pub struct QuestionBankLoader;

impl QuestionBankLoader {
    /// Load and validate a bank from a YAML file
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<QuestionBank> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read question bank from {}", path.display()))?;
        let bank = Self::from_yaml(&content)
            .with_context(|| format!("Invalid question bank in {}", path.display()))?;
        debug!(questions = bank.question_count(), "question bank loaded");
        Ok(bank)
    }

    /// Parse and validate a bank from YAML text
    pub fn from_yaml(content: &str) -> Result<QuestionBank> {
        let bank: QuestionBank =
            serde_yaml::from_str(content).context("Failed to parse question bank YAML")?;
        BankValidator::new()
            .validate_bank(&bank)
            .context("Question bank failed validation")?;
        Ok(bank)
    }

    /// Serialize a bank to YAML, e.g. to seed a custom bank file
    pub fn to_yaml(bank: &QuestionBank) -> Result<String> {
        serde_yaml::to_string(bank).context("Failed to serialize question bank")
    }

    /// Bank named by the configuration, or the built-in one
    pub fn resolve(config: &Config) -> Result<QuestionBank> {
        match config.question_bank.as_deref() {
            Some(path) => Self::load(path),
            None => Ok(builtin_question_bank()),
        }
    }
}
