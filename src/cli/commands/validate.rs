//! Validate command: check static configuration without scoring anything.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::display::{action_success, output, CommandOutput};
use crate::domain::catalog::{builtin_archetypes, builtin_question_bank};
use crate::domain::models::Config;
use crate::infrastructure::question_bank::QuestionBankLoader;
use crate::services::{BankValidator, MaxScoreCalculator};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Question bank file to check instead of the configured one
    #[arg(short, long)]
    pub bank: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub success: bool,
    pub source: String,
    pub questions: usize,
    pub archetypes: usize,
}

impl CommandOutput for ValidateOutput {
    fn to_human(&self) -> String {
        action_success(&format!(
            "{}: {} questions and {} archetypes are valid",
            self.source, self.questions, self.archetypes
        ))
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: ValidateArgs, config: &Config, json_mode: bool) -> Result<()> {
    let validator = BankValidator::new();

    // Files are validated by the loader as they are read
    let (bank, source) = match (args.bank, config.question_bank.as_deref()) {
        (Some(path), _) => (QuestionBankLoader::load(&path)?, path.display().to_string()),
        (None, Some(path)) => (QuestionBankLoader::load(path)?, path.to_string()),
        (None, None) => {
            let bank = builtin_question_bank();
            validator
                .validate_bank(&bank)
                .context("Built-in question bank failed validation")?;
            (bank, "built-in".to_string())
        }
    };

    let archetypes = builtin_archetypes();
    validator
        .validate_archetypes(&archetypes)
        .context("Archetype catalog failed validation")?;

    // Baselines walk every graph, so this also proves they terminate
    MaxScoreCalculator::new()
        .baselines(&bank)
        .context("Failed to compute baselines")?;

    let out = ValidateOutput {
        success: true,
        source,
        questions: bank.question_count(),
        archetypes: archetypes.len(),
    };
    output(&out, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    #[test]
    fn test_builtin_catalogs_validate() {
        let args = ValidateArgs { bank: None };
        assert!(execute(args, &Config::default(), true).is_ok());
    }

    #[test]
    fn test_invalid_bank_file_fails_once() {
        let mut bank = builtin_question_bank();
        let question = bank.adventure.deep.questions.values_mut().next().unwrap();
        question.options.clear();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, QuestionBankLoader::to_yaml(&bank).unwrap()).unwrap();

        let err = execute(ValidateArgs { bank: Some(path) }, &Config::default(), true).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DomainError>(),
            Some(DomainError::EmptyQuestion(_))
        ));
        // One validation layer, not two
        let messages: Vec<String> = err.chain().map(ToString::to_string).collect();
        assert_eq!(
            messages.iter().filter(|m| m.contains("failed validation")).count(),
            1
        );
    }
}
