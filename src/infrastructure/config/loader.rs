use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project config file, read from the working directory
pub const PROJECT_CONFIG_FILE: &str = "prism.yaml";

/// Local overrides, not meant to be committed
pub const LOCAL_CONFIG_FILE: &str = ".prism/local.yaml";

/// Prefix for environment overrides; `__` separates nested keys
pub const ENV_PREFIX: &str = "PRISM_";

/// Configuration error types
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),

    #[error("Invalid contradiction_threshold_ratio: {0}. Must be in (0, 1]")]
    InvalidThresholdRatio(f64),

    #[error("Invalid top_values: {0}. Must be at least 1")]
    InvalidTopValues(usize),

    #[error("Question bank path cannot be empty")]
    EmptyQuestionBankPath,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Build the layered figment
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. prism.yaml (project config)
    /// 3. .prism/local.yaml (local overrides, optional)
    /// 4. An explicit file passed with `--config`
    /// 5. Environment variables (PRISM_* prefix, highest priority)
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(PROJECT_CONFIG_FILE))
            .merge(Yaml::file(LOCAL_CONFIG_FILE));

        if let Some(path) = explicit {
            figment = figment.merge(Yaml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load configuration, layering `explicit` above the project files
    pub fn load_with(explicit: Option<&Path>) -> Result<Config> {
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
        }

        let config: Config = Self::figment(explicit)
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a single file over the defaults
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidLogRotation(config.logging.rotation.clone()));
        }

        let ratio = config.scoring.contradiction_threshold_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(ConfigError::InvalidThresholdRatio(ratio));
        }

        if config.scoring.top_values == 0 {
            return Err(ConfigError::InvalidTopValues(0));
        }

        if config
            .question_bank
            .as_deref()
            .is_some_and(|path| path.trim().is_empty())
        {
            return Err(ConfigError::EmptyQuestionBankPath);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
        assert!((config.scoring.contradiction_threshold_ratio - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.scoring.top_values, 3);
        assert_eq!(config.scoring.instinct_time_limit_ms, 5000);
        assert!(config.question_bank.is_none());
        ConfigLoader::validate(&config).expect("Default config should be valid");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
logging:
  level: debug
  format: json
scoring:
  contradiction_threshold_ratio: 0.5
  top_values: 4
question_bank: banks/custom.yaml
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert!((config.scoring.contradiction_threshold_ratio - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.scoring.top_values, 4);
        assert_eq!(config.scoring.instinct_time_limit_ms, 5000);
        assert_eq!(config.question_bank.as_deref(), Some("banks/custom.yaml"));

        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "invalid".to_string();

        match ConfigLoader::validate(&config).unwrap_err() {
            ConfigError::InvalidLogLevel(level) => assert_eq!(level, "invalid"),
            other => panic!("Expected InvalidLogLevel error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_invalid_log_format() {
        let mut config = Config::default();
        config.logging.format = "xml".to_string();

        assert_eq!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogFormat("xml".to_string()))
        );
    }

    #[test]
    fn test_validate_invalid_rotation() {
        let mut config = Config::default();
        config.logging.rotation = "weekly".to_string();

        assert_eq!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogRotation("weekly".to_string()))
        );
    }

    #[test]
    fn test_validate_threshold_ratio_bounds() {
        for ratio in [0.0, -0.2, 1.5, f64::NAN] {
            let mut config = Config::default();
            config.scoring.contradiction_threshold_ratio = ratio;
            assert!(matches!(
                ConfigLoader::validate(&config),
                Err(ConfigError::InvalidThresholdRatio(_))
            ));
        }

        let mut config = Config::default();
        config.scoring.contradiction_threshold_ratio = 1.0;
        assert!(ConfigLoader::validate(&config).is_ok());
    }

    #[test]
    fn test_validate_zero_top_values() {
        let mut config = Config::default();
        config.scoring.top_values = 0;

        assert_eq!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidTopValues(0))
        );
    }

    #[test]
    fn test_validate_blank_question_bank_path() {
        let config = Config {
            question_bank: Some("  ".to_string()),
            ..Default::default()
        };

        assert_eq!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyQuestionBankPath)
        );
    }

    #[test]
    fn test_env_override() {
        temp_env::with_vars(
            [
                ("PRISM_LOGGING__LEVEL", Some("debug")),
                ("PRISM_SCORING__TOP_VALUES", Some("5")),
            ],
            || {
                let config = ConfigLoader::load_with(None).expect("env config should load");
                assert_eq!(config.logging.level, "debug");
                assert_eq!(config.scoring.top_values, 5);
            },
        );
    }

    #[test]
    fn test_env_beats_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "logging:\n  level: info\n  format: json").unwrap();
        file.flush().unwrap();

        temp_env::with_var("PRISM_LOGGING__LEVEL", Some("error"), || {
            let config = ConfigLoader::load_with(Some(file.path())).unwrap();
            assert_eq!(config.logging.level, "error");
            assert_eq!(config.logging.format, "json");
        });
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = ConfigLoader::load_with(Some(Path::new("/definitely/not/here.yaml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file_rejects_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "scoring:\n  top_values: 0").unwrap();
        file.flush().unwrap();

        assert!(ConfigLoader::load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_hierarchical_merging() {
        let mut base_file = NamedTempFile::new().unwrap();
        writeln!(
            base_file,
            "scoring:\n  top_values: 2\nlogging:\n  level: info\n  format: json"
        )
        .unwrap();
        base_file.flush().unwrap();

        let mut override_file = NamedTempFile::new().unwrap();
        writeln!(override_file, "scoring:\n  top_values: 6\nlogging:\n  level: debug").unwrap();
        override_file.flush().unwrap();

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(base_file.path()))
            .merge(Yaml::file(override_file.path()))
            .extract()
            .unwrap();

        assert_eq!(config.scoring.top_values, 6, "Override should win");
        assert_eq!(
            config.logging.level, "debug",
            "Override should win for nested fields"
        );
        assert_eq!(
            config.logging.format, "json",
            "Base value should persist when not overridden"
        );
    }
}
