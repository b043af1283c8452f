use serde::{Deserialize, Serialize};

use crate::services::contradiction_detector::DEFAULT_THRESHOLD_RATIO;

/// Main configuration structure for Prism
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Scoring parameters
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Path to a YAML question bank replacing the built-in catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_bank: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files, stderr only when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,

    /// Log file rotation: daily, hourly or never
    #[serde(default = "default_log_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_log_rotation(),
        }
    }
}

/// Scoring parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScoringConfig {
    /// Fraction of a baseline a raw score must reach to count toward a contradiction
    #[serde(default = "default_contradiction_threshold_ratio")]
    pub contradiction_threshold_ratio: f64,

    /// Number of values reported by top-value ranking
    #[serde(default = "default_top_values")]
    pub top_values: usize,

    /// Instinct answers at or above this latency count as timed out
    #[serde(default = "default_instinct_time_limit_ms")]
    pub instinct_time_limit_ms: u64,
}

const fn default_contradiction_threshold_ratio() -> f64 {
    DEFAULT_THRESHOLD_RATIO
}

const fn default_top_values() -> usize {
    3
}

const fn default_instinct_time_limit_ms() -> u64 {
    5000
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            contradiction_threshold_ratio: default_contradiction_threshold_ratio(),
            top_values: default_top_values(),
            instinct_time_limit_ms: default_instinct_time_limit_ms(),
        }
    }
}
