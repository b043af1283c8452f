//! Infrastructure layer module
//!
//! Adapters between the scoring core and the outside world:
//! - Configuration management (figment)
//! - Logging infrastructure (tracing)
//! - Question bank files (YAML)

pub mod config;
pub mod logging;
pub mod question_bank;
