//! Command-line interface for Prism.

pub mod commands;
pub mod display;
pub mod types;

pub use types::{Cli, Commands};

use crate::domain::DomainError;
use display::action_failure;

/// Print an error and exit with a non-zero status.
///
/// Configuration and domain errors get exit code 2, everything else 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    let code = if err.downcast_ref::<DomainError>().is_some()
        || err
            .downcast_ref::<crate::infrastructure::config::ConfigError>()
            .is_some()
    {
        2
    } else {
        1
    };

    if json_mode {
        let chain: Vec<String> = err.chain().skip(1).map(ToString::to_string).collect();
        let body = serde_json::json!({
            "success": false,
            "error": err.to_string(),
            "causes": chain,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );
    } else {
        eprintln!("{}", action_failure(&format!("{err:#}")));
    }

    std::process::exit(code);
}
