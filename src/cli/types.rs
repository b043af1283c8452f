//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::archetypes::ArchetypesArgs;
use super::commands::baselines::BaselinesArgs;
use super::commands::questions::QuestionsArgs;
use super::commands::score::ScoreArgs;
use super::commands::validate::ValidateArgs;

#[derive(Parser, Debug)]
#[command(name = "prism")]
#[command(about = "Prism - value profile scoring engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Extra config file layered over prism.yaml and .prism/local.yaml
    #[arg(short, long, global = true, env = "PRISM_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a finished session from a JSON file
    Score(ScoreArgs),

    /// Show the normalization baselines per track
    Baselines(BaselinesArgs),

    /// Validate the question bank and archetype catalog
    Validate(ValidateArgs),

    /// List archetypes or show one in detail
    Archetypes(ArchetypesArgs),

    /// Browse the questions of a track
    Questions(QuestionsArgs),
}
