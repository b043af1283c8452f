//! Baselines command: show the score ceilings used for normalization.

use anyhow::Result;
use clap::Args;
use comfy_table::Cell;
use serde::Serialize;

use super::load_engine;
use crate::cli::display::{list_table, number_cell, output, CommandOutput};
use crate::domain::models::{AllocationCategory, Baselines, Config, Value, ValueScores};

#[derive(Args, Debug)]
pub struct BaselinesArgs {
    /// Show the question and allocation parts of each track separately
    #[arg(short, long)]
    pub breakdown: bool,

    /// Only show one track (career, relationships, health, adventure)
    #[arg(short, long)]
    pub track: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BaselinesOutput {
    pub baselines: Baselines,
    #[serde(skip)]
    pub breakdown: bool,
    #[serde(skip)]
    pub track: Option<AllocationCategory>,
}

fn scores_row(label: String, scores: &ValueScores) -> Vec<Cell> {
    std::iter::once(Cell::new(label))
        .chain(scores.iter().map(|(_, score)| number_cell(score)))
        .collect()
}

impl CommandOutput for BaselinesOutput {
    fn to_human(&self) -> String {
        let headers: Vec<&str> = std::iter::once("track")
            .chain(Value::ALL.iter().map(Value::as_str))
            .collect();
        let mut table = list_table(&headers);

        for track in self.baselines.tracks() {
            if self.track.is_some_and(|only| only != track.category) {
                continue;
            }
            if self.breakdown {
                table.add_row(scores_row(
                    format!("{} questions", track.category),
                    &track.questions,
                ));
                table.add_row(scores_row(
                    format!("{} allocation", track.category),
                    &track.allocation,
                ));
            }
            table.add_row(scores_row(track.category.to_string(), &track.total));
        }

        if self.track.is_none() {
            table.add_row(scores_row("overall".to_string(), self.baselines.overall()));
        }

        table.to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        match self.track {
            Some(category) => {
                serde_json::to_value(self.baselines.track(category)).unwrap_or_default()
            }
            None => serde_json::to_value(&self.baselines).unwrap_or_default(),
        }
    }
}

pub fn execute(args: BaselinesArgs, config: &Config, json_mode: bool) -> Result<()> {
    let track = args
        .track
        .as_deref()
        .map(|name| {
            AllocationCategory::from_str(name)
                .ok_or_else(|| anyhow::anyhow!("Invalid track: {name}"))
        })
        .transpose()?;

    let engine = load_engine(config)?;
    let out = BaselinesOutput {
        baselines: engine.baselines().clone(),
        breakdown: args.breakdown,
        track,
    };
    output(&out, json_mode);
    Ok(())
}
