//! Questions command: browse or export the question bank.

use anyhow::{Context, Result};
use clap::Args;
use comfy_table::Cell;
use serde::Serialize;

use crate::cli::display::{list_table, number_cell, output, render_list, CommandOutput};
use crate::domain::models::{AllocationCategory, Config, Phase, Question, QuestionBank};
use crate::infrastructure::question_bank::QuestionBankLoader;

#[derive(Args, Debug)]
pub struct QuestionsArgs {
    /// Track to show (career, relationships, health, adventure)
    pub track: Option<String>,

    /// Only show one phase (instinct, tradeoff, deep)
    #[arg(short, long)]
    pub phase: Option<String>,

    /// Print the whole bank as YAML, ready to edit into a custom bank
    #[arg(long, conflicts_with_all = ["track", "phase"])]
    pub export: bool,
}

#[derive(Debug, Serialize)]
pub struct QuestionListOutput {
    pub track: AllocationCategory,
    pub questions: Vec<Question>,
    pub total: usize,
}

impl QuestionListOutput {
    pub fn from_bank(bank: &QuestionBank, track: AllocationCategory, phase: Option<Phase>) -> Self {
        let questions: Vec<Question> = bank
            .track(track)
            .graphs()
            .filter(|(slot, _)| phase.is_none_or(|only| only == *slot))
            .flat_map(|(_, graph)| graph.questions.values().cloned())
            .collect();
        Self {
            track,
            total: questions.len(),
            questions,
        }
    }
}

impl CommandOutput for QuestionListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["id", "phase", "question", "options", "leads to"]);
        for question in &self.questions {
            let next: Vec<&str> = question
                .options
                .iter()
                .map(|option| option.next_id.as_deref().unwrap_or("end"))
                .collect();
            table.add_row(vec![
                Cell::new(&question.id),
                Cell::new(question.phase.as_str()),
                Cell::new(&question.text),
                number_cell(question.options.len()),
                Cell::new(next.join(", ")),
            ]);
        }
        render_list(&format!("{} question", self.track), &table, self.total)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: QuestionsArgs, config: &Config, json_mode: bool) -> Result<()> {
    let bank = QuestionBankLoader::resolve(config)?;

    if args.export {
        if json_mode {
            println!(
                "{}",
                serde_json::to_string_pretty(&bank).context("Failed to serialize question bank")?
            );
        } else {
            print!("{}", QuestionBankLoader::to_yaml(&bank)?);
        }
        return Ok(());
    }

    let track_name = args
        .track
        .ok_or_else(|| anyhow::anyhow!("Pass a track (career, relationships, health, adventure) or --export"))?;
    let track = AllocationCategory::from_str(&track_name)
        .ok_or_else(|| anyhow::anyhow!("Invalid track: {track_name}"))?;
    let phase = args
        .phase
        .as_deref()
        .map(|name| Phase::from_str(name).ok_or_else(|| anyhow::anyhow!("Invalid phase: {name}")))
        .transpose()?;

    output(&QuestionListOutput::from_bank(&bank, track, phase), json_mode);
    Ok(())
}
