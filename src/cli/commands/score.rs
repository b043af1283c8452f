//! Score command: evaluate a finished session.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use console::style;
use serde::{Deserialize, Serialize};

use super::load_engine;
use crate::cli::display::{
    count_label, list_table, number_cell, output, percent, score_bar, seconds, CommandOutput,
};
use crate::domain::models::{Allocation, Config, ProfileReport, QuestionBank, Session};

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Session JSON file, or `-` for stdin
    pub session: PathBuf,
}

/// One answer as supplied by the caller: just the choice and its timing.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerInput {
    pub question_id: String,
    pub option_index: usize,
    #[serde(default)]
    pub response_time_ms: u64,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Session file layout.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionInput {
    #[serde(default)]
    pub answers: Vec<AnswerInput>,
    pub allocation: Allocation,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
}

impl SessionInput {
    /// Resolve every answer against `bank` and check the allocation.
    pub fn into_session(self, bank: &QuestionBank) -> Result<Session> {
        self.allocation
            .validate()
            .context("Session allocation is invalid")?;

        let answers = self
            .answers
            .iter()
            .enumerate()
            .map(|(position, input)| {
                bank.record_answer(
                    &input.question_id,
                    input.option_index,
                    input.response_time_ms,
                    input.timestamp.unwrap_or_else(Utc::now),
                )
                .with_context(|| format!("Answer #{} could not be resolved", position + 1))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Session {
            answers,
            allocation: self.allocation,
            started_at: self.started_at,
            ended_at: self.ended_at,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ScoreOutput {
    #[serde(flatten)]
    pub report: ProfileReport,
}

impl CommandOutput for ScoreOutput {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn to_human(&self) -> String {
        let report = &self.report;
        let archetype = &report.archetype;
        let mut lines = vec![
            format!(
                "{} {}",
                style(&archetype.name).bold(),
                style(format!("({})", archetype.id)).dim()
            ),
            format!("{}", style(&archetype.tagline).italic()),
            String::new(),
            archetype.description.clone(),
            String::new(),
        ];

        let mut table = list_table(&["value", "raw", "score", ""]);
        for (value, raw) in report.raw.iter() {
            let normalized = report.normalized.get(value);
            table.add_row(vec![
                comfy_table::Cell::new(value.label()),
                number_cell(raw),
                number_cell(percent(normalized)),
                comfy_table::Cell::new(score_bar(normalized)),
            ]);
        }
        lines.push(table.to_string());

        let top: Vec<&str> = report.top_values.iter().map(|r| r.value.label()).collect();
        lines.push(String::new());
        lines.push(format!("Top values: {}", top.join(", ")));

        if let Some(clash) = &report.clash {
            lines.push(format!("Clashes with: {}", clash.name));
        }
        if let Some(vibe) = &report.vibe {
            lines.push(format!("Vibes with: {}", vibe.name));
        }

        if !report.contradictions.is_empty() {
            lines.push(String::new());
            lines.push(format!(
                "{}:",
                count_label(report.contradictions.len(), "contradiction", "contradictions")
            ));
            for contradiction in &report.contradictions {
                lines.push(format!(
                    "  - {}: {}",
                    style(&contradiction.title).yellow(),
                    contradiction.description
                ));
            }
        }

        let stats = &report.stats;
        lines.push(String::new());
        lines.push(format!(
            "Track: {}  |  total {}  |  avg response {}  |  {} instinct ({} timed out)",
            report
                .active_track
                .map_or("overall", |track| track.as_str()),
            seconds(stats.total_time_ms),
            seconds(stats.avg_response_time_ms.round() as u64),
            stats.instinct_answers,
            stats.timed_out_answers,
        ));

        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read session from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file {}", path.display()))
    }
}

pub fn execute(args: ScoreArgs, config: &Config, json_mode: bool) -> Result<()> {
    let engine = load_engine(config)?;

    let raw = read_input(&args.session)?;
    let input: SessionInput =
        serde_json::from_str(&raw).context("Session file is not valid session JSON")?;
    let session = input.into_session(engine.bank())?;

    let report = engine
        .evaluate(&session)
        .context("Failed to evaluate session")?;
    output(&ScoreOutput { report }, json_mode);
    Ok(())
}
