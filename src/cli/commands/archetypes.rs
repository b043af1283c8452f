//! Archetypes command: browse the archetype catalog.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;
use serde::Serialize;

use crate::cli::display::{list_table, output, render_list, CommandOutput};
use crate::domain::catalog::builtin_archetypes;
use crate::domain::errors::DomainError;
use crate::domain::models::Archetype;

#[derive(Args, Debug)]
pub struct ArchetypesArgs {
    #[command(subcommand)]
    pub command: Option<ArchetypeCommands>,
}

#[derive(Subcommand, Debug)]
pub enum ArchetypeCommands {
    /// List all archetypes (default)
    List,
    /// Show one archetype with its strengths and blind spots
    Show {
        /// Archetype id, e.g. sage
        id: String,
    },
}

#[derive(Debug, Serialize)]
pub struct ArchetypeListOutput {
    pub archetypes: Vec<Archetype>,
    pub total: usize,
}

impl CommandOutput for ArchetypeListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["id", "name", "primary values", "clash", "vibe"]);
        for archetype in &self.archetypes {
            let [first, second] = archetype.primary_values;
            table.add_row(vec![
                archetype.id.clone(),
                archetype.name.clone(),
                format!("{} + {}", first.label(), second.label()),
                archetype.clash_with.clone(),
                archetype.vibe_with.clone(),
            ]);
        }
        render_list("archetype", &table, self.total)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct ArchetypeDetailOutput {
    pub archetype: Archetype,
    pub clash: Option<Archetype>,
    pub vibe: Option<Archetype>,
}

impl CommandOutput for ArchetypeDetailOutput {
    fn to_human(&self) -> String {
        let a = &self.archetype;
        let [first, second] = a.primary_values;
        let mut lines = vec![
            format!("{}", style(&a.name).bold()),
            format!("{}", style(&a.tagline).italic()),
            String::new(),
            a.description.clone(),
            String::new(),
            format!("Primary values: {}, {}", first.label(), second.label()),
            format!("Color: {}", a.color),
        ];

        lines.push("\nStrengths:".to_string());
        lines.extend(a.strengths.iter().map(|s| format!("  - {s}")));
        lines.push("\nBlind spots:".to_string());
        lines.extend(a.blind_spots.iter().map(|s| format!("  - {s}")));

        lines.push(String::new());
        if let Some(clash) = &self.clash {
            lines.push(format!("Clashes with: {}", clash.name));
        }
        if let Some(vibe) = &self.vibe {
            lines.push(format!("Vibes with: {}", vibe.name));
        }

        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: ArchetypesArgs, json_mode: bool) -> Result<()> {
    let catalog = builtin_archetypes();

    match args.command.unwrap_or(ArchetypeCommands::List) {
        ArchetypeCommands::List => {
            let archetypes: Vec<Archetype> = catalog.iter().cloned().collect();
            let out = ArchetypeListOutput {
                total: archetypes.len(),
                archetypes,
            };
            output(&out, json_mode);
        }
        ArchetypeCommands::Show { id } => {
            let archetype = catalog
                .get(&id.to_lowercase())
                .ok_or_else(|| DomainError::UnknownArchetype(id.clone()))?;
            let out = ArchetypeDetailOutput {
                clash: catalog.clash_of(archetype).cloned(),
                vibe: catalog.vibe_of(archetype).cloned(),
                archetype: archetype.clone(),
            };
            output(&out, json_mode);
        }
    }

    Ok(())
}
