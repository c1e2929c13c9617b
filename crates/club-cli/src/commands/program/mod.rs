pub mod add;
pub mod list;
pub mod remove;

use anyhow::Context;
use serde::Serialize;

use club_core::entities::CompositionEntry;
use club_core::responses::ProgramSummary;
use club_engine::SessionComposer;

use crate::cli::subcommands::ProgramCommands;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output_document;

/// Handle `club program`.
pub async fn handle(
    action: &ProgramCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProgramCommands::List(args) => list::run(&args.training, ctx, flags).await,
        ProgramCommands::Add(args) => add::run(args, ctx, flags).await,
        ProgramCommands::Remove(args) => remove::run(args, ctx, flags).await,
    }
}

/// Fetch the current program of a training.
async fn load(training: &str, ctx: &AppContext) -> anyhow::Result<SessionComposer> {
    SessionComposer::load(training, ctx.client.clone())
        .await
        .with_context(|| format!("failed to load program for training {training}"))
}

/// Flat table line of a program entry.
#[derive(Debug, Serialize)]
struct EntryLine<'a> {
    entry: &'a str,
    exercise: &'a str,
    phase: Option<&'a str>,
    order: Option<i32>,
    minutes: u32,
}

impl<'a> From<&'a CompositionEntry> for EntryLine<'a> {
    fn from(entry: &'a CompositionEntry) -> Self {
        Self {
            entry: &entry.id,
            exercise: entry.label(),
            phase: entry.phase.as_deref(),
            order: entry.position,
            minutes: entry.duration_minutes,
        }
    }
}

/// Print a program summary; the table view ends with the total.
fn print_summary(summary: &ProgramSummary, format: OutputFormat) -> anyhow::Result<()> {
    let lines: Vec<EntryLine<'_>> = summary.entries.iter().map(EntryLine::from).collect();
    output_document(summary, &lines, format)?;
    if format == OutputFormat::Table {
        println!("total: {} min", summary.total_minutes);
    }
    Ok(())
}
