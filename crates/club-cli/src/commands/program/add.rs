use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::program::ProgramAddArgs;
use crate::context::AppContext;

pub async fn run(args: &ProgramAddArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut program = super::load(&args.training, ctx).await?;
    let entry = program
        .append(&args.exercise, args.minutes, args.phase.as_deref(), args.order)
        .await
        .with_context(|| format!("cannot add exercise {} to training {}", args.exercise, args.training))?;

    if !flags.quiet {
        eprintln!("added {} ({} min) as {}", entry.label(), entry.duration_minutes, entry.id);
    }
    super::print_summary(&program.summary(), flags.format)
}
