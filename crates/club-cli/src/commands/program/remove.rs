use anyhow::{Context, bail};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::program::ProgramRemoveArgs;
use crate::context::AppContext;

pub async fn run(
    args: &ProgramRemoveArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if !args.yes {
        bail!(
            "refusing to remove entry {} without confirmation; re-run with --yes",
            args.entry
        );
    }

    let mut program = super::load(&args.training, ctx).await?;
    program
        .remove(&args.entry)
        .await
        .with_context(|| format!("cannot remove entry {} from training {}", args.entry, args.training))?;

    if !flags.quiet {
        eprintln!("removed {}", args.entry);
    }
    super::print_summary(&program.summary(), flags.format)
}
