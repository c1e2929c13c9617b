pub mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ExerciseCommands;
use crate::context::AppContext;

/// Handle `club exercise`.
pub async fn handle(
    action: &ExerciseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ExerciseCommands::List(args) => list::run(args.category.as_deref(), ctx, flags).await,
    }
}
