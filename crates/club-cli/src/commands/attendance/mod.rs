pub mod save;
pub mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AttendanceCommands;
use crate::context::AppContext;

/// Handle `club attendance`.
pub async fn handle(
    action: &AttendanceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AttendanceCommands::Show(args) => show::run(&args.training, ctx, flags).await,
        AttendanceCommands::Save(args) => save::run(args, ctx, flags).await,
    }
}
