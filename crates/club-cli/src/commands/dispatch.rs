use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Attendance { action } => commands::attendance::handle(&action, ctx, flags).await,
        Commands::Program { action } => commands::program::handle(&action, ctx, flags).await,
        Commands::Exercise { action } => commands::exercise::handle(&action, ctx, flags).await,
    }
}
