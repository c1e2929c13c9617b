use clap::{Args, Subcommand};

/// Training program commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProgramCommands {
    /// List the program in display order with its total time.
    List(ProgramListArgs),
    /// Add an exercise to the program.
    Add(ProgramAddArgs),
    /// Remove an entry from the program.
    Remove(ProgramRemoveArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ProgramListArgs {
    /// Training ID.
    pub training: String,
}

#[derive(Clone, Debug, Args)]
pub struct ProgramAddArgs {
    /// Training ID.
    pub training: String,
    /// Exercise ID from the catalog.
    #[arg(long)]
    pub exercise: String,
    /// Duration in minutes (must be greater than zero).
    #[arg(long, allow_negative_numbers = true)]
    pub minutes: i64,
    /// Phase label (e.g. warm-up, main, cool-down).
    #[arg(long)]
    pub phase: Option<String>,
    /// Display position.
    #[arg(long)]
    pub order: Option<i32>,
}

#[derive(Clone, Debug, Args)]
pub struct ProgramRemoveArgs {
    /// Training ID.
    pub training: String,
    /// Program entry ID.
    pub entry: String,
    /// Confirm the removal.
    #[arg(long)]
    pub yes: bool,
}
