use clap::{Args, Subcommand};

/// Exercise catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ExerciseCommands {
    /// List catalog exercises.
    List(ExerciseListArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ExerciseListArgs {
    /// Only exercises in this category (case-insensitive).
    #[arg(long)]
    pub category: Option<String>,
}
