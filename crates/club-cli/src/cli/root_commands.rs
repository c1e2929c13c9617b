use clap::Subcommand;

use crate::cli::subcommands::{AttendanceCommands, ExerciseCommands, ProgramCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Attendance sheets of a training.
    Attendance {
        #[command(subcommand)]
        action: AttendanceCommands,
    },
    /// Exercise program of a training.
    Program {
        #[command(subcommand)]
        action: ProgramCommands,
    },
    /// Exercise catalog.
    Exercise {
        #[command(subcommand)]
        action: ExerciseCommands,
    },
}
