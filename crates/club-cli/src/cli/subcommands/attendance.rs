use clap::{Args, Subcommand};

/// Attendance commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AttendanceCommands {
    /// Show one row per team member, with their record for the training.
    Show(AttendanceShowArgs),
    /// Edit records and persist the sheet.
    Save(AttendanceSaveArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AttendanceShowArgs {
    /// Training ID.
    pub training: String,
}

#[derive(Clone, Debug, Args)]
pub struct AttendanceSaveArgs {
    /// Training ID.
    pub training: String,
    /// Field edit as `member.field=value` (repeatable). Empty value clears.
    #[arg(long = "set", value_name = "MEMBER.FIELD=VALUE")]
    pub set: Vec<String>,
    /// Persist only these members (comma-separated), e.g. to retry failures.
    #[arg(long, value_delimiter = ',', value_name = "MEMBER")]
    pub only: Vec<String>,
}
