use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `club` binary.
#[derive(Debug, Parser)]
#[command(
    name = "club",
    version,
    about = "Clubhouse - training attendance and programs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Colorize table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{AttendanceCommands, ProgramCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "club",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "exercise",
            "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Exercise { .. }));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["club", "program", "list", "trn-1", "--format", "raw", "-q"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["club", "--format", "xml", "exercise", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn save_collects_repeated_set_and_only_lists() {
        let cli = Cli::try_parse_from([
            "club",
            "attendance",
            "save",
            "trn-1",
            "--set",
            "u1.presence=ausente",
            "--set",
            "u1.note=doente",
            "--only",
            "u1,u2",
        ])
        .expect("cli should parse");

        let Commands::Attendance {
            action: AttendanceCommands::Save(args),
        } = cli.command
        else {
            panic!("expected attendance save");
        };
        assert_eq!(args.training, "trn-1");
        assert_eq!(args.set, vec!["u1.presence=ausente", "u1.note=doente"]);
        assert_eq!(args.only, vec!["u1", "u2"]);
    }

    #[test]
    fn program_add_accepts_negative_minutes_for_validation() {
        let cli = Cli::try_parse_from([
            "club", "program", "add", "trn-1", "--exercise", "ex-1", "--minutes", "-5",
        ])
        .expect("cli should parse");

        let Commands::Program {
            action: ProgramCommands::Add(args),
        } = cli.command
        else {
            panic!("expected program add");
        };
        assert_eq!(args.minutes, -5);
        assert_eq!(args.phase, None);
    }

    #[test]
    fn program_remove_parses_without_confirmation() {
        let cli = Cli::try_parse_from(["club", "program", "remove", "trn-1", "te-4"])
            .expect("cli should parse");
        let Commands::Program {
            action: ProgramCommands::Remove(args),
        } = cli.command
        else {
            panic!("expected program remove");
        };
        assert!(!args.yes);
    }
}
