use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("club error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = club_config::ClubConfig::load_with_dotenv()
        .context("failed to load clubhouse configuration")?;
    config
        .validate()
        .context("invalid clubhouse configuration (set CLUB_API__BASE_URL or .clubhouse/config.toml)")?;

    let ctx = context::AppContext::init(config).context("failed to initialize club backend client")?;
    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

/// Log level when `CLUB_LOG` is unset.
const fn default_log_level(quiet: bool, verbose: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, true) => "debug",
        (false, false) => "warn",
    }
}

/// Diagnostics go to stderr so stdout carries only result documents.
fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("CLUB_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_log_level(quiet, verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!("cannot install log subscriber: {error}"))
}

#[cfg(test)]
mod tests {
    use super::default_log_level;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(default_log_level(true, true), "error");
        assert_eq!(default_log_level(false, true), "debug");
        assert_eq!(default_log_level(false, false), "warn");
    }
}
