use anyhow::Context;
use clap::Parser;
use tracing::debug;

use budget_cli::cli::Cli;
use budget_cli::commands;
use budget_cli::config::{Config, Settings};
use budget_cli::logging;

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => Config::default(),
    };
    let settings = Settings::resolve(&cli, config);

    logging::init_logging(&settings.log_level, cli.log_file.as_deref())?;
    debug!(?settings, "resolved settings");

    let engine = commands::build_engine(&settings)?;
    let output = commands::run(&cli.command, &engine, &settings)?;
    println!("{output}");

    Ok(())
}
