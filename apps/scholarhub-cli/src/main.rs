//! scholarhub CLI
//!
//! Searches and browses the publication catalog, and signs in to publish.

mod args;
mod commands;
mod output;

use clap::Parser;
use scholarhub_core::ScholarConfig;
use tracing_subscriber::EnvFilter;

use args::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ScholarConfig::load(cli.config.as_deref(), cli.api_url.as_deref())?;

    init_logging(&config.logging.level, cli.verbose);

    commands::run(cli, config).await
}

fn init_logging(level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
