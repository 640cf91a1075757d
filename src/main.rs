//! MLD CLI entry point.

use anyhow::Context;
use clap::Parser;

use mld::cli::{Cli, Commands};
use mld::infrastructure::config::ConfigLoader;
use mld::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;

    if let Err(err) = run(cli).await {
        mld::cli::handle_error(err, json_mode);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    let log_config = LogConfig::try_from(&config.logging).context("Invalid logging configuration")?;
    let _logger = LoggerImpl::init(&log_config)?;

    match cli.command {
        Commands::Init(args) => mld::cli::commands::init::execute(args, cli.json).await,
        Commands::Session(args) => {
            mld::cli::commands::session::execute(args, &config, cli.json).await
        }
        Commands::File(args) => mld::cli::commands::file::execute(args, &config, cli.json).await,
    }
}
