//! Command-line interface for MLD.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::file::FileArgs;
use commands::init::InitArgs;
use commands::session::SessionArgs;

#[derive(Parser, Debug)]
#[command(name = "mld", version, about = "Track model training sessions and their artifacts")]
pub struct Cli {
    /// Emit JSON instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .mld/config.yaml)
    #[arg(long, global = true, env = "MLD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize an MLD project in a directory
    Init(InitArgs),
    /// Manage training sessions
    Session(SessionArgs),
    /// Manage stored files
    File(FileArgs),
}

/// Report a command failure and exit with a non-zero status.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        eprintln!("{body}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
