//! Implementation of the `mld init` command.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tokio::fs;

use crate::adapters::sqlite::initialize_database;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Config, DatabaseConfig};
use crate::infrastructure::config::loader::{ConfigLoader, PROJECT_DIR};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long, short)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, serde::Serialize)]
pub struct InitOutput {
    pub success: bool,
    pub message: String,
    pub initialized_path: PathBuf,
    pub config_written: bool,
    pub database_path: PathBuf,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![self.message.clone()];
        if self.config_written {
            lines.push(format!("Configuration written to {PROJECT_DIR}/config.yaml"));
        }
        lines.push(format!("Database ready at {}", self.database_path.display()));
        lines.join("\n")
    }
}

pub async fn execute(args: InitArgs, json_mode: bool) -> Result<()> {
    let target_path = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir().context("Failed to get current directory")?.join(&args.path)
    };

    let project_dir = target_path.join(PROJECT_DIR);
    let config_path = project_dir.join("config.yaml");

    fs::create_dir_all(&project_dir)
        .await
        .with_context(|| format!("Failed to create {}", project_dir.display()))?;

    let config_written = args.force || !config_path.exists();
    let config = if config_written {
        let defaults = Config::default();
        let yaml = serde_yaml::to_string(&defaults).context("Failed to serialize default config")?;
        fs::write(&config_path, yaml)
            .await
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        defaults
    } else {
        // Keep the paths the session and file commands will resolve.
        ConfigLoader::load_from_file(&config_path)?
    };

    fs::create_dir_all(target_path.join(&config.files.base_path))
        .await
        .context("Failed to create file store directory")?;

    let database_path = target_path.join(&config.database.path);
    let database = DatabaseConfig {
        path: database_path.to_string_lossy().into_owned(),
        ..config.database
    };
    let pool = initialize_database(&database)
        .await
        .context("Failed to initialize database")?;
    pool.close().await;

    let message = if config_written {
        format!("Initialized MLD project in {}", target_path.display())
    } else {
        "Project already initialized; configuration left unchanged. Use --force to rewrite it.".to_string()
    };

    output(
        &InitOutput {
            success: true,
            message,
            initialized_path: target_path,
            config_written,
            database_path,
        },
        json_mode,
    );
    Ok(())
}
