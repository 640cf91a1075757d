//! File store CLI commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

use crate::adapters::filesystem::LocalFileStore;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Config, FileInfo};
use crate::domain::ports::FileStore;

#[derive(Args, Debug)]
pub struct FileArgs {
    #[command(subcommand)]
    pub command: FileCommands,
}

#[derive(Subcommand, Debug)]
pub enum FileCommands {
    /// List stored files
    List,
    /// Copy a local file into the store
    Upload {
        /// Local file to upload
        path: PathBuf,
        /// Name to store it under (defaults to the local file name)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Read a stored file
    Get {
        /// Stored file name
        name: String,
        /// Write to this path instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Delete a stored file
    Delete {
        /// Stored file name
        name: String,
    },
}

#[derive(Debug, serde::Serialize)]
pub struct FileListOutput {
    pub files: Vec<FileInfo>,
    pub total: usize,
}

impl CommandOutput for FileListOutput {
    fn to_human(&self) -> String {
        if self.files.is_empty() {
            return "No files stored.".to_string();
        }

        let mut lines = vec![format!("{:<40} {:>12} {:<20}", "NAME", "SIZE", "MODIFIED")];
        lines.push("-".repeat(74));
        for file in &self.files {
            let modified = file
                .modified_at
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default();
            lines.push(format!("{:<40} {:>12} {:<20}", file.name, file.size, modified));
        }
        lines.join("\n")
    }
}

#[derive(Debug, serde::Serialize)]
pub struct FileActionOutput {
    pub success: bool,
    pub message: String,
    pub name: String,
    pub bytes: Option<u64>,
}

impl CommandOutput for FileActionOutput {
    fn to_human(&self) -> String {
        self.message.clone()
    }
}

pub async fn execute(args: FileArgs, config: &Config, json_mode: bool) -> Result<()> {
    let store = LocalFileStore::from_config(&config.files);

    match args.command {
        FileCommands::List => {
            let files = store.list().await?;
            output(
                &FileListOutput {
                    total: files.len(),
                    files,
                },
                json_mode,
            );
        }

        FileCommands::Upload { path, name } => {
            let name = match name {
                Some(name) => name,
                None => path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .with_context(|| format!("{} has no file name", path.display()))?,
            };
            let mut source = tokio::fs::File::open(&path)
                .await
                .with_context(|| format!("Failed to open {}", path.display()))?;

            let bytes = store.upload(&name, &mut source).await?;
            output(
                &FileActionOutput {
                    success: true,
                    message: format!("Stored {name} ({bytes} bytes)"),
                    name,
                    bytes: Some(bytes),
                },
                json_mode,
            );
        }

        FileCommands::Get { name, output: target } => {
            let mut reader = store.open(&name).await?;
            match target {
                Some(target) => {
                    let mut file = tokio::fs::File::create(&target)
                        .await
                        .with_context(|| format!("Failed to create {}", target.display()))?;
                    let bytes = tokio::io::copy(&mut reader, &mut file).await?;
                    file.flush().await?;
                    output(
                        &FileActionOutput {
                            success: true,
                            message: format!("Wrote {name} to {} ({bytes} bytes)", target.display()),
                            name,
                            bytes: Some(bytes),
                        },
                        json_mode,
                    );
                }
                None => {
                    let mut stdout = tokio::io::stdout();
                    tokio::io::copy(&mut reader, &mut stdout).await?;
                    stdout.flush().await?;
                }
            }
        }

        FileCommands::Delete { name } => {
            store.delete(&name).await?;
            output(
                &FileActionOutput {
                    success: true,
                    message: format!("Deleted {name}"),
                    name,
                    bytes: None,
                },
                json_mode,
            );
        }
    }

    Ok(())
}
