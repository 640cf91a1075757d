//! Training session CLI commands.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use std::sync::Arc;

use crate::adapters::sqlite::{initialize_database, SqliteTrainingSessionRepository};
use crate::cli::output::{output, truncate, CommandOutput};
use crate::domain::models::{
    AddTrainingSessionRequest, Config, TrainingSessionDto, UpdateTrainingSessionRequest,
};
use crate::domain::ports::TrainingSessionRepository;
use crate::domain::results::Outcome;
use crate::services::TrainingSessionService;
use crate::utils::{ShortIdGenerator, TextExt};

#[derive(Args, Debug)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommands,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Register a new training session
    Add {
        /// Session name
        name: String,
        /// Session description
        #[arg(short, long)]
        description: String,
        /// Source revision the session trains
        #[arg(short, long)]
        git_hash: String,
    },
    /// List training sessions
    List {
        /// Only show sessions whose name contains this text (case-insensitive)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Show session details
    Show {
        /// Session ID
        id: String,
    },
    /// Update a session; omitted fields keep their current values
    Update {
        /// Session ID
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        git_hash: Option<String>,
        #[arg(long)]
        iteration: Option<i64>,
        #[arg(long)]
        epoch: Option<i64>,
        #[arg(long)]
        loss: Option<f64>,
    },
    /// Delete a session
    Delete {
        /// Session ID
        id: String,
    },
}

#[derive(Debug, serde::Serialize)]
pub struct SessionListOutput {
    pub sessions: Vec<TrainingSessionDto>,
    pub total: usize,
}

impl CommandOutput for SessionListOutput {
    fn to_human(&self) -> String {
        if self.sessions.is_empty() {
            return "No training sessions found.".to_string();
        }

        let mut lines = vec![format!("Found {} session(s):\n", self.total)];
        lines.push(format!(
            "{:<12} {:<24} {:<10} {:>9} {:>7} {:>10}",
            "ID", "NAME", "GIT HASH", "ITERATION", "EPOCH", "LOSS"
        ));
        lines.push("-".repeat(77));

        for session in &self.sessions {
            lines.push(format!(
                "{:<12} {:<24} {:<10} {:>9} {:>7} {:>10.4}",
                session.id,
                truncate(&session.name, 24),
                truncate(session.git_hash.as_deref().unwrap_or("-"), 10),
                session.iteration,
                session.epoch,
                session.loss
            ));
        }

        lines.join("\n")
    }
}

#[derive(Debug, serde::Serialize)]
pub struct SessionDetailOutput {
    pub session: TrainingSessionDto,
}

impl CommandOutput for SessionDetailOutput {
    fn to_human(&self) -> String {
        let s = &self.session;
        [
            format!("Session: {}", s.name),
            format!("ID: {}", s.id),
            format!("Description: {}", s.description.as_deref().unwrap_or("")),
            format!("Git hash: {}", s.git_hash.as_deref().unwrap_or("")),
            format!("Iteration: {}", s.iteration),
            format!("Epoch: {}", s.epoch),
            format!("Loss: {}", s.loss),
        ]
        .join("\n")
    }
}

#[derive(Debug, serde::Serialize)]
pub struct SessionActionOutput {
    pub success: bool,
    pub message: String,
    pub session: Option<TrainingSessionDto>,
}

impl CommandOutput for SessionActionOutput {
    fn to_human(&self) -> String {
        self.message.clone()
    }
}

pub async fn execute(args: SessionArgs, config: &Config, json_mode: bool) -> Result<()> {
    let pool = initialize_database(&config.database)
        .await
        .context("Failed to initialize database. Run 'mld init' first.")?;

    let repo = Arc::new(SqliteTrainingSessionRepository::new(pool));
    let ids = Arc::new(ShortIdGenerator::new(config.sessions.id_length));
    let service = TrainingSessionService::with_id_generator(repo, ids);

    run(args.command, &service, json_mode).await
}

/// Run a session subcommand against an already constructed service.
pub async fn run<R: TrainingSessionRepository>(
    command: SessionCommands,
    service: &TrainingSessionService<R>,
    json_mode: bool,
) -> Result<()> {
    match command {
        SessionCommands::Add { name, description, git_hash } => {
            let session = service
                .add_session(AddTrainingSessionRequest { name, description, git_hash })
                .await?;
            let out = SessionActionOutput {
                success: true,
                message: format!("Training session added: {}", session.id),
                session: Some(session),
            };
            output(&out, json_mode);
        }

        SessionCommands::List { name } => {
            let mut sessions = service.list_sessions().await?;
            if let Some(filter) = name.filter(|f| f.has_value()) {
                sessions.retain(|s| s.name.contains_ignore_case(&filter));
            }
            let out = SessionListOutput {
                total: sessions.len(),
                sessions,
            };
            output(&out, json_mode);
        }

        SessionCommands::Show { id } => match service.get_session(&id).await? {
            Outcome::Success(session) => output(&SessionDetailOutput { session }, json_mode),
            Outcome::NotFound => bail!("Training session not found: {id}"),
        },

        SessionCommands::Update { id, name, description, git_hash, iteration, epoch, loss } => {
            // The service replaces every field, so start from the stored values.
            let current = match service.get_session(&id).await? {
                Outcome::Success(session) => session,
                Outcome::NotFound => bail!("Training session not found: {id}"),
            };

            let request = UpdateTrainingSessionRequest {
                name: name.unwrap_or(current.name),
                description: description.or(current.description),
                git_hash: git_hash.or(current.git_hash),
                iteration: iteration.unwrap_or(current.iteration),
                epoch: epoch.unwrap_or(current.epoch),
                loss: loss.unwrap_or(current.loss),
            };

            let out = match service.update_session(&id, request).await? {
                Outcome::Success(session) => SessionActionOutput {
                    success: true,
                    message: format!("Training session updated: {id}"),
                    session: Some(session),
                },
                Outcome::NotFound => SessionActionOutput {
                    success: false,
                    message: format!("Training session not found: {id}"),
                    session: None,
                },
            };
            output(&out, json_mode);
        }

        SessionCommands::Delete { id } => {
            let removed = service.delete_session(&id).await?;
            let out = SessionActionOutput {
                success: removed > 0,
                message: if removed > 0 {
                    format!("Training session deleted: {id}")
                } else {
                    format!("No training session with id {id}")
                },
                session: None,
            };
            output(&out, json_mode);
        }
    }

    Ok(())
}
