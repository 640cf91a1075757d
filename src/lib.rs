//! MLD - training session tracker
//!
//! Records model training sessions (name, source revision, progress counters)
//! in SQLite and keeps related artifacts in a sandboxed file store.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, tagged results and port traits
//! - **Service Layer** (`services`): session lifecycle over the ports
//! - **Adapters** (`adapters`): SQLite repository and local file store
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use mld::adapters::sqlite::{create_migrated_test_pool, SqliteTrainingSessionRepository};
//! use mld::domain::models::AddTrainingSessionRequest;
//! use mld::services::TrainingSessionService;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let pool = create_migrated_test_pool().await?;
//! let service = TrainingSessionService::new(Arc::new(SqliteTrainingSessionRepository::new(pool)));
//! let session = service
//!     .add_session(AddTrainingSessionRequest {
//!         name: "baseline".to_string(),
//!         description: "first run".to_string(),
//!         git_hash: "abc123".to_string(),
//!     })
//!     .await?;
//! println!("created {}", session.id);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use domain::models::{
    AddTrainingSessionRequest, Config, TrainingSession, TrainingSessionDto,
    UpdateTrainingSessionRequest,
};
pub use domain::ports::{FileStore, IdGenerator, TrainingSessionRepository};
pub use domain::{DomainError, DomainResult, FileError, Outcome};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::TrainingSessionService;
