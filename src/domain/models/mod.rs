//! Domain models.

pub mod config;
pub mod file;
pub mod training_session;

pub use config::{Config, DatabaseConfig, FilesConfig, LoggingConfig, SessionsConfig};
pub use file::FileInfo;
pub use training_session::{
    AddTrainingSessionRequest, TrainingSession, TrainingSessionDto, UpdateTrainingSessionRequest,
};
