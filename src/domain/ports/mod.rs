//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces that infrastructure adapters must implement:
//! - TrainingSessionRepository: Database operations for training sessions
//! - FileStore: Sandboxed file storage
//! - IdGenerator: Identifier generation for new entities

pub mod file_store;
pub mod id_generator;
pub mod training_session_repository;

pub use file_store::{FileReader, FileStore};
pub use id_generator::IdGenerator;
pub use training_session_repository::TrainingSessionRepository;
