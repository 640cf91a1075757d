//! Service layer coordinating domain operations over the ports.

pub mod training_session_service;

pub use training_session_service::{TrainingSessionService, MAX_ID_ATTEMPTS};
