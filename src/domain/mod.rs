//! Domain layer for the MLD training session tracker
//!
//! This module contains core business logic and domain models.

pub mod errors;
pub mod models;
pub mod ports;
pub mod results;

pub use errors::{DomainError, DomainResult, FileError, FileResult};
pub use results::Outcome;
