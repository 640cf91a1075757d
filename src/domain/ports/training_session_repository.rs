//! Training session repository port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::TrainingSession;

/// Repository interface for training session persistence.
///
/// Every write is committed before the call returns.
#[async_trait]
pub trait TrainingSessionRepository: Send + Sync {
    /// Insert a new session.
    ///
    /// Fails with `DomainError::DuplicateId` if the id is already taken.
    async fn create(&self, session: &TrainingSession) -> DomainResult<()>;

    /// Get a session by ID.
    async fn get(&self, id: &str) -> DomainResult<Option<TrainingSession>>;

    /// List all sessions in insertion order.
    async fn list(&self) -> DomainResult<Vec<TrainingSession>>;

    /// Replace every mutable column of an existing session.
    ///
    /// Returns the stored row, or `None` when no session has that id.
    async fn update(&self, session: &TrainingSession) -> DomainResult<Option<TrainingSession>>;

    /// Delete a session by ID, returning the number of rows removed.
    async fn delete(&self, id: &str) -> DomainResult<u64>;
}
