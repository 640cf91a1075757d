//! Training session lifecycle service.
//!
//! Owns the translation between persisted sessions and DTOs and decides which
//! outcomes are expected (`Outcome::NotFound`) and which are failures
//! (`DomainError`).

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    AddTrainingSessionRequest, TrainingSession, TrainingSessionDto, UpdateTrainingSessionRequest,
};
use crate::domain::ports::{IdGenerator, TrainingSessionRepository};
use crate::domain::results::Outcome;
use crate::utils::ShortIdGenerator;

/// Identifier draws per insert: the first attempt plus one retry on collision.
pub const MAX_ID_ATTEMPTS: u32 = 2;

pub struct TrainingSessionService<R: TrainingSessionRepository> {
    repository: Arc<R>,
    ids: Arc<dyn IdGenerator>,
}

impl<R: TrainingSessionRepository> TrainingSessionService<R> {
    /// Create a service that generates default-length short ids.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_id_generator(repository, Arc::new(ShortIdGenerator::default()))
    }

    pub fn with_id_generator(repository: Arc<R>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repository, ids }
    }

    /// List every session in insertion order.
    #[instrument(skip(self), err)]
    pub async fn list_sessions(&self) -> DomainResult<Vec<TrainingSessionDto>> {
        let sessions = self.repository.list().await?;
        debug!(count = sessions.len(), "listed training sessions");
        Ok(sessions.into_iter().map(TrainingSessionDto::from).collect())
    }

    /// Get a single session.
    #[instrument(skip(self), err)]
    pub async fn get_session(&self, id: &str) -> DomainResult<Outcome<TrainingSessionDto>> {
        let session = self.repository.get(id).await?;
        Ok(Outcome::from(session).map(TrainingSessionDto::from))
    }

    /// Register a new session under a freshly generated id.
    ///
    /// A colliding id is regenerated once; a second collision is reported as
    /// `DomainError::IdentifierExhausted`.
    #[instrument(skip(self, request), fields(name = %request.name), err)]
    pub async fn add_session(&self, request: AddTrainingSessionRequest) -> DomainResult<TrainingSessionDto> {
        let AddTrainingSessionRequest {
            name,
            description,
            git_hash,
        } = request;

        for attempt in 1..=MAX_ID_ATTEMPTS {
            let session = TrainingSession::new(self.ids.generate(), name.clone())
                .with_description(description.clone())
                .with_git_hash(git_hash.clone());

            match self.repository.create(&session).await {
                Ok(()) => {
                    info!(session_id = %session.id, "training session added");
                    return Ok(session.into());
                }
                Err(DomainError::DuplicateId(id)) => {
                    warn!(attempt, session_id = %id, "generated session id collided, regenerating");
                }
                Err(err) => return Err(err),
            }
        }

        Err(DomainError::IdentifierExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    /// Replace every mutable field of an existing session.
    ///
    /// Returns `Outcome::NotFound` without touching the store when the id is unknown.
    #[instrument(skip(self, request), err)]
    pub async fn update_session(
        &self,
        id: &str,
        request: UpdateTrainingSessionRequest,
    ) -> DomainResult<Outcome<TrainingSessionDto>> {
        let mut session = TrainingSession::new(id, String::new());
        session.apply(request);

        let updated = self.repository.update(&session).await?;
        match &updated {
            Some(_) => info!(session_id = id, "training session updated"),
            None => debug!(session_id = id, "update skipped, session not found"),
        }
        Ok(Outcome::from(updated).map(TrainingSessionDto::from))
    }

    /// Delete a session, returning the number of rows removed (0 when absent).
    #[instrument(skip(self), err)]
    pub async fn delete_session(&self, id: &str) -> DomainResult<u64> {
        let removed = self.repository.delete(id).await?;
        info!(session_id = id, removed, "training session delete");
        Ok(removed)
    }
}
