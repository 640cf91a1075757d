//! Training session domain model.
//!
//! A training session records one run of a model training job: which source
//! revision it was built from and how far it progressed.

use serde::{Deserialize, Serialize};

/// Persisted training session.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSession {
    /// Short URL-safe identifier, assigned at creation and never changed.
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Source revision the session was trained from.
    pub git_hash: Option<String>,
    pub iteration: i64,
    pub epoch: i64,
    pub loss: f64,
}

impl TrainingSession {
    /// Create a session with zeroed progress counters.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            git_hash: None,
            iteration: 0,
            epoch: 0,
            loss: 0.0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_git_hash(mut self, git_hash: impl Into<String>) -> Self {
        self.git_hash = Some(git_hash.into());
        self
    }

    /// Overwrite every mutable field from an update request. The id is kept.
    pub fn apply(&mut self, request: UpdateTrainingSessionRequest) {
        self.name = request.name;
        self.description = request.description;
        self.git_hash = request.git_hash;
        self.iteration = request.iteration;
        self.epoch = request.epoch;
        self.loss = request.loss;
    }
}

/// Request to register a new session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddTrainingSessionRequest {
    pub name: String,
    pub description: String,
    pub git_hash: String,
}

/// Full replacement of a session's mutable fields.
///
/// `None` clears the stored description or git hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateTrainingSessionRequest {
    pub name: String,
    pub description: Option<String>,
    pub git_hash: Option<String>,
    pub iteration: i64,
    pub epoch: i64,
    pub loss: f64,
}

/// Externally facing projection of a [`TrainingSession`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSessionDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub git_hash: Option<String>,
    pub iteration: i64,
    pub epoch: i64,
    pub loss: f64,
}

impl From<TrainingSession> for TrainingSessionDto {
    fn from(session: TrainingSession) -> Self {
        Self {
            id: session.id,
            name: session.name,
            description: session.description,
            git_hash: session.git_hash,
            iteration: session.iteration,
            epoch: session.epoch,
            loss: session.loss,
        }
    }
}
