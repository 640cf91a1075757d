//! Common test utilities for integration tests

use std::sync::Arc;

use mld::adapters::sqlite::{create_migrated_test_pool, SqliteTrainingSessionRepository};
use mld::domain::models::{AddTrainingSessionRequest, UpdateTrainingSessionRequest};
use mld::services::TrainingSessionService;

pub type Service = TrainingSessionService<SqliteTrainingSessionRepository>;

/// Create a service over a fresh, migrated in-memory database.
pub async fn setup_service() -> Service {
    let pool = create_migrated_test_pool()
        .await
        .expect("failed to create test database");
    TrainingSessionService::new(Arc::new(SqliteTrainingSessionRepository::new(pool)))
}

pub fn add_request(name: &str, description: &str, git_hash: &str) -> AddTrainingSessionRequest {
    AddTrainingSessionRequest {
        name: name.to_string(),
        description: description.to_string(),
        git_hash: git_hash.to_string(),
    }
}

#[allow(dead_code)]
pub fn update_request(iteration: i64, epoch: i64, loss: f64) -> UpdateTrainingSessionRequest {
    UpdateTrainingSessionRequest {
        name: "Updated Session".to_string(),
        description: Some("Updated session description".to_string()),
        git_hash: Some("def456".to_string()),
        iteration,
        epoch,
        loss,
    }
}
