//! SQLite implementation of the TrainingSessionRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::TrainingSession;
use crate::domain::ports::TrainingSessionRepository;

const SELECT_COLUMNS: &str = "id, name, description, git_hash, iteration, epoch, loss";

#[derive(Clone)]
pub struct SqliteTrainingSessionRepository {
    pool: SqlitePool,
}

impl SqliteTrainingSessionRepository {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrainingSessionRepository for SqliteTrainingSessionRepository {
    async fn create(&self, session: &TrainingSession) -> DomainResult<()> {
        let result = sqlx::query(
            r#"INSERT INTO training_sessions (id, name, description, git_hash, iteration, epoch, loss)
               VALUES (?, ?, ?, ?, ?, ?, ?)"#
        )
        .bind(&session.id)
        .bind(&session.name)
        .bind(&session.description)
        .bind(&session.git_hash)
        .bind(session.iteration)
        .bind(session.epoch)
        .bind(session.loss)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(DomainError::DuplicateId(session.id.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn get(&self, id: &str) -> DomainResult<Option<TrainingSession>> {
        let row: Option<TrainingSessionRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM training_sessions WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> DomainResult<Vec<TrainingSession>> {
        let rows: Vec<TrainingSessionRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM training_sessions ORDER BY rowid"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, session: &TrainingSession) -> DomainResult<Option<TrainingSession>> {
        let row: Option<TrainingSessionRow> = sqlx::query_as(&format!(
            r#"UPDATE training_sessions SET name = ?, description = ?, git_hash = ?,
               iteration = ?, epoch = ?, loss = ?
               WHERE id = ?
               RETURNING {SELECT_COLUMNS}"#
        ))
        .bind(&session.name)
        .bind(&session.description)
        .bind(&session.git_hash)
        .bind(session.iteration)
        .bind(session.epoch)
        .bind(session.loss)
        .bind(&session.id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: &str) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM training_sessions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[derive(sqlx::FromRow)]
struct TrainingSessionRow {
    id: String,
    name: String,
    description: Option<String>,
    git_hash: Option<String>,
    iteration: i64,
    epoch: i64,
    loss: f64,
}

impl From<TrainingSessionRow> for TrainingSession {
    fn from(row: TrainingSessionRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            git_hash: row.git_hash,
            iteration: row.iteration,
            epoch: row.epoch,
            loss: row.loss,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::create_migrated_test_pool;

    async fn setup_repo() -> SqliteTrainingSessionRepository {
        let pool = create_migrated_test_pool().await.unwrap();
        SqliteTrainingSessionRepository::new(pool)
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = setup_repo().await;
        let session = TrainingSession::new("s1", "Run").with_git_hash("abc123");
        repo.create(&session).await.unwrap();

        let fetched = repo.get("s1").await.unwrap().unwrap();
        assert_eq!(fetched, session);
        assert!(repo.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id_is_reported() {
        let repo = setup_repo().await;
        repo.create(&TrainingSession::new("dup", "First")).await.unwrap();

        let err = repo.create(&TrainingSession::new("dup", "Second")).await.unwrap_err();
        assert!(matches!(err, DomainError::DuplicateId(id) if id == "dup"));
    }

    #[tokio::test]
    async fn test_empty_name_violates_constraint() {
        let repo = setup_repo().await;
        let err = repo.create(&TrainingSession::new("s1", "")).await.unwrap_err();
        assert!(matches!(err, DomainError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = setup_repo().await;
        for id in ["zz", "aa", "mm"] {
            repo.create(&TrainingSession::new(id, id)).await.unwrap();
        }

        let ids: Vec<String> = repo.list().await.unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["zz", "aa", "mm"]);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = setup_repo().await;
        let updated = repo.update(&TrainingSession::new("ghost", "Ghost")).await.unwrap();
        assert!(updated.is_none());
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_reports_rows_removed() {
        let repo = setup_repo().await;
        repo.create(&TrainingSession::new("s1", "Run")).await.unwrap();

        assert_eq!(repo.delete("s1").await.unwrap(), 1);
        assert_eq!(repo.delete("s1").await.unwrap(), 0);
    }
}
