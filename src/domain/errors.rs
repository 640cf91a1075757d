//! Domain errors for the training session tracker.

use thiserror::Error;

/// Unexpected failures raised by the domain and its stores.
///
/// A missing session is not an error; lookups that can miss return
/// [`Outcome::NotFound`](crate::domain::results::Outcome::NotFound) instead.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Duplicate identifier: {0}")]
    DuplicateId(String),

    #[error("Identifier generation exhausted after {attempts} attempts")]
    IdentifierExhausted { attempts: u32 },

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation()
                || db_err.is_check_violation()
                || db_err.is_foreign_key_violation()
            {
                return Self::ConstraintViolation(db_err.message().to_string());
            }
        }
        Self::DatabaseError(err.to_string())
    }
}

/// Errors raised by the sandboxed file store.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid file name '{0}': must be a plain name inside the base directory")]
    InvalidName(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FileResult<T> = Result<T, FileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DomainError::IdentifierExhausted { attempts: 2 }.to_string(),
            "Identifier generation exhausted after 2 attempts"
        );
        assert_eq!(
            FileError::NotFound("a.txt".to_string()).to_string(),
            "File not found: a.txt"
        );
    }

    #[test]
    fn test_row_not_found_maps_to_database_error() {
        let err: DomainError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }
}
