use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Errors surfaced by repository reads, unit-of-work commits and schema setup.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("entity not found")]
    NotFound,
    /// Key, foreign-key, not-null or check constraint rejected by the database.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("database error: {0}")]
    Database(DieselError),
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
    #[error("migration error: {0}")]
    Migration(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(value: DieselError) -> Self {
        match value {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::CheckViolation,
                info,
            ) => RepositoryError::ConstraintViolation(info.message().to_string()),
            other => RepositoryError::Database(other),
        }
    }
}
