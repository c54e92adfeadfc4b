use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Result type returned by every repository operation.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors raised by the storage layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested record does not exist.
    #[error("record not found")]
    NotFound,
    /// A unique or foreign key constraint rejected the write.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    /// Another active price already covers part of the requested window.
    #[error("overlapping active price exists")]
    OverlappingPrice,
    /// The price record was already inactive when the deactivation ran.
    #[error("price record is already inactive")]
    AlreadyInactive,
    /// A stored value could not be decoded.
    #[error("corrupted record: {0}")]
    Corrupted(String),
    #[error("database error: {0}")]
    Database(DieselError),
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
}

impl From<DieselError> for RepositoryError {
    fn from(value: DieselError) -> Self {
        match value {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(
                DatabaseErrorKind::UniqueViolation | DatabaseErrorKind::ForeignKeyViolation,
                info,
            ) => RepositoryError::ConstraintViolation(info.message().to_string()),
            other => RepositoryError::Database(other),
        }
    }
}
