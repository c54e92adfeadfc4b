use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod brands;
pub mod item_categories;
pub mod master_materials;
pub mod sites;
pub mod supplier_prices;
pub mod suppliers;

/// Result type returned by every service function.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the service layer to the HTTP handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A referenced record does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The request breaks a business rule.
    #[error("{0}")]
    InvalidData(String),
    /// The request clashes with existing data, such as a duplicate name.
    #[error("{0}")]
    Conflict(String),
    /// The request payload failed validation.
    #[error("{0}")]
    Form(String),
    /// Storage or other unexpected failure. The message is for logs only.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Message used when an add or update collides with another active price.
pub const OVERLAPPING_PRICE_MESSAGE: &str = "An active price for this supplier, material, and unit \
already exists for an overlapping period.";

/// Message used when deactivating a price that is no longer active.
pub const ALREADY_INACTIVE_MESSAGE: &str = "Price entry is already inactive.";

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound("Record not found.".to_string()),
            RepositoryError::ConstraintViolation(message) => ServiceError::Conflict(message),
            RepositoryError::OverlappingPrice => {
                ServiceError::InvalidData(OVERLAPPING_PRICE_MESSAGE.to_string())
            }
            RepositoryError::AlreadyInactive => {
                ServiceError::InvalidData(ALREADY_INACTIVE_MESSAGE.to_string())
            }
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_map_to_service_errors() {
        assert!(matches!(
            ServiceError::from(RepositoryError::NotFound),
            ServiceError::NotFound(_)
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::ConstraintViolation("dup".into())),
            ServiceError::Conflict(message) if message == "dup"
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::OverlappingPrice),
            ServiceError::InvalidData(message) if message == OVERLAPPING_PRICE_MESSAGE
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::AlreadyInactive),
            ServiceError::InvalidData(message) if message == ALREADY_INACTIVE_MESSAGE
        ));
        assert!(matches!(
            ServiceError::from(RepositoryError::Corrupted("price `x`".into())),
            ServiceError::Internal(_)
        ));
    }
}
