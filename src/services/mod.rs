use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod products;
pub mod users;

/// Result type returned by the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced by service operations, mapped onto HTTP statuses at the
/// route boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The supplied id is not a well-formed object id.
    #[error("invalid product id")]
    InvalidIdentifier,
    /// The update document carries neither a comment nor a rating.
    #[error("update must include a rating or a comment")]
    MissingRatingOrComment,
    /// A payload failed validation.
    #[error("{0}")]
    Form(String),
    /// No record matched the request.
    #[error("record not found")]
    NotFound,
    /// The login check failed.
    #[error("invalid credentials")]
    Unauthorized,
    /// A uniqueness constraint rejected the write.
    #[error("record already exists")]
    Conflict,
    /// The storage layer failed.
    #[error("storage failure: {0}")]
    Repository(RepositoryError),
    /// An unexpected internal failure; reported generically to clients.
    #[error("{0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::Conflict => ServiceError::Conflict,
            other => ServiceError::Repository(other),
        }
    }
}
