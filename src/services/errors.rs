use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

/// Failures surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input failed schema rules before any write. The message aggregates
    /// every violated field rule and is shown to the user verbatim.
    #[error("{0}")]
    Validation(String),

    /// A stored reference no longer resolves to an existing record. Raised
    /// at hydration time, or on the write path when a name snapshot cannot
    /// be taken.
    #[error("dangling reference: {0}")]
    DanglingReference(String),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound,

    /// The underlying store failed. Never retried here; callers show a
    /// generic failure notification.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
