use thiserror::Error;

use crate::domain::availability::AvailabilityError;
use crate::repository::RepositoryError;

pub mod appointments;
pub mod availability;
pub mod businesses;
pub mod catalog;
pub mod eligibility;
pub mod schedules;

/// Result alias used by every service function.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failures surfaced by the service layer to the HTTP handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,
    #[error("conflict")]
    Conflict,
    /// Rejected input, carrying a message safe to show to the caller.
    #[error("{0}")]
    Form(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::Conflict => Self::Conflict,
            RepositoryError::MissingReference => {
                Self::Form("referenced record does not exist".to_string())
            }
            RepositoryError::ValidationError(message)
            | RepositoryError::ConstraintViolation(message) => Self::Form(message),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<AvailabilityError> for ServiceError {
    fn from(err: AvailabilityError) -> Self {
        match err {
            AvailabilityError::UnrepresentableTime(_) => Self::Internal(err.to_string()),
            _ => Self::Form(err.to_string()),
        }
    }
}
