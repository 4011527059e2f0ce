use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

use crate::domain::appointment::AppointmentError;
use crate::domain::schedule::ScheduleError;

/// Result alias used by every repository operation.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures raised by the storage layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("record already exists")]
    Conflict,
    #[error("referenced record does not exist")]
    MissingReference,
    #[error("invalid data: {0}")]
    ValidationError(String),
    #[error("constraint violated: {0}")]
    ConstraintViolation(String),
    #[error("database error: {0}")]
    DatabaseError(DieselError),
    #[error("connection pool error: {0}")]
    ConnectionError(#[from] diesel::r2d2::PoolError),
}

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => Self::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => Self::Conflict,
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                Self::MissingReference
            }
            DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, info) => {
                Self::ConstraintViolation(info.message().to_string())
            }
            other => Self::DatabaseError(other),
        }
    }
}

impl From<ScheduleError> for RepositoryError {
    fn from(err: ScheduleError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<AppointmentError> for RepositoryError {
    fn from(err: AppointmentError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diesel_not_found_maps_to_not_found() {
        let err = RepositoryError::from(DieselError::NotFound);
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[test]
    fn other_diesel_errors_are_wrapped() {
        let err = RepositoryError::from(DieselError::RollbackTransaction);
        assert!(matches!(err, RepositoryError::DatabaseError(_)));
    }
}
