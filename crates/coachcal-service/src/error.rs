use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    RecurrenceError(#[from] coachcal_recurrence::RecurrenceError),

    #[error(transparent)]
    CoreError(#[from] coachcal_core::error::CoreError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Non-existent local time (DST gap): {0}")]
    NonExistentTime(String),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
