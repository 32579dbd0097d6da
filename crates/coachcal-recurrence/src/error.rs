use thiserror::Error;

/// Errors raised while validating or expanding a recurrence rule.
#[derive(Error, Debug)]
pub enum RecurrenceError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown recurrence frequency: {0}")]
    InvalidFrequency(String),

    #[error("Day of week out of range (expected 0-6): {0}")]
    InvalidDayOfWeek(u8),

    #[error(transparent)]
    CoreError(#[from] coachcal_core::error::CoreError),
}

pub type RecurrenceResult<T> = std::result::Result<T, RecurrenceError>;
