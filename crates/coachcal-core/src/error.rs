use thiserror::Error;

/// Errors shared by every coachcal crate.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid log filter `{filter}`: {reason}")]
    InvalidLogFilter { filter: String, reason: String },

    #[error("Invariant violation: {0}")]
    InvariantViolation(&'static str),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
