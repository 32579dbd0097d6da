//! Recurring series expansion.
//!
//! [`SeriesDates`] walks the start times a rule produces after the seed;
//! [`expand`] turns them into workouts sharing one series id.

mod dates;
mod expander;

pub use dates::SeriesDates;
pub use expander::expand;

use coachcal_core::config::RecurrenceConfig;
use coachcal_core::constants::DEFAULT_SERIES_OCCURRENCES;
use coachcal_core::error::CoreError;

use crate::error::{RecurrenceError, RecurrenceResult};

/// ## Summary
/// Policy knobs for expansion that are not part of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionConfig {
    /// Series length, seed included, for rules without an `occurrences` count.
    pub default_occurrences: u32,
}

impl ExpansionConfig {
    /// ## Summary
    /// Builds a config with a custom default series length.
    ///
    /// ## Errors
    /// Returns an error if `default_occurrences` is zero.
    pub fn new(default_occurrences: u32) -> RecurrenceResult<Self> {
        if default_occurrences == 0 {
            return Err(RecurrenceError::ValidationError(
                "default occurrences must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            default_occurrences,
        })
    }
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            default_occurrences: DEFAULT_SERIES_OCCURRENCES,
        }
    }
}

impl TryFrom<&RecurrenceConfig> for ExpansionConfig {
    type Error = RecurrenceError;

    fn try_from(config: &RecurrenceConfig) -> Result<Self, Self::Error> {
        if config.default_occurrences == 0 {
            return Err(CoreError::InvalidConfiguration(
                "recurrence.default_occurrences must be at least 1".to_string(),
            )
            .into());
        }
        Self::new(config.default_occurrences)
    }
}
