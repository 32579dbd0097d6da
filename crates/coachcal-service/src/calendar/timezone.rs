//! Conversion between client UTC timestamps and calendar wall-clock time.

use std::str::FromStr;

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use coachcal_core::config::CalendarConfig;

use crate::error::{ServiceError, ServiceResult};

/// Zone the calendar's weekdays and days of month are counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarTimeZone {
    tz: Tz,
}

impl CalendarTimeZone {
    /// ## Summary
    /// Resolves an IANA zone name such as `Europe/Moscow`.
    ///
    /// ## Errors
    /// Returns `ServiceError::UnknownTimezone` if the name is not in the zone
    /// database.
    pub fn parse(name: &str) -> ServiceResult<Self> {
        let tz = Tz::from_str(name.trim())
            .map_err(|_err| ServiceError::UnknownTimezone(name.to_string()))?;
        Ok(Self { tz })
    }

    /// ## Summary
    /// Resolves the zone named in the calendar settings.
    ///
    /// ## Errors
    /// Returns `ServiceError::UnknownTimezone` if the configured name is invalid.
    pub fn from_config(config: &CalendarConfig) -> ServiceResult<Self> {
        Self::parse(&config.timezone)
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.tz.name()
    }

    #[must_use]
    pub fn to_local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.tz).naive_local()
    }

    /// ## Summary
    /// Converts calendar wall-clock time back to UTC.
    ///
    /// A time repeated by a DST fold resolves to its first occurrence. A time
    /// skipped by a DST gap is shifted forward by one hour.
    ///
    /// ## Errors
    /// Returns `ServiceError::NonExistentTime` if the shifted time is still
    /// not representable.
    pub fn to_utc(&self, local: NaiveDateTime) -> ServiceResult<DateTime<Utc>> {
        match self.tz.from_local_datetime(&local) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Ok(dt.with_timezone(&Utc)),
            LocalResult::None => {
                let shifted = local
                    .checked_add_signed(TimeDelta::hours(1))
                    .ok_or_else(|| ServiceError::NonExistentTime(local.to_string()))?;
                tracing::debug!(%local, %shifted, tz = self.name(), "Shifting time out of DST gap");
                self.tz
                    .from_local_datetime(&shifted)
                    .earliest()
                    .map(|dt| dt.with_timezone(&Utc))
                    .ok_or_else(|| {
                        ServiceError::NonExistentTime(format!("{local} in timezone {}", self.name()))
                    })
            }
        }
    }
}

impl Default for CalendarTimeZone {
    fn default() -> Self {
        Self { tz: Tz::UTC }
    }
}
