//! Recurrence rule model.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{RecurrenceError, RecurrenceResult};

/// Unit a series repeats in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(RecurrenceError::InvalidFrequency(s.to_string())),
        }
    }
}

/// Weekday index counted from Sunday (0) to Saturday (6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub const SUNDAY: Self = Self(0);
    pub const MONDAY: Self = Self(1);
    pub const TUESDAY: Self = Self(2);
    pub const WEDNESDAY: Self = Self(3);
    pub const THURSDAY: Self = Self(4);
    pub const FRIDAY: Self = Self(5);
    pub const SATURDAY: Self = Self(6);

    /// ## Summary
    /// Builds a weekday from its Sunday-based index.
    ///
    /// ## Errors
    /// Returns `RecurrenceError::InvalidDayOfWeek` for indices above 6.
    pub fn new(index: u8) -> RecurrenceResult<Self> {
        if index < 7 {
            Ok(Self(index))
        } else {
            Err(RecurrenceError::InvalidDayOfWeek(index))
        }
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn weekday(self) -> Weekday {
        match self.0 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        Self(match weekday {
            Weekday::Sun => 0,
            Weekday::Mon => 1,
            Weekday::Tue => 2,
            Weekday::Wed => 3,
            Weekday::Thu => 4,
            Weekday::Fri => 5,
            Weekday::Sat => 6,
        })
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = RecurrenceError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> Self {
        day.0
    }
}

/// How a scheduled workout repeats.
///
/// `series_id` is left empty by callers creating a new series; expansion fills
/// it in with the seed workout's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    /// Repeat every `interval` days, weeks, or months.
    pub interval: u32,
    /// Weekly only. When non-empty the series visits each listed weekday once
    /// per week instead of repeating every `interval` weeks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_week: Vec<DayOfWeek>,
    /// Latest start a generated workout may have, inclusive, in calendar
    /// wall-clock time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDateTime>,
    /// Total number of workouts in the series, seed included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_id: Option<Uuid>,
}

impl RecurrenceRule {
    /// Creates a rule repeating every single `frequency` unit.
    #[must_use]
    pub const fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            interval: 1,
            days_of_week: Vec::new(),
            end_date: None,
            occurrences: None,
            series_id: None,
        }
    }

    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub fn with_days_of_week(mut self, days: impl IntoIterator<Item = DayOfWeek>) -> Self {
        self.days_of_week = days.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_end_date(mut self, end_date: NaiveDateTime) -> Self {
        self.end_date = Some(end_date);
        self
    }

    #[must_use]
    pub fn with_occurrences(mut self, occurrences: u32) -> Self {
        self.occurrences = Some(occurrences);
        self
    }

    #[must_use]
    pub fn with_series_id(mut self, series_id: Uuid) -> Self {
        self.series_id = Some(series_id);
        self
    }

    /// ## Summary
    /// Rejects rules that could never make progress or would produce an empty
    /// series.
    ///
    /// ## Errors
    /// Returns `RecurrenceError::ValidationError` if `interval` or
    /// `occurrences` is zero.
    pub fn validate(&self) -> RecurrenceResult<()> {
        if self.interval == 0 {
            return Err(RecurrenceError::ValidationError(
                "interval must be at least 1".to_string(),
            ));
        }
        if self.occurrences == Some(0) {
            return Err(RecurrenceError::ValidationError(
                "occurrences must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }

    /// ## Summary
    /// Maximum series length for this rule, seed included.
    #[must_use]
    pub fn cap(&self, default_occurrences: u32) -> u32 {
        self.occurrences.unwrap_or(default_occurrences)
    }

    /// ## Summary
    /// Listed weekdays in ascending order without duplicates, as indices.
    /// Empty unless the rule is weekly.
    #[must_use]
    pub fn weekday_cycle(&self) -> Vec<u8> {
        if self.frequency != Frequency::Weekly {
            return Vec::new();
        }
        let mut days: Vec<u8> = self.days_of_week.iter().map(|d| d.index()).collect();
        days.sort_unstable();
        days.dedup();
        days
    }
}
