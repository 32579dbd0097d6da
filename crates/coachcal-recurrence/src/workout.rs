//! Scheduled workout model.

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rule::RecurrenceRule;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attendance {
    #[default]
    Scheduled,
    Completed,
    Missed,
}

/// Whether the client trains with the coach in person or remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionFormat {
    Online,
    Offline,
}

/// One workout on a client's calendar.
///
/// `start` and `end` are wall-clock times in the calendar's time zone, so
/// weekday and day-of-month arithmetic is done on what the client sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: Uuid,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_day_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<SessionFormat>,
    #[serde(default)]
    pub attendance: Attendance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach_note: Option<String>,
    /// Series this workout was generated in. Kept without a rule for
    /// instances loaded from storage that only remember their series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurrenceRule>,
}

impl Workout {
    /// Creates a scheduled, non-recurring workout with a fresh id.
    #[must_use]
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            start,
            end,
            location: None,
            program_day_id: None,
            trainer_id: None,
            format: None,
            attendance: Attendance::Scheduled,
            coach_note: None,
            series_id: None,
            recurrence: None,
        }
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn with_program_day(mut self, program_day_id: impl Into<String>) -> Self {
        self.program_day_id = Some(program_day_id.into());
        self
    }

    #[must_use]
    pub fn with_trainer(mut self, trainer_id: Uuid) -> Self {
        self.trainer_id = Some(trainer_id);
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: SessionFormat) -> Self {
        self.format = Some(format);
        self
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    #[must_use]
    pub fn is_in_series(&self, series_id: Uuid) -> bool {
        self.series_id == Some(series_id)
    }

    #[must_use]
    pub fn with_series_id(mut self, series_id: Uuid) -> Self {
        self.series_id = Some(series_id);
        self
    }



    /// ## Summary
    /// Copies this workout to a new start time under a fresh id, keeping the
    /// duration and everything else.
    ///
    /// Returns `None` if the shifted end would overflow the supported range.
    #[must_use]
    pub fn repeat_at(&self, start: NaiveDateTime) -> Option<Self> {
        let end = start.checked_add_signed(self.duration())?;
        Some(Self {
            id: Uuid::new_v4(),
            start,
            end,
            ..self.clone()
        })
    }
}
