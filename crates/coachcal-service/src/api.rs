//! Request and response bodies of the workouts API.
//!
//! The API speaks UTC timestamps and flat `recurrence_*` fields; the calendar
//! works in wall-clock time with a nested [`RecurrenceRule`]. The conversions
//! here go through [`CalendarTimeZone`] so that weekday and day-of-month
//! arithmetic happens in the zone the client sees. Durations are measured
//! between instants, so a workout keeps its real length across DST changes.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use coachcal_recurrence::{Attendance, DayOfWeek, Frequency, RecurrenceRule, SessionFormat, Workout};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::CalendarTimeZone;
use crate::error::{ServiceError, ServiceResult};

/// Body of a create-workout request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkoutRequest {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub format: Option<SessionFormat>,
    #[serde(default)]
    pub trainer_id: Option<Uuid>,
    #[serde(default)]
    pub program_day_id: Option<String>,
    #[serde(default)]
    pub recurrence_frequency: Option<Frequency>,
    #[serde(default)]
    pub recurrence_interval: Option<u32>,
    #[serde(default)]
    pub recurrence_days_of_week: Option<Vec<DayOfWeek>>,
    #[serde(default)]
    pub recurrence_end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub recurrence_occurrences: Option<u32>,
    #[serde(default)]
    pub recurrence_series_id: Option<Uuid>,
}

impl CreateWorkoutRequest {
    /// ## Summary
    /// Recurrence rule described by the flat `recurrence_*` fields, with the
    /// end date moved into calendar wall-clock time.
    ///
    /// Without a frequency the request is for a single workout and the other
    /// recurrence fields are ignored. A missing interval means every unit.
    #[must_use]
    pub fn recurrence(&self, tz: &CalendarTimeZone) -> Option<RecurrenceRule> {
        let frequency = self.recurrence_frequency?;
        Some(RecurrenceRule {
            frequency,
            interval: self.recurrence_interval.unwrap_or(1),
            days_of_week: self.recurrence_days_of_week.clone().unwrap_or_default(),
            end_date: self.recurrence_end_date.map(|end| tz.to_local(end)),
            occurrences: self.recurrence_occurrences,
            series_id: self.recurrence_series_id,
        })
    }

    /// ## Summary
    /// Splits the request into a seed workout with a fresh id, in calendar
    /// wall-clock time, and its optional recurrence rule.
    ///
    /// ## Errors
    /// Returns `ServiceError::ValidationError` if the workout's length pushes
    /// its end out of the supported range.
    pub fn into_parts(
        self,
        tz: &CalendarTimeZone,
    ) -> ServiceResult<(Workout, Option<RecurrenceRule>)> {
        let recurrence = self.recurrence(tz);
        let start = tz.to_local(self.start);
        let end = local_end(start, self.end - self.start)?;
        let workout = Workout {
            location: self.location,
            program_day_id: self.program_day_id,
            trainer_id: self.trainer_id,
            format: self.format,
            ..Workout::new(self.title, start, end)
        };
        Ok((workout, recurrence))
    }
}

/// A workout as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutResponse {
    pub id: Uuid,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub format: Option<SessionFormat>,
    #[serde(default)]
    pub trainer_id: Option<Uuid>,
    #[serde(default)]
    pub program_day_id: Option<String>,
    #[serde(default)]
    pub attendance: Attendance,
    #[serde(default)]
    pub coach_note: Option<String>,
    #[serde(default)]
    pub recurrence_series_id: Option<Uuid>,
    #[serde(default)]
    pub recurrence_frequency: Option<Frequency>,
    #[serde(default)]
    pub recurrence_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recurrence_days_of_week: Vec<DayOfWeek>,
    #[serde(default)]
    pub recurrence_end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub recurrence_occurrences: Option<u32>,
}

impl WorkoutResponse {
    /// ## Summary
    /// Flattens a calendar workout into its API shape with UTC timestamps.
    ///
    /// The end is the converted start plus the workout's duration, so a start
    /// shifted out of a DST gap does not shorten the workout.
    ///
    /// ## Errors
    /// Returns `ServiceError::NonExistentTime` if a wall-clock time cannot be
    /// placed in the calendar's zone.
    pub fn from_workout(workout: &Workout, tz: &CalendarTimeZone) -> ServiceResult<Self> {
        let rule = workout.recurrence.as_ref();
        let start = tz.to_utc(workout.start)?;
        let end = start
            .checked_add_signed(workout.duration())
            .ok_or_else(|| ServiceError::NonExistentTime(workout.end.to_string()))?;
        let end_date = rule
            .and_then(|r| r.end_date)
            .map(|end_date| tz.to_utc(end_date))
            .transpose()?;

        Ok(Self {
            id: workout.id,
            title: workout.title.clone(),
            start,
            end,
            location: workout.location.clone(),
            format: workout.format,
            trainer_id: workout.trainer_id,
            program_day_id: workout.program_day_id.clone(),
            attendance: workout.attendance,
            coach_note: workout.coach_note.clone(),
            recurrence_series_id: workout.series_id,
            recurrence_frequency: rule.map(|r| r.frequency),
            recurrence_interval: rule.map(|r| r.interval),
            recurrence_days_of_week: rule.map(|r| r.days_of_week.clone()).unwrap_or_default(),
            recurrence_end_date: end_date,
            recurrence_occurrences: rule.and_then(|r| r.occurrences),
        })
    }

    /// ## Summary
    /// Maps an API workout back into calendar wall-clock time.
    ///
    /// `recurrence_series_id` alone keeps the workout in its series. The
    /// recurrence rule is only rebuilt when the response names a frequency.
    ///
    /// ## Errors
    /// Returns `ServiceError::ValidationError` if the workout's length pushes
    /// its end out of the supported range.
    pub fn into_workout(self, tz: &CalendarTimeZone) -> ServiceResult<Workout> {
        let recurrence = self.recurrence_frequency.map(|frequency| RecurrenceRule {
            frequency,
            interval: self.recurrence_interval.unwrap_or(1),
            days_of_week: self.recurrence_days_of_week,
            end_date: self.recurrence_end_date.map(|end| tz.to_local(end)),
            occurrences: self.recurrence_occurrences,
            series_id: self.recurrence_series_id,
        });
        let start = tz.to_local(self.start);
        let end = local_end(start, self.end - self.start)?;

        Ok(Workout {
            id: self.id,
            title: self.title,
            start,
            end,
            location: self.location,
            program_day_id: self.program_day_id,
            trainer_id: self.trainer_id,
            format: self.format,
            attendance: self.attendance,
            coach_note: self.coach_note,
            series_id: self.recurrence_series_id,
            recurrence,
        })
    }
}

fn local_end(start: NaiveDateTime, duration: TimeDelta) -> ServiceResult<NaiveDateTime> {
    start.checked_add_signed(duration).ok_or_else(|| {
        ServiceError::ValidationError(format!("workout starting {start} ends out of range"))
    })
}
