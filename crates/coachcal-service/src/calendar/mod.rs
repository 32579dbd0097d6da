//! In-memory workout calendar.
//!
//! Holds the workouts of one calendar and applies the operations a trainer or
//! client performs on them. Recurring workouts are expanded once, when they are
//! scheduled; afterwards every instance is an independent workout that only
//! remembers its series id.

mod timezone;
mod window;

pub use timezone::CalendarTimeZone;
pub use window::{CalendarWindow, week_start};

use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use coachcal_core::config::Settings;
use coachcal_recurrence::{Attendance, ExpansionConfig, RecurrenceRule, Workout, expand};
use uuid::Uuid;

use crate::error::{ServiceError, ServiceResult};

#[derive(Debug, Clone, Default)]
pub struct WorkoutCalendar {
    workouts: Vec<Workout>,
    expansion: ExpansionConfig,
    timezone: CalendarTimeZone,
}

impl WorkoutCalendar {
    /// Creates an empty calendar in UTC.
    #[must_use]
    pub fn new(expansion: ExpansionConfig) -> Self {
        Self {
            workouts: Vec::new(),
            expansion,
            timezone: CalendarTimeZone::default(),
        }
    }

    /// ## Summary
    /// Creates an empty calendar using the configured default series length
    /// and time zone.
    ///
    /// ## Errors
    /// Returns an error if `recurrence.default_occurrences` is zero or
    /// `calendar.timezone` is not a known zone.
    pub fn from_settings(settings: &Settings) -> ServiceResult<Self> {
        let expansion = ExpansionConfig::try_from(&settings.recurrence)?;
        let timezone = CalendarTimeZone::from_config(&settings.calendar)?;
        tracing::debug!(tz = timezone.name(), "Opened workout calendar");
        Ok(Self {
            timezone,
            ..Self::new(expansion)
        })
    }

    #[must_use]
    pub fn with_timezone(mut self, timezone: CalendarTimeZone) -> Self {
        self.timezone = timezone;
        self
    }

    /// Zone the calendar's wall-clock times are in.
    #[must_use]
    pub const fn timezone(&self) -> CalendarTimeZone {
        self.timezone
    }

    /// Replaces the calendar contents, e.g. with workouts fetched from the API.
    #[must_use]
    pub fn with_workouts(mut self, workouts: Vec<Workout>) -> Self {
        self.workouts = workouts;
        self
    }

    #[must_use]
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    #[must_use]
    pub fn workout(&self, id: Uuid) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// ## Summary
    /// Adds a workout, expanding it into a series first when a recurrence rule
    /// is given. A workout whose id is already on the calendar replaces the
    /// existing entry.
    ///
    /// Returns the workouts that were added, seed first.
    ///
    /// ## Errors
    /// Returns a validation error if the workout does not end after it starts
    /// or the rule is malformed. Nothing is added in that case.
    #[tracing::instrument(skip_all, fields(workout_id = %workout.id, recurring = recurrence.is_some()))]
    pub fn schedule_workout(
        &mut self,
        workout: Workout,
        recurrence: Option<RecurrenceRule>,
    ) -> ServiceResult<Vec<Workout>> {
        let created = match recurrence {
            Some(rule) => expand(workout, rule, &self.expansion)?,
            None => {
                if workout.end <= workout.start {
                    return Err(ServiceError::ValidationError(
                        "workout must end after it starts".to_string(),
                    ));
                }
                vec![workout]
            }
        };

        for workout in &created {
            self.upsert(workout.clone());
        }

        tracing::debug!(count = created.len(), "Scheduled workouts");
        Ok(created)
    }

    /// ## Summary
    /// Replaces the stored workout having the same id.
    ///
    /// ## Errors
    /// Returns `ServiceError::NotFound` if no workout has that id.
    pub fn update_workout(&mut self, workout: Workout) -> ServiceResult<()> {
        let slot = self.find_mut(workout.id)?;
        *slot = workout;
        Ok(())
    }

    /// ## Errors
    /// Returns `ServiceError::NotFound` if no workout has that id.
    pub fn set_attendance(&mut self, id: Uuid, attendance: Attendance) -> ServiceResult<()> {
        self.find_mut(id)?.attendance = attendance;
        Ok(())
    }

    /// ## Summary
    /// Moves a workout to another day, keeping its hour and minute and its
    /// duration in whole minutes. Seconds are dropped.
    ///
    /// ## Errors
    /// Returns `ServiceError::NotFound` if no workout has that id, or a
    /// validation error if the moved workout would leave the supported range.
    #[tracing::instrument(skip(self))]
    pub fn move_workout(&mut self, id: Uuid, target_date: NaiveDate) -> ServiceResult<&Workout> {
        let workout = self.find_mut(id)?;
        let duration = TimeDelta::minutes(workout.duration().num_minutes());
        let start = target_date
            .and_hms_opt(workout.start.hour(), workout.start.minute(), 0)
            .ok_or_else(|| ServiceError::ValidationError("invalid time of day".to_string()))?;
        let end = start.checked_add_signed(duration).ok_or_else(|| {
            ServiceError::ValidationError(format!(
                "workout end out of range after moving to {target_date}"
            ))
        })?;

        workout.start = start;
        workout.end = end;
        Ok(&*workout)
    }

    /// Removes a single workout, leaving the rest of its series untouched.
    pub fn remove_workout(&mut self, id: Uuid) -> Option<Workout> {
        let index = self.workouts.iter().position(|w| w.id == id)?;
        Some(self.workouts.remove(index))
    }

    /// ## Summary
    /// Removes every workout in the series of workout `id`. A workout outside
    /// any series is removed on its own.
    ///
    /// Returns the number of workouts removed.
    #[tracing::instrument(skip(self))]
    pub fn remove_series(&mut self, id: Uuid) -> usize {
        let Some(series_id) = self.workout(id).and_then(|w| w.series_id) else {
            return usize::from(self.remove_workout(id).is_some());
        };

        let before = self.workouts.len();
        self.workouts.retain(|w| !w.is_in_series(series_id));
        let removed = before - self.workouts.len();
        tracing::debug!(%series_id, removed, "Removed workout series");
        removed
    }

    /// ## Summary
    /// Removes workout `id` together with the members of its series starting at
    /// or after `from`. Earlier members stay. A workout outside any series is
    /// removed on its own.
    ///
    /// Returns the number of workouts removed.
    #[tracing::instrument(skip(self))]
    pub fn remove_this_and_following(&mut self, id: Uuid, from: NaiveDateTime) -> usize {
        let Some(series_id) = self.workout(id).and_then(|w| w.series_id) else {
            return usize::from(self.remove_workout(id).is_some());
        };

        let before = self.workouts.len();
        self.workouts
            .retain(|w| w.id != id && !(w.is_in_series(series_id) && w.start >= from));
        let removed = before - self.workouts.len();
        tracing::debug!(%series_id, removed, "Removed workout and following occurrences");
        removed
    }

    /// Members of a series ordered by start.
    #[must_use]
    pub fn series(&self, series_id: Uuid) -> Vec<&Workout> {
        let mut members: Vec<&Workout> = self
            .workouts
            .iter()
            .filter(|w| w.is_in_series(series_id))
            .collect();
        members.sort_by_key(|w| w.start);
        members
    }

    /// Workouts starting within `from..=to`, ordered by start.
    #[must_use]
    pub fn workouts_between(&self, from: NaiveDateTime, to: NaiveDateTime) -> Vec<&Workout> {
        let mut found: Vec<&Workout> = self
            .workouts
            .iter()
            .filter(|w| w.start >= from && w.start <= to)
            .collect();
        found.sort_by_key(|w| w.start);
        found
    }

    /// Workouts visible in `window`, ordered by start.
    #[must_use]
    pub fn workouts_in(&self, window: &CalendarWindow) -> Vec<&Workout> {
        let mut found: Vec<&Workout> = self
            .workouts
            .iter()
            .filter(|w| window.contains_time(w.start))
            .collect();
        found.sort_by_key(|w| w.start);
        found
    }

    fn upsert(&mut self, workout: Workout) {
        match self.workouts.iter_mut().find(|w| w.id == workout.id) {
            Some(existing) => *existing = workout,
            None => self.workouts.push(workout),
        }
    }

    fn find_mut(&mut self, id: Uuid) -> ServiceResult<&mut Workout> {
        self.workouts
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| ServiceError::NotFound(format!("workout {id}")))
    }
}
