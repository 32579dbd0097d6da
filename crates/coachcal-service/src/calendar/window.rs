//! Paging state for the visible calendar range.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use coachcal_core::config::{CalendarConfig, CalendarView};

const DAYS_PER_WEEK: u64 = 7;

/// Visible range of the calendar: a run of whole weeks starting on a Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWindow {
    view: CalendarView,
    start: NaiveDate,
    selected: NaiveDate,
}

impl CalendarWindow {
    /// Opens the window on the week containing `today`.
    #[must_use]
    pub fn new(view: CalendarView, today: NaiveDate) -> Self {
        Self {
            view,
            start: week_start(today),
            selected: today,
        }
    }

    /// Opens the configured default view on the week containing `today`.
    #[must_use]
    pub fn from_settings(config: &CalendarConfig, today: NaiveDate) -> Self {
        Self::new(config.default_view, today)
    }

    #[must_use]
    pub const fn view(&self) -> CalendarView {
        self.view
    }

    /// First day (a Monday) of the visible range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn selected(&self) -> NaiveDate {
        self.selected
    }

    /// Last visible day, inclusive.
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.start
            .checked_add_days(Days::new(self.span_days() - 1))
            .unwrap_or(NaiveDate::MAX)
    }

    /// ## Summary
    /// Half-open datetime bounds of the visible range: midnight of the first
    /// day up to, but excluding, midnight after the last day.
    #[must_use]
    pub fn range(&self) -> (NaiveDateTime, NaiveDateTime) {
        let until = self
            .end()
            .succ_opt()
            .map_or(NaiveDateTime::MAX, |day| day.and_time(NaiveTime::MIN));
        (self.start.and_time(NaiveTime::MIN), until)
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end()
    }

    #[must_use]
    pub fn contains_time(&self, at: NaiveDateTime) -> bool {
        let (from, until) = self.range();
        at >= from && at < until
    }

    pub fn set_view(&mut self, view: CalendarView) {
        self.view = view;
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected = date;
    }

    /// Selects `today` and moves the window to its week.
    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.selected = today;
        self.start = week_start(today);
    }

    /// Moves forward one week, whatever the view's span.
    pub fn next(&mut self) {
        match self.start.checked_add_days(Days::new(DAYS_PER_WEEK)) {
            Some(start) => self.start = week_start(start),
            None => tracing::warn!(start = %self.start, "Calendar window at end of range"),
        }
    }

    /// Moves back one week, whatever the view's span.
    pub fn previous(&mut self) {
        match self.start.checked_sub_days(Days::new(DAYS_PER_WEEK)) {
            Some(start) => self.start = week_start(start),
            None => tracing::warn!(start = %self.start, "Calendar window at start of range"),
        }
    }

    fn span_days(&self) -> u64 {
        u64::from(self.view.weeks()) * DAYS_PER_WEEK
    }
}

/// Monday of the ISO week containing `date`.
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}
