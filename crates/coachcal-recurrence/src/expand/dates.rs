//! Start times of the workouts following a seed.

use std::iter::FusedIterator;

use chrono::{Datelike, Days, Months, NaiveDateTime};

use super::ExpansionConfig;
use crate::error::RecurrenceResult;
use crate::rule::{Frequency, RecurrenceRule};

const DAYS_PER_WEEK: u32 = 7;

/// ## Summary
/// Iterator over the start times generated after a seed, in increasing order.
///
/// The seed itself is not yielded. At most `cap - 1` items are produced, and
/// iteration stops at the first start later than the rule's end date.
#[derive(Debug, Clone)]
pub struct SeriesDates {
    seed: NaiveDateTime,
    cursor: NaiveDateTime,
    frequency: Frequency,
    interval: u32,
    weekdays: Vec<u8>,
    end_date: Option<NaiveDateTime>,
    remaining: u32,
    generated: u32,
}

impl SeriesDates {
    /// ## Summary
    /// Dates following `seed` under `rule`, bounded by the rule's cap or the
    /// configured default.
    ///
    /// ## Errors
    /// Returns `RecurrenceError::ValidationError` if the rule fails validation.
    pub fn new(
        seed: NaiveDateTime,
        rule: &RecurrenceRule,
        config: &ExpansionConfig,
    ) -> RecurrenceResult<Self> {
        rule.validate()?;

        Ok(Self {
            seed,
            cursor: seed,
            frequency: rule.frequency,
            interval: rule.interval,
            weekdays: rule.weekday_cycle(),
            end_date: rule.end_date,
            remaining: rule.cap(config.default_occurrences).saturating_sub(1),
            generated: 0,
        })
    }

    /// Next candidate after the cursor, or `None` past chrono's range.
    fn advance(&self) -> Option<NaiveDateTime> {
        match self.frequency {
            Frequency::Daily => self
                .cursor
                .checked_add_days(Days::new(u64::from(self.interval))),
            Frequency::Weekly if self.weekdays.is_empty() => self.cursor.checked_add_days(
                Days::new(u64::from(self.interval) * u64::from(DAYS_PER_WEEK)),
            ),
            Frequency::Weekly => {
                let current = self.cursor.weekday().num_days_from_sunday();
                let step = days_to_next_weekday(current, &self.weekdays);
                let step = if step == 0 {
                    u64::from(self.interval) * u64::from(DAYS_PER_WEEK)
                } else {
                    u64::from(step)
                };
                self.cursor.checked_add_days(Days::new(step))
            }
            Frequency::Monthly => {
                // Anchored on the seed so a short month does not pull later
                // occurrences off the seed's day of month.
                let months = self.interval.checked_mul(self.generated.checked_add(1)?)?;
                self.seed.checked_add_months(Months::new(months))
            }
        }
    }
}

/// ## Summary
/// Days from weekday `current` to the next listed weekday, wrapping into the
/// following week when `current` is at or past the last listed day.
///
/// `weekdays` must be sorted ascending and non-empty.
fn days_to_next_weekday(current: u32, weekdays: &[u8]) -> u32 {
    let Some(&first) = weekdays.first() else {
        return 0;
    };
    let next = weekdays
        .iter()
        .map(|&day| u32::from(day))
        .find(|&day| day > current)
        .unwrap_or_else(|| u32::from(first));

    if next > current {
        next - current
    } else {
        DAYS_PER_WEEK - current + next
    }
}

impl Iterator for SeriesDates {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let Some(candidate) = self.advance() else {
            tracing::warn!(cursor = %self.cursor, "Recurrence left the supported date range");
            self.remaining = 0;
            return None;
        };

        if self
            .end_date
            .is_some_and(|end_date| candidate > end_date)
        {
            tracing::trace!(%candidate, "Candidate past end date, series complete");
            self.remaining = 0;
            return None;
        }

        self.cursor = candidate;
        self.generated += 1;
        self.remaining -= 1;
        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, usize::try_from(self.remaining).ok())
    }
}

impl FusedIterator for SeriesDates {}
