use std::iter;

use crate::error::{RecurrenceError, RecurrenceResult};
use crate::rule::RecurrenceRule;
use crate::workout::Workout;

use super::{ExpansionConfig, SeriesDates};

/// ## Summary
/// Expands a seed workout and its recurrence rule into the full series.
///
/// The seed comes first, followed by one copy per generated date. Every
/// workout carries the series id, which defaults to the seed's id when the
/// rule does not name a series yet, along with the rule itself. Copies get fresh ids and keep the
/// seed's duration and time of day.
///
/// ## Errors
/// Returns `RecurrenceError::ValidationError` if the seed does not end after
/// it starts, or if the rule has a zero `interval` or `occurrences`.
#[tracing::instrument(skip_all, fields(seed_id = %seed.id, frequency = %rule.frequency))]
pub fn expand(
    seed: Workout,
    rule: RecurrenceRule,
    config: &ExpansionConfig,
) -> RecurrenceResult<Vec<Workout>> {
    if seed.end <= seed.start {
        return Err(RecurrenceError::ValidationError(format!(
            "workout must end after it starts (start {}, end {})",
            seed.start, seed.end
        )));
    }

    let series_id = rule.series_id.unwrap_or(seed.id);
    let rule = RecurrenceRule {
        series_id: Some(series_id),
        ..rule
    };
    let dates = SeriesDates::new(seed.start, &rule, config)?;
    let seed = Workout {
        series_id: Some(series_id),
        recurrence: Some(rule),
        ..seed
    };

    let generated: Vec<Workout> = dates.map_while(|start| seed.repeat_at(start)).collect();
    let series: Vec<Workout> = iter::once(seed).chain(generated).collect();

    tracing::debug!(
        %series_id,
        instances = series.len(),
        "Expanded recurring workout series"
    );

    Ok(series)
}
