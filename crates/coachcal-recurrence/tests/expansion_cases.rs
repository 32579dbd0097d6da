//! Table-driven and property checks for series expansion.

mod expansion_cases_data;

use chrono::{Datelike, TimeDelta};
use coachcal_recurrence::{ExpansionConfig, Frequency, RecurrenceRule, Workout, expand};
use expansion_cases_data::{assert_case, build, expansion_cases, parse_date, parse_datetime};

#[test_log::test]
fn expansion_cases_table() {
    for case in expansion_cases() {
        assert_case(&case);
    }
}

#[test]
fn every_case_upholds_series_invariants() {
    for case in expansion_cases() {
        let series = build(&case);
        let seed = &series[0];
        let series_id = seed.series_id;

        assert_eq!(series_id, Some(seed.id), "Case {}", case.name);
        assert!(
            series.len() <= usize::try_from(case.occurrences.unwrap_or(52)).unwrap_or(usize::MAX),
            "Case {} exceeded its cap",
            case.name
        );
        assert!(
            series.windows(2).all(|pair| pair[0].start < pair[1].start),
            "Case {} is not strictly increasing",
            case.name
        );
        assert!(
            series.iter().all(|w| w.duration() == seed.duration()),
            "Case {} changed duration",
            case.name
        );
        assert!(
            series.iter().all(|w| w.series_id == series_id),
            "Case {} mixed series ids",
            case.name
        );
        assert!(
            series.iter().all(|w| w.start.time() == seed.start.time()),
            "Case {} moved the time of day",
            case.name
        );
        if let Some(end_date) = case.end_date.map(parse_datetime) {
            assert!(
                series.iter().skip(1).all(|w| w.start <= end_date),
                "Case {} went past its end date",
                case.name
            );
        }
    }
}

#[test]
fn daily_kth_instance_is_k_intervals_later() {
    let start = parse_datetime("2024-03-30T21:15:00");
    for interval in 1..=5_u32 {
        let seed = Workout::new("Run", start, start + TimeDelta::minutes(30));
        let rule = RecurrenceRule::new(Frequency::Daily)
            .with_interval(interval)
            .with_occurrences(20);

        let series = expand(seed, rule, &ExpansionConfig::default()).expect("expands");

        assert_eq!(series.len(), 20);
        for (k, workout) in series.iter().enumerate() {
            let k = i64::try_from(k).expect("small index");
            assert_eq!(
                workout.start,
                start + TimeDelta::days(k * i64::from(interval)),
                "interval {interval}, instance {k}"
            );
        }
    }
}

#[test]
fn monthly_keeps_day_of_month_when_possible() {
    for day in [1, 15, 28, 29, 30, 31] {
        let start = parse_date("2023-01-01")
            .with_day(day)
            .and_then(|d| d.and_hms_opt(17, 0, 0))
            .expect("valid seed");
        let seed = Workout::new("Mobility", start, start + TimeDelta::hours(1));
        let rule = RecurrenceRule::new(Frequency::Monthly).with_occurrences(24);

        let series = expand(seed, rule, &ExpansionConfig::default()).expect("expands");

        assert_eq!(series.len(), 24);
        for workout in &series {
            let date = workout.start.date();
            let month_len = days_in_month(date.year(), date.month());
            assert_eq!(date.day(), day.min(month_len), "seed day {day}, got {date}");
        }
    }
}

#[test]
fn custom_default_cap_applies_to_open_rules() {
    let start = parse_datetime("2024-01-01T10:00:00");
    let seed = Workout::new("Yoga", start, start + TimeDelta::hours(1));
    let config = ExpansionConfig::new(8).expect("valid config");

    let open = expand(
        seed.clone(),
        RecurrenceRule::new(Frequency::Weekly),
        &config,
    )
    .expect("expands");
    assert_eq!(open.len(), 8);

    let counted = expand(
        seed,
        RecurrenceRule::new(Frequency::Weekly).with_occurrences(12),
        &config,
    )
    .expect("expands");
    assert_eq!(counted.len(), 12);
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    chrono::NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map_or(31, |d| d.day())
}
