use chrono::{NaiveDate, NaiveDateTime};
use coachcal_recurrence::{
    DayOfWeek, ExpansionConfig, Frequency, RecurrenceRule, Workout, expand,
};

pub struct ExpansionCase {
    pub name: &'static str,
    pub seed_start: &'static str,
    pub duration_minutes: i64,
    pub frequency: Frequency,
    pub interval: u32,
    pub days_of_week: &'static [u8],
    pub end_date: Option<&'static str>,
    pub occurrences: Option<u32>,
    pub expected: Option<&'static [&'static str]>,
    pub expected_len: Option<usize>,
}

#[expect(clippy::too_many_lines)]
pub fn expansion_cases() -> Vec<ExpansionCase> {
    vec![
        ExpansionCase {
            name: "daily_every_week_three_times",
            seed_start: "2024-01-01T10:00:00",
            duration_minutes: 60,
            frequency: Frequency::Daily,
            interval: 7,
            days_of_week: &[],
            end_date: None,
            occurrences: Some(3),
            expected: Some(&[
                "2024-01-01T10:00:00",
                "2024-01-08T10:00:00",
                "2024-01-15T10:00:00",
            ]),
            expected_len: None,
        },
        ExpansionCase {
            name: "weekly_mon_fri_from_wednesday",
            seed_start: "2024-01-03T18:00:00",
            duration_minutes: 60,
            frequency: Frequency::Weekly,
            interval: 1,
            days_of_week: &[1, 5],
            end_date: None,
            occurrences: Some(4),
            expected: Some(&[
                "2024-01-03T18:00:00",
                "2024-01-05T18:00:00",
                "2024-01-08T18:00:00",
                "2024-01-12T18:00:00",
            ]),
            expected_len: None,
        },
        ExpansionCase {
            name: "weekly_mon_wed_fri_from_monday",
            seed_start: "2024-01-01T07:30:00",
            duration_minutes: 45,
            frequency: Frequency::Weekly,
            interval: 1,
            days_of_week: &[5, 3, 1],
            end_date: None,
            occurrences: Some(7),
            expected: Some(&[
                "2024-01-01T07:30:00",
                "2024-01-03T07:30:00",
                "2024-01-05T07:30:00",
                "2024-01-08T07:30:00",
                "2024-01-10T07:30:00",
                "2024-01-12T07:30:00",
                "2024-01-15T07:30:00",
            ]),
            expected_len: None,
        },
        ExpansionCase {
            name: "weekly_sunday_only_from_saturday",
            seed_start: "2024-01-06T09:00:00",
            duration_minutes: 90,
            frequency: Frequency::Weekly,
            interval: 3,
            days_of_week: &[0],
            end_date: None,
            occurrences: Some(3),
            expected: Some(&[
                "2024-01-06T09:00:00",
                "2024-01-07T09:00:00",
                "2024-01-14T09:00:00",
            ]),
            expected_len: None,
        },
        ExpansionCase {
            name: "biweekly_plain",
            seed_start: "2024-02-27T19:00:00",
            duration_minutes: 60,
            frequency: Frequency::Weekly,
            interval: 2,
            days_of_week: &[],
            end_date: Some("2024-04-01T00:00:00"),
            occurrences: None,
            expected: Some(&[
                "2024-02-27T19:00:00",
                "2024-03-12T19:00:00",
                "2024-03-26T19:00:00",
            ]),
            expected_len: None,
        },
        ExpansionCase {
            name: "monthly_on_the_31st",
            seed_start: "2024-01-31T08:00:00",
            duration_minutes: 30,
            frequency: Frequency::Monthly,
            interval: 1,
            days_of_week: &[],
            end_date: None,
            occurrences: Some(6),
            expected: Some(&[
                "2024-01-31T08:00:00",
                "2024-02-29T08:00:00",
                "2024-03-31T08:00:00",
                "2024-04-30T08:00:00",
                "2024-05-31T08:00:00",
                "2024-06-30T08:00:00",
            ]),
            expected_len: None,
        },
        ExpansionCase {
            name: "quarterly_until_end_of_year",
            seed_start: "2024-01-15T12:00:00",
            duration_minutes: 60,
            frequency: Frequency::Monthly,
            interval: 3,
            days_of_week: &[],
            end_date: Some("2024-10-15T12:00:00"),
            occurrences: Some(10),
            expected: Some(&[
                "2024-01-15T12:00:00",
                "2024-04-15T12:00:00",
                "2024-07-15T12:00:00",
                "2024-10-15T12:00:00",
            ]),
            expected_len: None,
        },
        ExpansionCase {
            name: "daily_end_date_wins_over_count",
            seed_start: "2024-05-01T06:00:00",
            duration_minutes: 40,
            frequency: Frequency::Daily,
            interval: 1,
            days_of_week: &[],
            end_date: Some("2024-05-04T23:59:59"),
            occurrences: Some(30),
            expected: None,
            expected_len: Some(4),
        },
        ExpansionCase {
            name: "daily_end_date_mid_day",
            seed_start: "2024-01-01T10:00:00",
            duration_minutes: 60,
            frequency: Frequency::Daily,
            interval: 1,
            days_of_week: &[],
            end_date: Some("2024-01-03T09:59:00"),
            occurrences: None,
            expected: Some(&["2024-01-01T10:00:00", "2024-01-02T10:00:00"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "unbounded_daily_hits_default_cap",
            seed_start: "2024-01-01T10:00:00",
            duration_minutes: 60,
            frequency: Frequency::Daily,
            interval: 1,
            days_of_week: &[],
            end_date: None,
            occurrences: None,
            expected: None,
            expected_len: Some(52),
        },
        ExpansionCase {
            name: "unbounded_weekdays_hits_default_cap",
            seed_start: "2024-01-01T10:00:00",
            duration_minutes: 60,
            frequency: Frequency::Weekly,
            interval: 1,
            days_of_week: &[1, 2, 3, 4, 5],
            end_date: None,
            occurrences: None,
            expected: None,
            expected_len: Some(52),
        },
        ExpansionCase {
            name: "days_of_week_ignored_for_daily",
            seed_start: "2024-01-01T10:00:00",
            duration_minutes: 60,
            frequency: Frequency::Daily,
            interval: 2,
            days_of_week: &[5],
            end_date: None,
            occurrences: Some(3),
            expected: Some(&[
                "2024-01-01T10:00:00",
                "2024-01-03T10:00:00",
                "2024-01-05T10:00:00",
            ]),
            expected_len: None,
        },
    ]
}

pub fn build(case: &ExpansionCase) -> Vec<Workout> {
    let start = parse_datetime(case.seed_start);
    let end = start + chrono::TimeDelta::minutes(case.duration_minutes);
    let seed = Workout::new(case.name, start, end);

    let mut rule = RecurrenceRule::new(case.frequency)
        .with_interval(case.interval)
        .with_days_of_week(case.days_of_week.iter().map(|&day| {
            DayOfWeek::new(day)
                .unwrap_or_else(|err| panic!("Bad weekday in {}: {}", case.name, err))
        }));
    if let Some(end_date) = case.end_date {
        rule = rule.with_end_date(parse_datetime(end_date));
    }
    if let Some(occurrences) = case.occurrences {
        rule = rule.with_occurrences(occurrences);
    }

    expand(seed, rule, &ExpansionConfig::default())
        .unwrap_or_else(|err| panic!("Failed to expand {}: {}", case.name, err))
}

pub fn assert_case(case: &ExpansionCase) {
    let series = build(case);
    let actual: Vec<NaiveDateTime> = series.iter().map(|w| w.start).collect();

    if let Some(expected) = case.expected {
        let expected: Vec<NaiveDateTime> = expected.iter().map(|v| parse_datetime(v)).collect();
        assert_eq!(actual, expected, "Case {} did not match", case.name);
    }

    if let Some(expected_len) = case.expected_len {
        assert_eq!(
            series.len(),
            expected_len,
            "Case {} expected {} workouts",
            case.name,
            expected_len
        );
    }
}

pub fn parse_datetime(value: &str) -> NaiveDateTime {
    value
        .parse()
        .unwrap_or_else(|err| panic!("Failed to parse datetime {value}: {err}"))
}

pub fn parse_date(value: &str) -> NaiveDate {
    value
        .parse()
        .unwrap_or_else(|err| panic!("Failed to parse date {value}: {err}"))
}
