//! Recurring workout series.
//!
//! A trainer schedules one workout (the seed) together with a
//! [`RecurrenceRule`]. [`expand`] turns the pair into the full, ordered list of
//! workouts making up the series, all tagged with the same series id.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use coachcal_recurrence::{ExpansionConfig, Frequency, RecurrenceRule, Workout, expand};
//!
//! let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let seed = Workout::new(
//!     "Strength",
//!     day.and_hms_opt(10, 0, 0).unwrap(),
//!     day.and_hms_opt(11, 0, 0).unwrap(),
//! );
//! let rule = RecurrenceRule::new(Frequency::Daily)
//!     .with_interval(7)
//!     .with_occurrences(3);
//!
//! let series = expand(seed, rule, &ExpansionConfig::default()).unwrap();
//! assert_eq!(series.len(), 3);
//! ```

pub mod error;
pub mod expand;
pub mod rule;
pub mod workout;

pub use error::{RecurrenceError, RecurrenceResult};
pub use expand::{ExpansionConfig, SeriesDates, expand};
pub use rule::{DayOfWeek, Frequency, RecurrenceRule};
pub use workout::{Attendance, SessionFormat, Workout};
