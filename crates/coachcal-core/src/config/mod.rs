use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{DEFAULT_CALENDAR_TIMEZONE, DEFAULT_LOG_LEVEL, DEFAULT_SERIES_OCCURRENCES};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    pub recurrence: RecurrenceConfig,
    pub calendar: CalendarConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecurrenceConfig {
    /// Series length used when a rule has neither an end date nor a count.
    pub default_occurrences: u32,
}

impl Default for RecurrenceConfig {
    fn default() -> Self {
        Self {
            default_occurrences: DEFAULT_SERIES_OCCURRENCES,
        }
    }
}

/// Span of the calendar window shown to a trainer or client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarView {
    #[default]
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "2w")]
    TwoWeeks,
    #[serde(rename = "4w")]
    FourWeeks,
    Month,
}

impl CalendarView {
    /// ## Summary
    /// Number of weeks the window shows. A month view shows four weeks.
    #[must_use]
    pub const fn weeks(self) -> u32 {
        match self {
            Self::OneWeek => 1,
            Self::TwoWeeks => 2,
            Self::FourWeeks | Self::Month => 4,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// IANA zone name used for weekday and day-of-month arithmetic.
    pub timezone: String,
    pub default_view: CalendarView,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_CALENDAR_TIMEZONE.to_string(),
            default_view: CalendarView::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Builds `Settings` from defaults, an optional `config.toml` and
    /// `COACHCAL` environment variables, in increasing precedence.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating the result fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default(
                "recurrence.default_occurrences",
                DEFAULT_SERIES_OCCURRENCES,
            )?
            .set_default("calendar.timezone", DEFAULT_CALENDAR_TIMEZONE)?
            .set_default("calendar.default_view", "1w")?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Environment
            .add_source(
                config::Environment::with_prefix("COACHCAL")
                    .convert_case(config::Case::Snake)
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values that deserialize fine but cannot drive the calendar.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for a zero default series
    /// length or an empty time zone name.
    pub fn validate(&self) -> CoreResult<()> {
        if self.recurrence.default_occurrences == 0 {
            return Err(CoreError::InvalidConfiguration(
                "recurrence.default_occurrences must be at least 1".to_string(),
            ));
        }
        if self.calendar.timezone.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "calendar.timezone must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Exports variables from a `.env` file, if present, then loads `Settings`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
