/// Number of workouts a recurring series holds when neither an end date nor an
/// occurrence count is given. This includes the seed workout.
pub const DEFAULT_SERIES_OCCURRENCES: u32 = 52;

/// Time zone used for calendar arithmetic when none is configured.
pub const DEFAULT_CALENDAR_TIMEZONE: &str = "UTC";

/// Log filter used until the configured one has been applied.
pub const DEFAULT_LOG_LEVEL: &str = "debug";
