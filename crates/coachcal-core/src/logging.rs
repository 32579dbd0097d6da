//! Tracing subscriber setup for binaries and services embedding coachcal.

use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

use crate::config::LoggingConfig;
use crate::constants::DEFAULT_LOG_LEVEL;
use crate::error::{CoreError, CoreResult};

/// Handle for swapping the active log filter after start-up.
pub type LogFilterHandle = reload::Handle<EnvFilter, Registry>;

/// ## Summary
/// Installs the global tracing subscriber, starting at `debug` and then
/// switching to the configured level.
///
/// An invalid configured level is logged and the `debug` filter is kept.
///
/// ## Errors
/// Returns `CoreError::InvariantViolation` if a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> CoreResult<LogFilterHandle> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .map_err(|_err| CoreError::InvariantViolation("Global tracing subscriber already set"))?;

    if let Err(e) = set_level(&filter_handle, &config.level) {
        tracing::warn!(error = %e, "Invalid log level in config, keeping debug");
    }

    Ok(filter_handle)
}

/// ## Summary
/// Replaces the active filter with one parsed from `level`.
///
/// ## Errors
/// Returns `CoreError::InvalidLogFilter` if `level` is not a valid `EnvFilter`
/// directive or the subscriber has been dropped.
pub fn set_level(handle: &LogFilterHandle, level: &str) -> CoreResult<()> {
    let filter = parse_filter(level)?;
    handle
        .modify(|current| *current = filter)
        .map_err(|e| CoreError::InvalidLogFilter {
            filter: level.to_string(),
            reason: e.to_string(),
        })
}

fn parse_filter(level: &str) -> CoreResult<EnvFilter> {
    EnvFilter::try_new(level).map_err(|e| CoreError::InvalidLogFilter {
        filter: level.to_string(),
        reason: e.to_string(),
    })
}
