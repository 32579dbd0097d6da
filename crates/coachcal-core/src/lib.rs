//! Shared configuration, errors, and logging setup for the coachcal crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
