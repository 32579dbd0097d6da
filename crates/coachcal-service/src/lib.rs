//! Calendar operations built on recurring workout series: scheduling, moving,
//! attendance, and series-aware deletion, plus the API shapes exchanged with
//! clients.

pub mod api;
pub mod calendar;
pub mod error;
