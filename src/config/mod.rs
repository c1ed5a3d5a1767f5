//! Work-calendar configuration.
//!
//! This module provides loading and lookup of work calendars from YAML
//! configuration, and the expected-work-hours computation backing the
//! reconciler's working-hours queries.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CalendarsConfig, WeeklyHours, WorkCalendar};
