//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading work-calendar
//! configuration from a YAML file, and its [`WorkingHoursProvider`]
//! implementation used by the reconciler.

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{ReconcileError, ReconcileResult};
use crate::store::WorkingHoursProvider;

use super::types::{CalendarsConfig, WorkCalendar};

/// Loads and provides access to work calendars.
///
/// # File structure
///
/// ```text
/// config/calendars.yaml
/// ```
///
/// with one entry per calendar id:
///
/// ```yaml
/// calendars:
///   cal_standard:
///     name: Standard Full-Time
///     weekly_hours:
///       monday: 8
///       tuesday: 8
///       wednesday: 8
///       thursday: 8
///       friday: 8
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_reconciler::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/calendars.yaml").unwrap();
/// let calendar = loader.get_calendar("cal_standard").unwrap();
/// println!("Calendar: {}", calendar.name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalendarsConfig,
}

impl ConfigLoader {
    /// Loads calendar configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::ConfigNotFound`] when the file is missing
    /// and [`ReconcileError::ConfigParseError`] when it is not valid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> ReconcileResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReconcileError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: CalendarsConfig =
            serde_yaml::from_str(&content).map_err(|e| ReconcileError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Builds a loader directly from an already parsed configuration.
    pub fn from_config(config: CalendarsConfig) -> Self {
        Self { config }
    }

    /// Returns the calendar with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::CalendarNotFound`] for unknown ids.
    pub fn get_calendar(&self, calendar_id: &str) -> ReconcileResult<&WorkCalendar> {
        self.config
            .calendars
            .get(calendar_id)
            .ok_or_else(|| ReconcileError::CalendarNotFound {
                calendar_id: calendar_id.to_string(),
            })
    }
}

impl WorkingHoursProvider for ConfigLoader {
    /// Sums the per-weekday hours for every calendar date touched by
    /// `[from, to]`.
    ///
    /// An unknown calendar yields `Ok(None)`, which the reconciler treats
    /// as "not a working day" rather than an error.
    fn work_hours(
        &self,
        calendar_id: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> ReconcileResult<Option<Decimal>> {
        let Some(calendar) = self.config.calendars.get(calendar_id) else {
            return Ok(None);
        };

        let mut total = Decimal::ZERO;
        let mut current = from.date();
        while current <= to.date() {
            total += calendar.weekly_hours.for_weekday(current.weekday());
            current = match current.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        Ok(Some(total))
    }
}
