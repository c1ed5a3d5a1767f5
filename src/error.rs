//! Error types for the Missing-Attendance Reconciliation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a reconciliation run.

use thiserror::Error;

/// The main error type for the reconciliation engine.
///
/// All fallible operations in the engine return this error type. A
/// reconciliation run performs no partial-failure recovery: the first error
/// from any collaborator aborts the run and surfaces here unchanged.
///
/// # Example
///
/// ```
/// use attendance_reconciler::error::ReconcileError;
///
/// let error = ReconcileError::ConfigNotFound {
///     path: "/missing/calendars.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/calendars.yaml");
/// ```
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Work calendar was not found in the configuration.
    #[error("Work calendar not found: {calendar_id}")]
    CalendarNotFound {
        /// The calendar identifier that was not found.
        calendar_id: String,
    },

    /// A storage-layer operation failed.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },

    /// The overtime recomputation hook failed for a created record.
    #[error("Overtime recomputation failed for attendance '{attendance_id}': {message}")]
    OvertimeRecompute {
        /// The id of the attendance record being recomputed.
        attendance_id: String,
        /// A description of the hook failure.
        message: String,
    },
}

/// A type alias for Results that return ReconcileError.
pub type ReconcileResult<T> = Result<T, ReconcileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = ReconcileError::ConfigNotFound {
            path: "/missing/calendars.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/calendars.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = ReconcileError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_calendar_not_found_displays_id() {
        let error = ReconcileError::CalendarNotFound {
            calendar_id: "cal_weekend".to_string(),
        };
        assert_eq!(error.to_string(), "Work calendar not found: cal_weekend");
    }

    #[test]
    fn test_storage_error_displays_message() {
        let error = ReconcileError::Storage {
            message: "store lock poisoned".to_string(),
        };
        assert_eq!(error.to_string(), "Storage error: store lock poisoned");
    }

    #[test]
    fn test_overtime_recompute_displays_id_and_message() {
        let error = ReconcileError::OvertimeRecompute {
            attendance_id: "att_001".to_string(),
            message: "payroll backend unavailable".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Overtime recomputation failed for attendance 'att_001': payroll backend unavailable"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ReconcileError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_calendar_not_found() -> ReconcileResult<()> {
            Err(ReconcileError::CalendarNotFound {
                calendar_id: "cal_unknown".to_string(),
            })
        }

        fn propagates_error() -> ReconcileResult<()> {
            returns_calendar_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
