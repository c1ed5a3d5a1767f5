//! Attendance record models.
//!
//! This module defines [`AttendanceRecord`], the punch record read from and
//! written to the host system, and [`NewAttendance`], the payload used to
//! create corrective records.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single attendance punch for an employee.
///
/// Real records are produced by normal punch-in/out flows; corrective records
/// are produced by the reconciler with `is_missing_attendance = true` and a
/// zero-duration 08:00 check-in/check-out. The reconciler only ever reads
/// completed records (check-out present) and appends corrective ones — it
/// never mutates or deletes.
///
/// # Example
///
/// ```
/// use attendance_reconciler::models::AttendanceRecord;
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let day = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let record = AttendanceRecord {
///     id: Uuid::new_v4(),
///     employee_id: "emp_001".to_string(),
///     check_in: day.and_hms_opt(8, 0, 0).unwrap(),
///     check_out: Some(day.and_hms_opt(8, 0, 0).unwrap()),
///     is_missing_attendance: true,
/// };
/// assert_eq!(record.covered_days(), vec![day, day]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// Identifier of the employee the punch belongs to.
    pub employee_id: String,
    /// Timestamp of the check-in.
    pub check_in: NaiveDateTime,
    /// Timestamp of the check-out; `None` for an open, in-progress punch.
    pub check_out: Option<NaiveDateTime>,
    /// Whether this record was synthesized to flag a missing attendance.
    pub is_missing_attendance: bool,
}

impl AttendanceRecord {
    /// Returns the calendar days this record marks as attended.
    ///
    /// A punch counts as presence on both the day it started and the day it
    /// ended, even when those differ (an overnight punch covers two days).
    /// Open punches contribute only their check-in day.
    pub fn covered_days(&self) -> Vec<NaiveDate> {
        let mut days = vec![self.check_in.date()];
        if let Some(check_out) = self.check_out {
            days.push(check_out.date());
        }
        days
    }
}

/// Payload for creating an attendance record.
///
/// The repository assigns the record id on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttendance {
    /// Identifier of the employee the punch belongs to.
    pub employee_id: String,
    /// Timestamp of the check-in.
    pub check_in: NaiveDateTime,
    /// Timestamp of the check-out, if already known.
    pub check_out: Option<NaiveDateTime>,
    /// Whether this record flags a missing attendance.
    pub is_missing_attendance: bool,
}
