//! Data-access seam between the reconciler and the host record system.
//!
//! The reconciler never talks to storage directly. Each entity it consumes is
//! reached through a small trait with exactly the parameterized queries the
//! algorithm needs; the host system supplies real adapters, and
//! [`MemoryStore`] provides a reference adapter for tests, benchmarks, and
//! the default API state.

mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::error::ReconcileResult;
use crate::models::{AttendanceRecord, CalendarException, Employee, LeaveInterval, NewAttendance};

/// Read access to employees.
pub trait EmployeeRepository: Send + Sync {
    /// Returns every known employee.
    fn all(&self) -> ReconcileResult<Vec<Employee>>;

    /// Returns the employees with the given ids, in store order.
    ///
    /// Unknown ids are silently skipped.
    fn by_ids(&self, ids: &[String]) -> ReconcileResult<Vec<Employee>>;
}

/// Read and append access to attendance records.
pub trait AttendanceRepository: Send + Sync {
    /// Returns the completed punches for an employee with a check-in at or
    /// after `since`.
    ///
    /// Open punches (no check-out) are excluded: an in-progress punch does
    /// not count as presence on any day. No upper bound is applied.
    fn completed_since(
        &self,
        employee_id: &str,
        since: NaiveDateTime,
    ) -> ReconcileResult<Vec<AttendanceRecord>>;

    /// Appends a new attendance record, assigning its id.
    fn create(&self, new: NewAttendance) -> ReconcileResult<AttendanceRecord>;
}

/// Read access to approved leave.
pub trait LeaveRepository: Send + Sync {
    /// Returns the leave intervals for an employee that start at or after
    /// `since`, or end at or after it.
    ///
    /// This deliberately includes leaves that started before the window but
    /// end inside or after it; only leaves entirely before `since` are
    /// excluded.
    fn active_since(
        &self,
        employee_id: &str,
        since: NaiveDateTime,
    ) -> ReconcileResult<Vec<LeaveInterval>>;
}

/// Read access to calendar exceptions (public holidays).
pub trait CalendarExceptionRepository: Send + Sync {
    /// Returns the exceptions in scope for a company and work calendar that
    /// are relevant to the given window.
    ///
    /// Scope and window relevance follow
    /// [`CalendarException::applies_to`] and
    /// [`CalendarException::within_window`].
    fn matching(
        &self,
        company_id: &str,
        calendar_id: &str,
        window_start: NaiveDateTime,
        window_end: NaiveDateTime,
    ) -> ReconcileResult<Vec<CalendarException>>;
}

/// Expected-work-hours lookup for a calendar over a time window.
pub trait WorkingHoursProvider: Send + Sync {
    /// Returns the expected work hours for `calendar_id` over
    /// `[from, to]`.
    ///
    /// `Ok(Some(h))` with `h > 0` marks a working window; `Ok(Some(0))` a
    /// non-working one (weekend, unscheduled day). `Ok(None)` means the
    /// calendar is unknown to the provider, which the reconciler treats as
    /// non-working rather than an error.
    fn work_hours(
        &self,
        calendar_id: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> ReconcileResult<Option<Decimal>>;
}

/// Hook invoked on every newly created attendance record so the host can
/// recompute overtime balances.
pub trait OvertimeRecalculator: Send + Sync {
    /// Recomputes overtime for the given record. Failures abort the run.
    fn recalculate(&self, attendance: &AttendanceRecord) -> ReconcileResult<()>;
}

/// No-op overtime hook for hosts without an overtime ledger.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOvertime;

impl OvertimeRecalculator for NoopOvertime {
    fn recalculate(&self, _attendance: &AttendanceRecord) -> ReconcileResult<()> {
        Ok(())
    }
}
