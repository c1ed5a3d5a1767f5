//! The reconciliation run.
//!
//! Walks a set of employees over an inclusive day window and, for each
//! (employee, day) pair where a working day was scheduled but no attendance,
//! leave, or calendar exception exists, appends one corrective attendance
//! record flagged for follow-up.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::error::ReconcileResult;
use crate::models::{AttendanceRecord, Employee, NewAttendance, Notification};
use crate::store::{
    AttendanceRepository, CalendarExceptionRepository, EmployeeRepository, LeaveRepository,
    OvertimeRecalculator, WorkingHoursProvider,
};

use super::diagnostics::{DayCheck, DiagnosticSink, TracingSink};
use super::overlap::overlaps_day;
use super::window::{DateWindow, day_bounds};

/// Hour of day at which placeholder check-in and check-out are stamped.
pub const PLACEHOLDER_CHECK_IN_HOUR: u32 = 8;

/// Result of a reconciliation run.
///
/// Carries the corrective records created during the run alongside the
/// user-facing notification so callers can inspect the run without
/// re-querying the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOutcome {
    /// The corrective records created by this run, in creation order.
    pub created: Vec<AttendanceRecord>,
    /// Notification payload for the invoking user.
    pub notification: Notification,
}

/// The missing-attendance reconciler.
///
/// All data access goes through the injected store traits; the reconciler
/// itself holds no state between runs. Employees are processed sequentially
/// in the order supplied, days in ascending order, and any collaborator
/// error aborts the run unrecovered — the host is expected to wrap a run in
/// its own transactional context.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use attendance_reconciler::config::ConfigLoader;
/// use attendance_reconciler::reconcile::Reconciler;
/// use attendance_reconciler::store::{MemoryStore, NoopOvertime};
///
/// let store = Arc::new(MemoryStore::new());
/// let calendars = Arc::new(ConfigLoader::load("./config/calendars.yaml").unwrap());
/// let reconciler = Reconciler::new(
///     store.clone(),
///     store.clone(),
///     store.clone(),
///     store.clone(),
///     calendars,
///     Arc::new(NoopOvertime),
/// );
/// let notification = reconciler.run_for_all(false).unwrap();
/// assert_eq!(notification.message, "0 missing attendances have been created.");
/// ```
pub struct Reconciler {
    employees: Arc<dyn EmployeeRepository>,
    attendances: Arc<dyn AttendanceRepository>,
    leaves: Arc<dyn LeaveRepository>,
    exceptions: Arc<dyn CalendarExceptionRepository>,
    working_hours: Arc<dyn WorkingHoursProvider>,
    overtime: Arc<dyn OvertimeRecalculator>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl Reconciler {
    /// Creates a reconciler over the given collaborators, with diagnostics
    /// going to the default [`TracingSink`].
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        attendances: Arc<dyn AttendanceRepository>,
        leaves: Arc<dyn LeaveRepository>,
        exceptions: Arc<dyn CalendarExceptionRepository>,
        working_hours: Arc<dyn WorkingHoursProvider>,
        overtime: Arc<dyn OvertimeRecalculator>,
    ) -> Self {
        Self {
            employees,
            attendances,
            leaves,
            exceptions,
            working_hours,
            overtime,
            diagnostics: Arc::new(TracingSink),
        }
    }

    /// Replaces the diagnostic sink.
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Runs the reconciliation for every known employee over the default
    /// window (yesterday, local date, single day).
    pub fn run_for_all(&self, logging: bool) -> ReconcileResult<Notification> {
        let employees = self.employees.all()?;
        let outcome = self.reconcile(&employees, None, None, logging)?;
        Ok(outcome.notification)
    }

    /// Runs the reconciliation for the given employees over the given
    /// window. Each unset bound independently defaults to yesterday.
    pub fn reconcile(
        &self,
        employees: &[Employee],
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
        logging: bool,
    ) -> ReconcileResult<RunOutcome> {
        self.reconcile_window(employees, DateWindow::resolve(date_from, date_to), logging)
    }

    /// Runs the reconciliation over an already resolved window.
    pub fn reconcile_window(
        &self,
        employees: &[Employee],
        window: DateWindow,
        logging: bool,
    ) -> ReconcileResult<RunOutcome> {
        let days = window.days();
        debug!(
            window_start = %window.start(),
            window_end = %window.end(),
            day_count = days.len(),
            employee_count = employees.len(),
            "checking for missing attendances"
        );

        let mut created = Vec::new();

        for employee in employees {
            // Completed punches only: an open punch does not mark presence.
            let attendances = self
                .attendances
                .completed_since(&employee.id, window.start())?;
            let attendance_dates: Vec<NaiveDate> = attendances
                .iter()
                .flat_map(AttendanceRecord::covered_days)
                .collect();

            let leaves = self.leaves.active_since(&employee.id, window.start())?;
            let exceptions = self.exceptions.matching(
                &employee.company_id,
                &employee.calendar_id,
                window.start(),
                window.end(),
            )?;
            let exception_names: Vec<String> =
                exceptions.iter().map(|e| e.name.clone()).collect();

            for day in &days {
                let (min_check, max_check) = day_bounds(day.date());

                let work_hours =
                    self.working_hours
                        .work_hours(&employee.calendar_id, min_check, max_check)?;

                let is_attendance = attendance_dates.contains(&day.date());
                let is_leave = leaves
                    .iter()
                    .any(|l| overlaps_day(l.date_from, l.date_to, min_check, max_check));
                let is_calendar_exception = exceptions
                    .iter()
                    .any(|e| overlaps_day(e.date_from, e.date_to, min_check, max_check));

                let decision = work_hours.is_some_and(|h| h > Decimal::ZERO)
                    && !is_attendance
                    && !is_leave
                    && !is_calendar_exception;

                if logging {
                    self.diagnostics.record(&DayCheck {
                        check_date: day.date(),
                        employee_name: employee.name.clone(),
                        company_name: employee.company_name.clone(),
                        decision,
                        work_hours,
                        is_attendance,
                        is_leave,
                        is_calendar_exception,
                        attendance_dates: attendance_dates.clone(),
                        calendar_exceptions: exception_names.clone(),
                    });
                }

                if decision {
                    let check_time = day
                        .date()
                        .and_hms_opt(PLACEHOLDER_CHECK_IN_HOUR, 0, 0)
                        .expect("Valid placeholder time");
                    let record = self.attendances.create(NewAttendance {
                        employee_id: employee.id.clone(),
                        check_in: check_time,
                        check_out: Some(check_time),
                        is_missing_attendance: true,
                    })?;
                    self.overtime.recalculate(&record)?;
                    created.push(record);
                }
            }
        }

        let notification = Notification::run_summary(created.len());
        Ok(RunOutcome {
            created,
            notification,
        })
    }
}
