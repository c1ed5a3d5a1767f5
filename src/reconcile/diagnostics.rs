//! Per-day diagnostic records.
//!
//! When a run is invoked with logging enabled, every checked (employee, day)
//! pair produces one [`DayCheck`], emitted through the [`DiagnosticSink`]
//! injected into the reconciler. Emission never alters the decision.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

/// Diagnostic record for a single checked (employee, day) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCheck {
    /// The calendar day that was checked.
    pub check_date: NaiveDate,
    /// Display name of the employee.
    pub employee_name: String,
    /// Display name of the employee's company.
    pub company_name: String,
    /// Whether a corrective record was created for this pair.
    pub decision: bool,
    /// Raw expected work hours for the day; `None` when the calendar is
    /// unknown to the provider.
    pub work_hours: Option<Decimal>,
    /// Whether an existing attendance covered the day.
    pub is_attendance: bool,
    /// Whether a leave interval overlapped the day.
    pub is_leave: bool,
    /// Whether a calendar exception overlapped the day.
    pub is_calendar_exception: bool,
    /// Calendar days covered by the employee's fetched attendances.
    pub attendance_dates: Vec<NaiveDate>,
    /// Names of the calendar exceptions fetched for the employee's scope.
    pub calendar_exceptions: Vec<String>,
}

/// Sink for per-day diagnostic records.
///
/// Injected into the [`Reconciler`](crate::reconcile::Reconciler) so the
/// diagnostic lifecycle is scoped to the run rather than hanging off global
/// logger state. Tests can supply a collecting sink.
pub trait DiagnosticSink: Send + Sync {
    /// Records one day check.
    fn record(&self, check: &DayCheck);
}

/// Production sink that emits each day check as a JSON payload at DEBUG
/// level through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, check: &DayCheck) {
        match serde_json::to_string(check) {
            Ok(payload) => debug!(
                employee = %check.employee_name,
                check_date = %check.check_date,
                decision = check.decision,
                payload = %payload,
                "missing-attendance day check"
            ),
            Err(err) => warn!(
                employee = %check.employee_name,
                check_date = %check.check_date,
                error = %err,
                "failed to serialize day check"
            ),
        }
    }
}
