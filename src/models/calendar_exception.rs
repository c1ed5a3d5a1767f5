//! Calendar-exception model.
//!
//! Calendar exceptions are public holidays and other calendar-level leave
//! intervals. They can be scoped to a single employee resource, a company,
//! and/or a specific work calendar.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A public holiday or calendar-level leave interval.
///
/// # Scope
///
/// - `resource_id == None` means the exception is not pinned to a single
///   employee resource and applies company-wide.
/// - `calendar_id == None` means the exception applies to every work
///   calendar; otherwise only to the named one.
///
/// # Example
///
/// ```
/// use attendance_reconciler::models::CalendarException;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap();
/// let holiday = CalendarException {
///     name: "Australia Day".to_string(),
///     resource_id: None,
///     company_id: "company_01".to_string(),
///     calendar_id: None,
///     date_from: day.and_hms_opt(0, 0, 0).unwrap(),
///     date_to: day.and_hms_opt(23, 59, 59).unwrap(),
/// };
/// assert!(holiday.applies_to("company_01", "cal_standard"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarException {
    /// The name of the exception (e.g., "Australia Day").
    pub name: String,
    /// Employee resource the exception is pinned to, if any.
    pub resource_id: Option<String>,
    /// Identifier of the company the exception belongs to.
    pub company_id: String,
    /// Work calendar the exception is scoped to; `None` applies to all.
    pub calendar_id: Option<String>,
    /// Start of the exception interval.
    pub date_from: NaiveDateTime,
    /// End of the exception interval.
    pub date_to: NaiveDateTime,
}

impl CalendarException {
    /// Checks whether this exception is in scope for an employee's company
    /// and work calendar.
    ///
    /// The exception applies when it is either unpinned from any resource or
    /// belongs to the employee's company, and when it either names the
    /// employee's calendar or is not scoped to a calendar at all.
    pub fn applies_to(&self, company_id: &str, calendar_id: &str) -> bool {
        let resource_scope = self.resource_id.is_none() || self.company_id == company_id;
        let calendar_scope = match &self.calendar_id {
            Some(scoped) => scoped == calendar_id,
            None => true,
        };
        resource_scope && calendar_scope
    }

    /// Checks whether this exception is relevant to a reconciliation window.
    ///
    /// Matches when the exception starts at or after the window start, or
    /// ends at or before the window end.
    pub fn within_window(&self, window_start: NaiveDateTime, window_end: NaiveDateTime) -> bool {
        self.date_from >= window_start || self.date_to <= window_end
    }
}
