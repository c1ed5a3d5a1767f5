//! Interval/day overlap predicate.
//!
//! Leave and calendar-exception suppression both use the same symmetric
//! three-way test of an interval against a single checked day.

use chrono::NaiveDateTime;

/// Tests whether an interval `[interval_start, interval_end]` overlaps the
/// checked day `[day_start, day_end]`.
///
/// The test is a symmetric three-way check:
/// - the interval contains the day start, or
/// - the day contains the interval start, or
/// - the day contains the interval end.
///
/// For well-formed intervals this covers interval-contains-day,
/// interval-starts-inside-day, and interval-ends-inside-day.
///
/// # Example
///
/// ```
/// use attendance_reconciler::reconcile::{day_bounds, overlaps_day};
/// use chrono::NaiveDate;
///
/// let (day_start, day_end) = day_bounds(NaiveDate::from_ymd_opt(2026, 1, 14).unwrap());
/// let leave_start = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let leave_end = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap().and_hms_opt(23, 59, 59).unwrap();
/// assert!(overlaps_day(leave_start, leave_end, day_start, day_end));
/// ```
pub fn overlaps_day(
    interval_start: NaiveDateTime,
    interval_end: NaiveDateTime,
    day_start: NaiveDateTime,
    day_end: NaiveDateTime,
) -> bool {
    (interval_start <= day_start && day_start <= interval_end)
        || (day_start <= interval_start && interval_start <= day_end)
        || (day_start <= interval_end && interval_end <= day_end)
}
