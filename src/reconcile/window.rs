//! Date-window resolution and day enumeration.
//!
//! A reconciliation run operates over an inclusive window of calendar days.
//! Each unset bound independently defaults to yesterday, so omitting both
//! yields the single-day window "yesterday", and omitting only one anchors
//! that end to yesterday regardless of the other.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Returns the timestamp at 00:00:00.000000 on the given date.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("Valid midnight time")
}

/// Returns the timestamp at 23:59:59.999999 on the given date.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_micro_opt(23, 59, 59, 999_999)
        .expect("Valid end-of-day time")
}

/// Returns the `[min_check, max_check]` bounds for a single checked day.
pub fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    (start_of_day(date), end_of_day(date))
}

/// An inclusive reconciliation window over calendar days.
///
/// The window covers 00:00:00.000000 on its first day through
/// 23:59:59.999999 on its last, so both boundary days are checked.
///
/// # Example
///
/// ```
/// use attendance_reconciler::reconcile::DateWindow;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let window = DateWindow::anchored(Some(day), Some(day), day);
/// assert_eq!(window.days().len(), 1);
/// assert_eq!(window.days()[0], day.and_hms_opt(0, 0, 0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateWindow {
    /// Resolves a window from optional bounds, defaulting each unset bound
    /// to yesterday's local calendar date.
    pub fn resolve(date_from: Option<NaiveDate>, date_to: Option<NaiveDate>) -> Self {
        let yesterday = Local::now()
            .date_naive()
            .pred_opt()
            .expect("Valid previous day");
        Self::anchored(date_from, date_to, yesterday)
    }

    /// Resolves a window from optional bounds against an explicit default
    /// day, independently for each bound.
    pub fn anchored(
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
        default_day: NaiveDate,
    ) -> Self {
        Self {
            start: start_of_day(date_from.unwrap_or(default_day)),
            end: end_of_day(date_to.unwrap_or(default_day)),
        }
    }

    /// The start-of-day timestamp of the first day in the window.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// The end-of-day timestamp of the last day in the window.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Enumerates every calendar day in the window, ascending, as day-start
    /// timestamps. An inverted window yields no days.
    pub fn days(&self) -> Vec<NaiveDateTime> {
        let mut days = Vec::new();
        let mut current = self.start.date();
        while current <= self.end.date() {
            days.push(start_of_day(current));
            current = match current.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_single_day_window_checks_exactly_one_day() {
        let day = date("2026-01-14");
        let window = DateWindow::anchored(Some(day), Some(day), date("2026-02-01"));
        assert_eq!(window.days(), vec![start_of_day(day)]);
    }

    #[test]
    fn test_window_is_inclusive_of_both_bounds() {
        let window = DateWindow::anchored(Some(date("2026-01-12")), Some(date("2026-01-16")), date("2026-02-01"));
        let days = window.days();
        assert_eq!(days.len(), 5);
        assert_eq!(days[0], start_of_day(date("2026-01-12")));
        assert_eq!(days[4], start_of_day(date("2026-01-16")));
    }

    #[test]
    fn test_days_are_ascending() {
        let window = DateWindow::anchored(Some(date("2026-01-12")), Some(date("2026-01-16")), date("2026-02-01"));
        let days = window.days();
        for pair in days.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_inverted_window_yields_no_days() {
        let window = DateWindow::anchored(Some(date("2026-01-16")), Some(date("2026-01-12")), date("2026-02-01"));
        assert!(window.days().is_empty());
    }

    #[test]
    fn test_unset_bounds_default_independently() {
        let anchor = date("2026-01-20");
        // Only the upper bound set: lower anchors to the default day.
        let window = DateWindow::anchored(None, Some(date("2026-01-22")), anchor);
        assert_eq!(window.start(), start_of_day(anchor));
        assert_eq!(window.end(), end_of_day(date("2026-01-22")));

        // Only the lower bound set: upper anchors to the default day,
        // even when that inverts the window.
        let window = DateWindow::anchored(Some(date("2026-01-25")), None, anchor);
        assert_eq!(window.end(), end_of_day(anchor));
        assert!(window.days().is_empty());
    }

    #[test]
    fn test_window_boundaries_cover_full_days() {
        let window = DateWindow::anchored(Some(date("2026-01-14")), Some(date("2026-01-14")), date("2026-02-01"));
        assert_eq!(
            window.start(),
            date("2026-01-14").and_hms_opt(0, 0, 0).unwrap()
        );
        assert_eq!(
            window.end(),
            date("2026-01-14")
                .and_hms_micro_opt(23, 59, 59, 999_999)
                .unwrap()
        );
    }

    #[test]
    fn test_day_bounds() {
        let (min_check, max_check) = day_bounds(date("2026-01-14"));
        assert_eq!(min_check, start_of_day(date("2026-01-14")));
        assert_eq!(max_check, end_of_day(date("2026-01-14")));
        assert!(min_check < max_check);
    }

    #[test]
    fn test_resolve_defaults_to_yesterday() {
        let window = DateWindow::resolve(None, None);
        let yesterday = Local::now().date_naive().pred_opt().unwrap();
        assert_eq!(window.start(), start_of_day(yesterday));
        assert_eq!(window.days().len(), 1);
    }
}
