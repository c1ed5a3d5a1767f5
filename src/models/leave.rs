//! Approved-leave interval model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An approved leave interval for an employee.
///
/// Read-only input to the reconciler: leave/holiday policy is decided
/// elsewhere, this engine only consumes the resulting intervals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveInterval {
    /// Identifier of the employee on leave.
    pub employee_id: String,
    /// Start of the leave interval.
    pub date_from: NaiveDateTime,
    /// End of the leave interval.
    pub date_to: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_leave_interval() {
        let json = r#"{
            "employee_id": "emp_001",
            "date_from": "2026-01-14T00:00:00",
            "date_to": "2026-01-16T23:59:59"
        }"#;

        let leave: LeaveInterval = serde_json::from_str(json).unwrap();
        assert_eq!(leave.employee_id, "emp_001");
        assert!(leave.date_from < leave.date_to);
    }
}
