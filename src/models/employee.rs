//! Employee model.
//!
//! This module defines the read-only employee view the reconciler works
//! against. Employees are owned by the host record system; the engine only
//! needs the identifiers that scope its queries plus display fields for
//! diagnostics.

use serde::{Deserialize, Serialize};

/// Represents an employee whose attendance is reconciled.
///
/// # Example
///
/// ```
/// use attendance_reconciler::models::Employee;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Alex Mercer".to_string(),
///     company_id: "company_01".to_string(),
///     company_name: "Acme Care".to_string(),
///     calendar_id: "cal_standard".to_string(),
/// };
/// assert_eq!(employee.calendar_id, "cal_standard");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// Identifier of the company the employee belongs to.
    pub company_id: String,
    /// Display name of the company, used in diagnostics.
    pub company_name: String,
    /// Identifier of the employee's work calendar.
    pub calendar_id: String,
}
