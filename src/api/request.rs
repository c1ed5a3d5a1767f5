//! Request types for the reconciliation API.
//!
//! This module defines the JSON request structure for the `/reconcile`
//! endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request body for the `/reconcile` endpoint.
///
/// Every field is optional: an empty body reconciles all employees over
/// the default single-day window (yesterday) without diagnostics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReconcileRequest {
    /// Employees to reconcile; `None` means all known employees.
    #[serde(default)]
    pub employee_ids: Option<Vec<String>>,
    /// First calendar day of the window; defaults to yesterday.
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    /// Last calendar day of the window; defaults to yesterday.
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
    /// Whether to emit one diagnostic entry per checked (employee, day).
    #[serde(default)]
    pub logging: bool,
}
