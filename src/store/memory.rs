//! In-memory reference adapter for the store traits.
//!
//! Backs the integration tests, the benchmarks, and the default API state.
//! Query semantics match what the host's real adapters are expected to
//! implement, so the reconciler behaves identically against either.

use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::error::{ReconcileError, ReconcileResult};
use crate::models::{AttendanceRecord, CalendarException, Employee, LeaveInterval, NewAttendance};

use super::{
    AttendanceRepository, CalendarExceptionRepository, EmployeeRepository, LeaveRepository,
};

/// In-memory store implementing every repository trait.
///
/// Interior mutability lets a single shared instance serve reads and the
/// append-only attendance writes a run performs. Writes are serialized by a
/// mutex, so concurrent callers cannot interleave record creation.
///
/// # Example
///
/// ```
/// use attendance_reconciler::store::{EmployeeRepository, MemoryStore};
/// use attendance_reconciler::models::Employee;
///
/// let store = MemoryStore::default();
/// store.add_employee(Employee {
///     id: "emp_001".to_string(),
///     name: "Alex Mercer".to_string(),
///     company_id: "company_01".to_string(),
///     company_name: "Acme Care".to_string(),
///     calendar_id: "cal_standard".to_string(),
/// });
/// assert_eq!(store.all().unwrap().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    employees: Mutex<Vec<Employee>>,
    attendances: Mutex<Vec<AttendanceRecord>>,
    leaves: Mutex<Vec<LeaveInterval>>,
    exceptions: Mutex<Vec<CalendarException>>,
}

fn lock<'a, T>(mutex: &'a Mutex<T>, what: &str) -> ReconcileResult<MutexGuard<'a, T>> {
    mutex.lock().map_err(|_| ReconcileError::Storage {
        message: format!("{} store lock poisoned", what),
    })
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee to the store.
    pub fn add_employee(&self, employee: Employee) {
        if let Ok(mut employees) = self.employees.lock() {
            employees.push(employee);
        }
    }

    /// Adds an existing attendance record to the store.
    pub fn add_attendance(&self, record: AttendanceRecord) {
        if let Ok(mut attendances) = self.attendances.lock() {
            attendances.push(record);
        }
    }

    /// Adds a leave interval to the store.
    pub fn add_leave(&self, leave: LeaveInterval) {
        if let Ok(mut leaves) = self.leaves.lock() {
            leaves.push(leave);
        }
    }

    /// Adds a calendar exception to the store.
    pub fn add_exception(&self, exception: CalendarException) {
        if let Ok(mut exceptions) = self.exceptions.lock() {
            exceptions.push(exception);
        }
    }

    /// Returns a snapshot of every attendance record currently stored.
    pub fn attendances(&self) -> ReconcileResult<Vec<AttendanceRecord>> {
        Ok(lock(&self.attendances, "attendance")?.clone())
    }
}

impl EmployeeRepository for MemoryStore {
    fn all(&self) -> ReconcileResult<Vec<Employee>> {
        Ok(lock(&self.employees, "employee")?.clone())
    }

    fn by_ids(&self, ids: &[String]) -> ReconcileResult<Vec<Employee>> {
        let employees = lock(&self.employees, "employee")?;
        Ok(employees
            .iter()
            .filter(|e| ids.contains(&e.id))
            .cloned()
            .collect())
    }
}

impl AttendanceRepository for MemoryStore {
    fn completed_since(
        &self,
        employee_id: &str,
        since: NaiveDateTime,
    ) -> ReconcileResult<Vec<AttendanceRecord>> {
        let attendances = lock(&self.attendances, "attendance")?;
        Ok(attendances
            .iter()
            .filter(|a| {
                a.employee_id == employee_id && a.check_in >= since && a.check_out.is_some()
            })
            .cloned()
            .collect())
    }

    fn create(&self, new: NewAttendance) -> ReconcileResult<AttendanceRecord> {
        let record = AttendanceRecord {
            id: Uuid::new_v4(),
            employee_id: new.employee_id,
            check_in: new.check_in,
            check_out: new.check_out,
            is_missing_attendance: new.is_missing_attendance,
        };
        lock(&self.attendances, "attendance")?.push(record.clone());
        Ok(record)
    }
}

impl LeaveRepository for MemoryStore {
    fn active_since(
        &self,
        employee_id: &str,
        since: NaiveDateTime,
    ) -> ReconcileResult<Vec<LeaveInterval>> {
        let leaves = lock(&self.leaves, "leave")?;
        Ok(leaves
            .iter()
            .filter(|l| {
                l.employee_id == employee_id && (l.date_from >= since || l.date_to >= since)
            })
            .cloned()
            .collect())
    }
}

impl CalendarExceptionRepository for MemoryStore {
    fn matching(
        &self,
        company_id: &str,
        calendar_id: &str,
        window_start: NaiveDateTime,
        window_end: NaiveDateTime,
    ) -> ReconcileResult<Vec<CalendarException>> {
        let exceptions = lock(&self.exceptions, "calendar exception")?;
        Ok(exceptions
            .iter()
            .filter(|e| {
                e.applies_to(company_id, calendar_id) && e.within_window(window_start, window_end)
            })
            .cloned()
            .collect())
    }
}
