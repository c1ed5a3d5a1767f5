//! Application state for the reconciliation API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::reconcile::Reconciler;
use crate::store::EmployeeRepository;

/// Shared application state.
///
/// Holds the reconciler and the employee repository used to resolve the
/// explicit employee sets of parameterized requests.
#[derive(Clone)]
pub struct AppState {
    reconciler: Arc<Reconciler>,
    employees: Arc<dyn EmployeeRepository>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(reconciler: Arc<Reconciler>, employees: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            reconciler,
            employees,
        }
    }

    /// Returns a reference to the reconciler.
    pub fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }

    /// Returns a reference to the employee repository.
    pub fn employees(&self) -> &dyn EmployeeRepository {
        self.employees.as_ref()
    }
}
