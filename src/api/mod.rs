//! HTTP API module for the reconciliation engine.
//!
//! This module provides the REST endpoints through which the host triggers
//! reconciliation runs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReconcileRequest;
pub use response::ApiError;
pub use state::AppState;
