//! Reconciliation logic for missing attendances.
//!
//! This module contains the core of the engine: date-window defaulting and
//! day enumeration, the interval-overlap predicate used for leave and
//! calendar-exception checks, per-day diagnostics, and the [`Reconciler`]
//! that ties them to the store traits.

mod diagnostics;
mod overlap;
mod reconciler;
mod window;

pub use diagnostics::{DayCheck, DiagnosticSink, TracingSink};
pub use overlap::overlaps_day;
pub use reconciler::{PLACEHOLDER_CHECK_IN_HOUR, Reconciler, RunOutcome};
pub use window::{DateWindow, day_bounds, end_of_day, start_of_day};
