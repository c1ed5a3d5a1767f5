//! Missing-Attendance Reconciliation Engine
//!
//! This crate detects, per employee and per calendar day, whether an expected
//! attendance record is missing and synthesizes a placeholder attendance entry
//! flagged for follow-up. Employee work calendars, existing attendance punches,
//! approved leave, and calendar-exception intervals are consumed through
//! repository traits; corrective records are appended back through the same seam.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod reconcile;
pub mod store;
