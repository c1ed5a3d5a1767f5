//! Core data models for the reconciliation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod calendar_exception;
mod employee;
mod leave;
mod notification;

pub use attendance::{AttendanceRecord, NewAttendance};
pub use calendar_exception::CalendarException;
pub use employee::Employee;
pub use leave::LeaveInterval;
pub use notification::{NextAction, Notification, NotificationKind, Severity};
