//! User-facing notification descriptor returned by a reconciliation run.
//!
//! The notification is not an error signal: a run either fails with a
//! [`ReconcileError`](crate::error::ReconcileError) or succeeds with this
//! payload, parameterized only by the number of corrective records created.

use serde::{Deserialize, Serialize};

/// The kind of client action a notification asks the host UI to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Display the notification through the host's client-action channel.
    ClientAction,
}

/// Severity of a notification, mapped to the host UI's styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The run completed normally.
    Success,
    /// Informational only.
    Info,
    /// Something needs attention but the run completed.
    Warning,
}

/// Follow-up action the host UI should take after showing the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextAction {
    /// Close the invoking window, refreshing the underlying view.
    CloseWindow,
}

/// Notification payload summarizing a reconciliation run.
///
/// # Example
///
/// ```
/// use attendance_reconciler::models::{Notification, Severity};
///
/// let notification = Notification::run_summary(3);
/// assert_eq!(notification.message, "3 missing attendances have been created.");
/// assert_eq!(notification.severity, Severity::Success);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// The kind of client action.
    pub kind: NotificationKind,
    /// Routing tag understood by the host UI.
    pub tag: String,
    /// Title shown to the invoking user.
    pub title: String,
    /// Message shown to the invoking user.
    pub message: String,
    /// Severity of the notification.
    pub severity: Severity,
    /// Follow-up action for the host UI.
    pub next_action: NextAction,
}

impl Notification {
    /// Builds the run-summary notification for a completed reconciliation.
    pub fn run_summary(created_count: usize) -> Self {
        Self {
            kind: NotificationKind::ClientAction,
            tag: "display_notification".to_string(),
            title: "Missing Attendances".to_string(),
            message: format!("{} missing attendances have been created.", created_count),
            severity: Severity::Success,
            next_action: NextAction::CloseWindow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_summary_message_zero() {
        let notification = Notification::run_summary(0);
        assert_eq!(
            notification.message,
            "0 missing attendances have been created."
        );
    }

    #[test]
    fn test_run_summary_message_one() {
        // The message shape is fixed regardless of count.
        let notification = Notification::run_summary(1);
        assert_eq!(
            notification.message,
            "1 missing attendances have been created."
        );
    }

    #[test]
    fn test_run_summary_fields() {
        let notification = Notification::run_summary(5);
        assert_eq!(notification.kind, NotificationKind::ClientAction);
        assert_eq!(notification.tag, "display_notification");
        assert_eq!(notification.title, "Missing Attendances");
        assert_eq!(notification.severity, Severity::Success);
        assert_eq!(notification.next_action, NextAction::CloseWindow);
    }

    #[test]
    fn test_notification_serialization() {
        let notification = Notification::run_summary(2);
        let json = serde_json::to_string(&notification).unwrap();
        assert!(json.contains("\"kind\":\"client_action\""));
        assert!(json.contains("\"severity\":\"success\""));
        assert!(json.contains("\"next_action\":\"close_window\""));

        let deserialized: Notification = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, notification);
    }
}
