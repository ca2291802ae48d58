//! Transient notification port

use interview_domain::Notification;

/// Receives transient notifications (empty answer, generation failures).
///
/// Titles and descriptions may be message catalog keys; sinks translate them
/// before display.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Discards every notification
pub struct NoNotifications;

impl NotificationSink for NoNotifications {
    fn notify(&self, _notification: &Notification) {}
}
