//! Transient user notifications

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Destructive,
}

/// A short-lived, dismissible message shown next to the current view.
///
/// Titles and descriptions are either message catalog keys or literal text;
/// renderers translate them, and unknown keys render verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Destructive,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Raised when an answer trims to empty
    pub fn empty_answer() -> Self {
        Self::destructive("emptyAnswer", "provideAnswer")
    }

    /// Raised when question generation fails
    pub fn generation_failed(detail: impl Into<String>) -> Self {
        Self::destructive("error", detail)
    }

    /// Raised when a feedback request fails mid-sequence
    pub fn feedback_failed(detail: impl Into<String>) -> Self {
        Self::destructive("feedbackError", detail)
    }
}
