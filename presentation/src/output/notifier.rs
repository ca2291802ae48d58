//! Console notification sink

use colored::Colorize;
use interview_application::{NotificationSink, Translate};
use interview_domain::{Notification, NotificationLevel};
use std::sync::Arc;

/// Prints transient notifications to stderr, translated at display time
pub struct ConsoleNotifier {
    translator: Arc<dyn Translate>,
}

impl ConsoleNotifier {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }

    /// One-line rendering of a notification
    pub fn format(&self, notification: &Notification) -> String {
        let title = self.translator.t(&notification.title);
        let description = self.translator.t(&notification.description);
        match notification.level {
            NotificationLevel::Destructive => {
                format!("{} {}: {}", "x".red().bold(), title.red().bold(), description)
            }
            NotificationLevel::Info => {
                format!("{} {}: {}", "i".cyan().bold(), title.bold(), description)
            }
        }
    }
}

impl NotificationSink for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        eprintln!("{}", self.format(notification));
    }
}
