//! Progress reporting while the completion gateway works

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use interview_application::{InterviewProgressNotifier, Translate};
use interview_domain::Role;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// "Generating feedback for i / K"
fn feedback_message(t: &dyn Translate, index: usize, total: usize) -> String {
    format!("{} {} / {}", t.t("generatingFeedbackFor"), index + 1, total)
}

/// Reports progress with a spinner for question generation and a bar for
/// feedback generation
pub struct ProgressReporter {
    translator: Arc<dyn Translate>,
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self {
            translator,
            bar: Mutex::new(None),
        }
    }

    fn feedback_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn replace_bar(&self, bar: Option<ProgressBar>) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(old) = std::mem::replace(&mut *slot, bar)
        {
            old.finish_and_clear();
        }
    }
}

impl InterviewProgressNotifier for ProgressReporter {
    fn on_questions_start(&self, role: &Role, requested: usize) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(role.to_string());
        pb.set_message(format!(
            "{} ({})",
            self.translator.t("preparingInterview"),
            requested
        ));
        pb.enable_steady_tick(Duration::from_millis(100));
        self.replace_bar(Some(pb));
    }

    fn on_questions_complete(&self, _received: usize, _success: bool) {
        self.replace_bar(None);
    }

    fn on_feedback_start(&self, index: usize, total: usize) {
        let message = feedback_message(self.translator.as_ref(), index, total);
        let Ok(mut slot) = self.bar.lock() else {
            return;
        };
        let pb = slot.get_or_insert_with(|| {
            let pb = ProgressBar::new(total as u64);
            pb.set_style(Self::feedback_style());
            pb.set_prefix(self.translator.t("aiFeedback"));
            pb
        });
        pb.set_position(index as u64);
        pb.set_message(message);
    }

    fn on_feedback_complete(&self, index: usize, total: usize, success: bool) {
        let finished = {
            let Ok(slot) = self.bar.lock() else {
                return;
            };
            if let Some(pb) = slot.as_ref() {
                pb.inc(1);
            }
            !success || index + 1 >= total
        };
        if finished {
            self.replace_bar(None);
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress {
    translator: Arc<dyn Translate>,
}

impl SimpleProgress {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

impl InterviewProgressNotifier for SimpleProgress {
    fn on_questions_start(&self, role: &Role, requested: usize) {
        println!(
            "{} {} ({}, {})",
            "->".cyan(),
            self.translator.t("preparingInterview").bold(),
            role,
            requested
        );
    }

    fn on_questions_complete(&self, received: usize, success: bool) {
        if success {
            println!("  {} {}", "v".green(), received);
        } else {
            println!("  {} {}", "x".red(), self.translator.t("error"));
        }
    }

    fn on_feedback_start(&self, index: usize, total: usize) {
        println!(
            "{} {}",
            "->".cyan(),
            feedback_message(self.translator.as_ref(), index, total)
        );
    }

    fn on_feedback_complete(&self, _index: usize, _total: usize, success: bool) {
        if success {
            println!("  {}", "v".green());
        } else {
            println!("  {} {}", "x".red(), self.translator.t("feedbackError"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct KeyEcho;

    impl Translate for KeyEcho {
        fn t(&self, key: &str) -> String {
            key.to_string()
        }
    }

    #[test]
    fn test_feedback_message_is_one_based() {
        assert_eq!(
            feedback_message(&KeyEcho, 0, 3),
            "generatingFeedbackFor 1 / 3"
        );
    }

    #[test]
    fn test_reporter_clears_bar_after_last_item() {
        let reporter = ProgressReporter::new(Arc::new(KeyEcho));
        reporter.on_feedback_start(0, 2);
        reporter.on_feedback_complete(0, 2, true);
        assert!(reporter.bar.lock().unwrap().is_some());
        reporter.on_feedback_start(1, 2);
        reporter.on_feedback_complete(1, 2, true);
        assert!(reporter.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_reporter_clears_bar_on_failure() {
        let reporter = ProgressReporter::new(Arc::new(KeyEcho));
        reporter.on_feedback_start(0, 3);
        reporter.on_feedback_complete(0, 3, false);
        assert!(reporter.bar.lock().unwrap().is_none());
    }
}
