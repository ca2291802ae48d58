//! Progress notification port
//!
//! Defines the interface for reporting progress while an interview waits on
//! the completion gateway.

use interview_domain::{InterviewPhase, Role};

/// Callback for progress updates during an interview
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, progress bar, plain lines).
pub trait InterviewProgressNotifier: Send + Sync {
    /// Called when question generation starts
    fn on_questions_start(&self, role: &Role, requested: usize);

    /// Called when question generation finishes
    fn on_questions_complete(&self, received: usize, success: bool);

    /// Called before feedback for item `index` (0-based) is requested
    fn on_feedback_start(&self, index: usize, total: usize);

    /// Called after feedback for item `index` arrives or fails
    fn on_feedback_complete(&self, index: usize, total: usize, success: bool);

    /// Called whenever the session enters a new phase
    fn on_phase_change(&self, _phase: InterviewPhase) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl InterviewProgressNotifier for NoProgress {
    fn on_questions_start(&self, _role: &Role, _requested: usize) {}
    fn on_questions_complete(&self, _received: usize, _success: bool) {}
    fn on_feedback_start(&self, _index: usize, _total: usize) {}
    fn on_feedback_complete(&self, _index: usize, _total: usize, _success: bool) {}
}
