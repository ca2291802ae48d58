//! Per-phase view data
//!
//! [`InterviewView`] carries exactly the data each phase renders, so a
//! renderer that matches it exhaustively has a view for every phase.

use crate::core::difficulty::Difficulty;
use crate::core::role::Role;
use crate::interview::feedback::FeedbackResult;
use crate::interview::phase::InterviewPhase;

#[derive(Debug, Clone, PartialEq)]
pub enum InterviewView<'a> {
    /// Questions are being generated
    Loading { role: &'a Role, difficulty: Difficulty },
    /// Waiting for the answer to `question`
    InProgress {
        role: &'a Role,
        difficulty: Difficulty,
        question: &'a str,
        /// 1-based position of the question
        number: usize,
        total: usize,
        /// `number / total`
        progress: f64,
        /// Current content of the input buffer
        input: &'a str,
        is_last: bool,
    },
    /// Feedback is being requested; `results` holds what arrived so far
    GeneratingFeedback {
        role: &'a Role,
        difficulty: Difficulty,
        results: &'a [FeedbackResult],
        /// 0-based index of the item being generated
        generating_index: usize,
        total: usize,
        /// `(generating_index + 1) / total`
        progress: f64,
    },
    /// Interview report; `warning` is set when feedback partially failed
    Results {
        role: &'a Role,
        difficulty: Difficulty,
        results: &'a [FeedbackResult],
        warning: Option<&'a str>,
    },
    Error { message: &'a str },
}

impl InterviewView<'_> {
    pub fn phase(&self) -> InterviewPhase {
        match self {
            InterviewView::Loading { .. } => InterviewPhase::LoadingQuestions,
            InterviewView::InProgress { .. } => InterviewPhase::InProgress,
            InterviewView::GeneratingFeedback { .. } => InterviewPhase::GeneratingFeedback,
            InterviewView::Results { .. } => InterviewPhase::Results,
            InterviewView::Error { .. } => InterviewPhase::Error,
        }
    }
}
