//! Interview phase

use serde::{Deserialize, Serialize};

/// Discrete state of an interview session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewPhase {
    /// Waiting for the gateway to return questions
    LoadingQuestions,
    /// Collecting one answer per question
    InProgress,
    /// Requesting feedback for each answer in order
    GeneratingFeedback,
    /// Finished, possibly with a feedback warning
    Results,
    /// Question generation failed
    Error,
}

impl InterviewPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewPhase::LoadingQuestions => "loading_questions",
            InterviewPhase::InProgress => "in_progress",
            InterviewPhase::GeneratingFeedback => "generating_feedback",
            InterviewPhase::Results => "results",
            InterviewPhase::Error => "error",
        }
    }

    /// Terminal phases can only be left by restarting
    pub fn is_terminal(&self) -> bool {
        matches!(self, InterviewPhase::Results | InterviewPhase::Error)
    }
}

impl std::fmt::Display for InterviewPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
