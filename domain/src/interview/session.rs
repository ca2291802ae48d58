//! Interview session state machine
//!
//! ```text
//! LoadingQuestions ──questions──▶ InProgress ──last answer──▶ GeneratingFeedback ──▶ Results
//!        │                         ▲      │                         │
//!        └──failure──▶ Error       └answer┘                         └─partial failure─▶ Results (+warning)
//! ```
//!
//! The session is pure state: it never calls the completion gateway itself.
//! The application layer performs the requests and reports their outcome
//! through the transition methods below.

use crate::core::error::DomainError;
use crate::interview::feedback::{AnswerFeedback, FeedbackResult};
use crate::interview::parameters::SessionParameters;
use crate::interview::phase::InterviewPhase;
use crate::interview::view::InterviewView;

/// Message catalog key shown when question generation fails
pub const GENERATION_FAILED_MESSAGE: &str = "interviewStartFailed";

/// Message catalog key shown when feedback generation stops early
pub const FEEDBACK_FAILED_MESSAGE: &str = "feedbackPartiallyFailed";

/// Detail used when the gateway succeeds with zero questions
pub const NO_QUESTIONS_GENERATED: &str = "No questions were generated.";

/// Result of submitting an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The answer was blank; nothing changed
    Rejected,
    /// The answer was stored and the session moved to question `index`
    Advanced { index: usize },
    /// The last answer was stored; the session is now generating feedback
    Completed,
}

/// One question/answer pair waiting for feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFeedback {
    pub index: usize,
    pub question: String,
    pub answer: String,
}

/// A single interview run (Entity)
///
/// Invariants: `answers.len() <= questions.len()` and
/// `feedback.len() <= answers.len()`.
#[derive(Debug, Clone)]
pub struct InterviewSession {
    parameters: SessionParameters,
    phase: InterviewPhase,
    questions: Vec<String>,
    answers: Vec<String>,
    feedback: Vec<FeedbackResult>,
    current_index: usize,
    generating_index: usize,
    input: String,
    message: Option<String>,
}

impl InterviewSession {
    /// Start a session; it begins in `LoadingQuestions`
    pub fn new(parameters: SessionParameters) -> Self {
        Self {
            parameters,
            phase: InterviewPhase::LoadingQuestions,
            questions: Vec::new(),
            answers: Vec::new(),
            feedback: Vec::new(),
            current_index: 0,
            generating_index: 0,
            input: String::new(),
            message: None,
        }
    }

    pub fn parameters(&self) -> &SessionParameters {
        &self.parameters
    }

    pub fn phase(&self) -> InterviewPhase {
        self.phase
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn feedback_results(&self) -> &[FeedbackResult] {
        &self.feedback
    }

    pub fn current_question_index(&self) -> usize {
        self.current_index
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn generating_index(&self) -> usize {
        self.generating_index
    }

    /// Error message in `Error`, feedback warning in `Results`
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the answer input buffer
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn current_question(&self) -> Option<&str> {
        match self.phase {
            InterviewPhase::InProgress => self.questions.get(self.current_index).map(String::as_str),
            _ => None,
        }
    }

    fn ensure_phase(&self, expected: InterviewPhase, action: &'static str) -> Result<(), DomainError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(DomainError::InvalidTransition {
                action,
                phase: self.phase.as_str(),
            })
        }
    }

    /// Questions arrived from the gateway.
    ///
    /// Blank entries are dropped. An empty sequence is a failure and moves
    /// the session to `Error`. Returns the new phase.
    pub fn questions_loaded(&mut self, questions: Vec<String>) -> Result<InterviewPhase, DomainError> {
        self.ensure_phase(InterviewPhase::LoadingQuestions, "load questions")?;

        let questions: Vec<String> = questions
            .into_iter()
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty())
            .collect();

        if questions.is_empty() {
            self.phase = InterviewPhase::Error;
            self.message = Some(GENERATION_FAILED_MESSAGE.to_string());
        } else {
            self.questions = questions;
            self.current_index = 0;
            self.phase = InterviewPhase::InProgress;
        }
        Ok(self.phase)
    }

    /// Question generation failed
    pub fn questions_failed(&mut self) -> Result<(), DomainError> {
        self.ensure_phase(InterviewPhase::LoadingQuestions, "fail question generation")?;
        self.phase = InterviewPhase::Error;
        self.message = Some(GENERATION_FAILED_MESSAGE.to_string());
        Ok(())
    }

    /// Submit the content of the input buffer
    pub fn submit_input(&mut self) -> Result<AnswerOutcome, DomainError> {
        let answer = self.input.clone();
        self.submit_answer(&answer)
    }

    /// Submit an answer for the current question.
    ///
    /// A blank answer is rejected without touching any state. An accepted
    /// answer clears the input buffer and either advances to the next
    /// question or, for the last question, enters `GeneratingFeedback`.
    pub fn submit_answer(&mut self, answer: &str) -> Result<AnswerOutcome, DomainError> {
        self.ensure_phase(InterviewPhase::InProgress, "submit an answer")?;

        if answer.trim().is_empty() {
            return Ok(AnswerOutcome::Rejected);
        }

        self.answers.push(answer.to_string());
        self.input.clear();

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            Ok(AnswerOutcome::Advanced {
                index: self.current_index,
            })
        } else {
            self.phase = InterviewPhase::GeneratingFeedback;
            self.generating_index = 0;
            Ok(AnswerOutcome::Completed)
        }
    }

    /// Question/answer pairs that still need feedback, in question order
    pub fn pending_feedback(&self) -> Vec<PendingFeedback> {
        self.questions
            .iter()
            .zip(self.answers.iter())
            .enumerate()
            .skip(self.feedback.len())
            .map(|(index, (question, answer))| PendingFeedback {
                index,
                question: question.clone(),
                answer: answer.clone(),
            })
            .collect()
    }

    /// Mark item `index` as the one being generated
    pub fn begin_feedback(&mut self, index: usize) -> Result<(), DomainError> {
        self.ensure_phase(InterviewPhase::GeneratingFeedback, "generate feedback")?;
        if index != self.feedback.len() || index >= self.answers.len() {
            return Err(DomainError::InvalidTransition {
                action: "generate feedback out of order",
                phase: self.phase.as_str(),
            });
        }
        self.generating_index = index;
        Ok(())
    }

    /// Store feedback for the next item and move on to the one after it.
    /// Returns the new phase, which is `Results` once every question has
    /// feedback.
    pub fn record_feedback(&mut self, feedback: AnswerFeedback) -> Result<InterviewPhase, DomainError> {
        self.ensure_phase(InterviewPhase::GeneratingFeedback, "record feedback")?;

        let index = self.feedback.len();
        let (Some(question), Some(answer)) = (self.questions.get(index), self.answers.get(index))
        else {
            return Err(DomainError::InvalidTransition {
                action: "record feedback without an answer",
                phase: self.phase.as_str(),
            });
        };

        self.feedback
            .push(FeedbackResult::new(question.clone(), answer.clone(), feedback));

        if self.feedback.len() == self.questions.len() {
            self.phase = InterviewPhase::Results;
        } else {
            self.generating_index = self.feedback.len();
        }
        Ok(self.phase)
    }

    /// A feedback request failed: finish with what has been accumulated and
    /// a warning (degraded success)
    pub fn feedback_failed(&mut self) -> Result<(), DomainError> {
        self.ensure_phase(InterviewPhase::GeneratingFeedback, "fail feedback generation")?;
        self.phase = InterviewPhase::Results;
        self.message = Some(FEEDBACK_FAILED_MESSAGE.to_string());
        Ok(())
    }

    /// `(current_index + 1) / total` while answering
    pub fn progress_fraction(&self) -> Option<f64> {
        match self.phase {
            InterviewPhase::InProgress if !self.questions.is_empty() => {
                Some((self.current_index + 1) as f64 / self.questions.len() as f64)
            }
            _ => None,
        }
    }

    /// `(generating_index + 1) / total` while generating feedback
    pub fn generating_progress(&self) -> Option<f64> {
        match self.phase {
            InterviewPhase::GeneratingFeedback if !self.questions.is_empty() => {
                Some((self.generating_index + 1) as f64 / self.questions.len() as f64)
            }
            _ => None,
        }
    }

    /// View data for the current phase
    pub fn view(&self) -> InterviewView<'_> {
        let role = self.parameters.role();
        let difficulty = self.parameters.difficulty();
        let total = self.questions.len();

        match self.phase {
            InterviewPhase::LoadingQuestions => InterviewView::Loading { role, difficulty },
            InterviewPhase::InProgress => InterviewView::InProgress {
                role,
                difficulty,
                question: self.current_question().unwrap_or_default(),
                number: self.current_index + 1,
                total,
                progress: self.progress_fraction().unwrap_or_default(),
                input: &self.input,
                is_last: self.current_index + 1 == total,
            },
            InterviewPhase::GeneratingFeedback => InterviewView::GeneratingFeedback {
                role,
                difficulty,
                results: &self.feedback,
                generating_index: self.generating_index,
                total,
                progress: self.generating_progress().unwrap_or_default(),
            },
            InterviewPhase::Results => InterviewView::Results {
                role,
                difficulty,
                results: &self.feedback,
                warning: self.message.as_deref(),
            },
            InterviewPhase::Error => InterviewView::Error {
                message: self.message.as_deref().unwrap_or(GENERATION_FAILED_MESSAGE),
            },
        }
    }

    /// Discard a finished session, returning the parameters it ran with.
    /// Only allowed from `Results` or `Error`.
    pub fn restart(self) -> Result<SessionParameters, DomainError> {
        if !self.phase.is_terminal() {
            return Err(DomainError::InvalidTransition {
                action: "restart",
                phase: self.phase.as_str(),
            });
        }
        Ok(self.parameters)
    }

    /// Leave the session from any phase (navigating back to setup)
    pub fn into_parameters(self) -> SessionParameters {
        self.parameters
    }
}
