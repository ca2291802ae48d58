//! Run Interview use case
//!
//! Drives one [`InterviewSession`] through its phases, issuing the
//! completion requests each phase needs.
//!
//! Every transition takes `&mut self`, so a second transition cannot start
//! while a request is in flight. Dropping the controller abandons the
//! session together with any outstanding request.

use crate::ports::completion::{CompletionGateway, FeedbackRequest, QuestionRequest};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::notification::{NoNotifications, NotificationSink};
use crate::ports::progress::InterviewProgressNotifier;
use interview_domain::core::string::preview;
use interview_domain::interview::session::NO_QUESTIONS_GENERATED;
use interview_domain::{
    AnswerOutcome, DomainError, InterviewPhase, InterviewSession, InterviewView, Notification,
    SessionParameters,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Controller for a single interview run
pub struct InterviewController<C: CompletionGateway + ?Sized> {
    completion: Arc<C>,
    session: InterviewSession,
    notifications: Arc<dyn NotificationSink>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<C: CompletionGateway + ?Sized> InterviewController<C> {
    /// Create a controller for a new session in `LoadingQuestions`.
    ///
    /// Call [`start`](Self::start) to request the questions.
    pub fn new(completion: Arc<C>, parameters: SessionParameters) -> Self {
        Self {
            completion,
            session: InterviewSession::new(parameters),
            notifications: Arc::new(NoNotifications),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_notifications(mut self, notifications: Arc<dyn NotificationSink>) -> Self {
        self.notifications = notifications;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn session(&self) -> &InterviewSession {
        &self.session
    }

    pub fn phase(&self) -> InterviewPhase {
        self.session.phase()
    }

    pub fn view(&self) -> InterviewView<'_> {
        self.session.view()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.session.set_input(text);
    }

    /// Request the questions. Ends in `InProgress` or `Error`.
    pub async fn start(
        &mut self,
        progress: &dyn InterviewProgressNotifier,
    ) -> Result<InterviewPhase, DomainError> {
        if self.session.phase() != InterviewPhase::LoadingQuestions {
            return Err(DomainError::InvalidTransition {
                action: "start",
                phase: self.session.phase().as_str(),
            });
        }

        let request = QuestionRequest::from(self.session.parameters());
        info!(
            "Starting interview: role={}, difficulty={}, questions={}",
            request.role, request.difficulty, request.question_count
        );
        progress.on_phase_change(InterviewPhase::LoadingQuestions);
        progress.on_questions_start(&request.role, request.question_count.get());
        self.conversation_logger.log(ConversationEvent::new(
            "questions_requested",
            json!({
                "role": request.role.as_str(),
                "difficulty": request.difficulty.as_str(),
                "question_count": request.question_count.get(),
            }),
        ));

        match self.completion.generate_questions(&request).await {
            Ok(questions) => {
                let phase = self.session.questions_loaded(questions)?;
                let received = self.session.total_questions();
                progress.on_questions_complete(received, received > 0);

                if phase == InterviewPhase::Error {
                    warn!("No questions were generated");
                    self.raise_generation_failure(NO_QUESTIONS_GENERATED);
                } else {
                    self.conversation_logger.log(ConversationEvent::new(
                        "questions_generated",
                        json!({ "questions": self.session.questions() }),
                    ));
                }
                progress.on_phase_change(phase);
                Ok(phase)
            }
            Err(e) => {
                warn!("Question generation failed: {}", e);
                progress.on_questions_complete(0, false);
                self.session.questions_failed()?;
                self.raise_generation_failure(&e.to_string());
                progress.on_phase_change(InterviewPhase::Error);
                Ok(InterviewPhase::Error)
            }
        }
    }

    fn raise_generation_failure(&self, detail: &str) {
        self.conversation_logger.log(ConversationEvent::new(
            "questions_failed",
            json!({ "error": detail }),
        ));
        self.notifications
            .notify(&Notification::generation_failed(detail));
    }

    /// Submit the content of the input buffer
    pub async fn submit_input(
        &mut self,
        progress: &dyn InterviewProgressNotifier,
    ) -> Result<AnswerOutcome, DomainError> {
        let index = self.session.current_question_index();
        let answer = self.session.input().to_string();
        let outcome = self.session.submit_input()?;
        self.answer_recorded(index, &answer, outcome, progress);
        Ok(outcome)
    }

    /// Submit an answer for the current question.
    ///
    /// A blank answer raises one "empty answer" notification and changes
    /// nothing. After the last answer the session is in
    /// `GeneratingFeedback`; call [`generate_feedback`](Self::generate_feedback)
    /// or step through it with [`next_feedback`](Self::next_feedback).
    pub async fn submit_answer(
        &mut self,
        answer: &str,
        progress: &dyn InterviewProgressNotifier,
    ) -> Result<AnswerOutcome, DomainError> {
        let index = self.session.current_question_index();
        let outcome = self.session.submit_answer(answer)?;
        self.answer_recorded(index, answer, outcome, progress);
        Ok(outcome)
    }

    fn answer_recorded(
        &self,
        index: usize,
        answer: &str,
        outcome: AnswerOutcome,
        progress: &dyn InterviewProgressNotifier,
    ) {
        match outcome {
            AnswerOutcome::Rejected => {
                debug!("Rejected empty answer for question {}", index + 1);
                self.notifications.notify(&Notification::empty_answer());
            }
            AnswerOutcome::Advanced { .. } | AnswerOutcome::Completed => {
                debug!("Answer {} recorded: {}", index + 1, preview(answer, 60));
                self.conversation_logger.log(ConversationEvent::new(
                    "answer_submitted",
                    json!({
                        "index": index,
                        "question": self.session.questions().get(index),
                        "answer": answer,
                    }),
                ));
            }
        }

        if outcome == AnswerOutcome::Completed {
            progress.on_phase_change(InterviewPhase::GeneratingFeedback);
        }
    }

    /// Request feedback for each answer in question order, stopping at the
    /// first failure. Ends in `Results`, with a warning if a request failed.
    pub async fn generate_feedback(
        &mut self,
        progress: &dyn InterviewProgressNotifier,
    ) -> Result<InterviewPhase, DomainError> {
        loop {
            let phase = self.next_feedback(progress).await?;
            if phase != InterviewPhase::GeneratingFeedback {
                return Ok(phase);
            }
        }
    }

    /// Request feedback for the next answer only.
    ///
    /// Returns `GeneratingFeedback` while answers remain, so the caller can
    /// show the partial report between requests.
    pub async fn next_feedback(
        &mut self,
        progress: &dyn InterviewProgressNotifier,
    ) -> Result<InterviewPhase, DomainError> {
        if self.session.phase() != InterviewPhase::GeneratingFeedback {
            return Err(DomainError::InvalidTransition {
                action: "generate feedback",
                phase: self.session.phase().as_str(),
            });
        }

        let Some(item) = self.session.pending_feedback().into_iter().next() else {
            return Err(DomainError::InvalidTransition {
                action: "generate feedback without an answer",
                phase: self.session.phase().as_str(),
            });
        };
        let total = self.session.total_questions();
        if item.index == 0 {
            info!("Generating feedback for {} answers", total);
        }

        self.session.begin_feedback(item.index)?;
        progress.on_feedback_start(item.index, total);

        let request = FeedbackRequest {
            question: item.question,
            answer: item.answer,
            role: self.session.parameters().role().clone(),
        };

        match self.completion.provide_feedback(&request).await {
            Ok(feedback) => {
                progress.on_feedback_complete(item.index, total, true);
                self.conversation_logger.log(ConversationEvent::new(
                    "feedback_generated",
                    json!({
                        "index": item.index,
                        "question": request.question,
                        "feedback": feedback.feedback,
                        "suggested_answer": feedback.suggested_answer,
                    }),
                ));
                self.session.record_feedback(feedback)?;
            }
            Err(e) => {
                warn!("Feedback for question {} failed: {}", item.index + 1, e);
                progress.on_feedback_complete(item.index, total, false);
                self.conversation_logger.log(ConversationEvent::new(
                    "feedback_failed",
                    json!({ "index": item.index, "error": e.to_string() }),
                ));
                self.session.feedback_failed()?;
                self.notifications
                    .notify(&Notification::feedback_failed(e.to_string()));
            }
        }

        let phase = self.session.phase();
        if phase != InterviewPhase::GeneratingFeedback {
            self.conversation_logger.log(ConversationEvent::new(
                "session_completed",
                json!({
                    "questions": total,
                    "feedback": self.session.feedback_results().len(),
                    "warning": self.session.message(),
                }),
            ));
            progress.on_phase_change(phase);
        }
        Ok(phase)
    }

    /// Discard a finished session (`Results` or `Error`), returning the
    /// parameters it ran with
    pub fn restart(self) -> Result<SessionParameters, DomainError> {
        self.session.restart()
    }

    /// Discard the session from any phase
    pub fn abandon(self) -> SessionParameters {
        self.session.into_parameters()
    }
}
