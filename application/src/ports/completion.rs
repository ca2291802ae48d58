//! Completion gateway port
//!
//! The two structured requests an interview makes: generate the questions,
//! then review each answer.

use crate::ports::llm_gateway::GatewayError;
use async_trait::async_trait;
use interview_domain::{AnswerFeedback, Difficulty, QuestionCount, Role, SessionParameters};
use serde::Serialize;
use thiserror::Error;

/// Errors returned by a [`CompletionGateway`]
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Malformed completion output: {0}")]
    MalformedOutput(String),

    #[error("Completion timed out")]
    Timeout,
}

/// `{ role, difficulty, questionCount }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    pub role: Role,
    pub difficulty: Difficulty,
    pub question_count: QuestionCount,
}

impl From<&SessionParameters> for QuestionRequest {
    fn from(params: &SessionParameters) -> Self {
        Self {
            role: params.role().clone(),
            difficulty: params.difficulty(),
            question_count: params.question_count(),
        }
    }
}

impl QuestionRequest {
    pub fn to_parameters(&self) -> SessionParameters {
        SessionParameters::new(self.role.clone(), self.difficulty, self.question_count)
    }
}

/// `{ question, answer, role }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackRequest {
    pub question: String,
    pub answer: String,
    pub role: Role,
}

/// Structured completion requests
///
/// The gateway may return fewer questions than requested, or none at all;
/// the caller decides what an empty list means.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn generate_questions(
        &self,
        request: &QuestionRequest,
    ) -> Result<Vec<String>, CompletionError>;

    async fn provide_feedback(
        &self,
        request: &FeedbackRequest,
    ) -> Result<AnswerFeedback, CompletionError>;
}
