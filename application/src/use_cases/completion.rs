//! Completion over an LLM gateway
//!
//! Implements the [`CompletionGateway`] port by prompting a chat model and
//! parsing its reply.

use crate::config::BehaviorConfig;
use crate::ports::completion::{
    CompletionError, CompletionGateway, FeedbackRequest, QuestionRequest,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use async_trait::async_trait;
use interview_domain::{
    AnswerFeedback, InterviewPromptTemplate, Model, parse_feedback, parse_questions,
};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// [`CompletionGateway`] backed by a chat model
pub struct LlmCompletionGateway<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    model: Model,
    behavior: BehaviorConfig,
}

impl<G: LlmGateway + 'static> LlmCompletionGateway<G> {
    pub fn new(gateway: Arc<G>, model: Model) -> Self {
        Self {
            gateway,
            model,
            behavior: BehaviorConfig::default(),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    async fn ask(&self, system_prompt: &str, prompt: &str) -> Result<String, CompletionError> {
        let request = async {
            let session = self
                .gateway
                .create_session_with_system_prompt(&self.model, system_prompt)
                .await?;
            session.send(prompt).await
        };
        self.with_timeout(request).await
    }

    async fn with_timeout<F>(&self, future: F) -> Result<String, CompletionError>
    where
        F: Future<Output = Result<String, GatewayError>>,
    {
        match self.behavior.timeout {
            Some(timeout) => match tokio::time::timeout(timeout, future).await {
                Ok(result) => Ok(result?),
                Err(_) => {
                    warn!("Model {} did not answer within {:?}", self.model, timeout);
                    Err(CompletionError::Timeout)
                }
            },
            None => Ok(future.await?),
        }
    }
}

#[async_trait]
impl<G: LlmGateway + 'static> CompletionGateway for LlmCompletionGateway<G> {
    async fn generate_questions(
        &self,
        request: &QuestionRequest,
    ) -> Result<Vec<String>, CompletionError> {
        info!(
            "Requesting {} {} questions for {}",
            request.question_count, request.difficulty, request.role
        );
        let prompt = InterviewPromptTemplate::questions_prompt(&request.to_parameters());
        let response = self
            .ask(InterviewPromptTemplate::questions_system(), &prompt)
            .await?;

        let questions = parse_questions(&response);
        debug!("Parsed {} questions", questions.len());
        if questions.len() != request.question_count.get() {
            warn!(
                "Requested {} questions, model returned {}",
                request.question_count,
                questions.len()
            );
        }
        Ok(questions)
    }

    async fn provide_feedback(
        &self,
        request: &FeedbackRequest,
    ) -> Result<AnswerFeedback, CompletionError> {
        let prompt =
            InterviewPromptTemplate::feedback_prompt(&request.role, &request.question, &request.answer);
        let response = self
            .ask(InterviewPromptTemplate::feedback_system(), &prompt)
            .await?;

        parse_feedback(&response)
            .ok_or_else(|| CompletionError::MalformedOutput("empty feedback response".to_string()))
    }
}
