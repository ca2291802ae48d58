//! Feedback value objects

use serde::{Deserialize, Serialize};

/// Feedback returned by the completion gateway for a single answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerFeedback {
    pub feedback: String,
    pub suggested_answer: String,
}

impl AnswerFeedback {
    pub fn new(feedback: impl Into<String>, suggested_answer: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            suggested_answer: suggested_answer.into(),
        }
    }
}

/// Feedback for one question of a finished session (Value Object)
///
/// Produced once per question, in question order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResult {
    pub question: String,
    pub answer: String,
    pub feedback: String,
    pub suggested_answer: String,
}

impl FeedbackResult {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        feedback: AnswerFeedback,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            feedback: feedback.feedback,
            suggested_answer: feedback.suggested_answer,
        }
    }
}
