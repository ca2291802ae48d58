//! Domain layer for interview-practice
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Interview session
//!
//! An [`InterviewSession`] moves through five phases:
//!
//! - **LoadingQuestions**: questions are requested for the chosen role
//! - **InProgress**: the user answers one question at a time
//! - **GeneratingFeedback**: feedback is requested per answer, in order
//! - **Results**: the report, possibly partial with a warning
//! - **Error**: question generation failed
//!
//! ## Setup
//!
//! [`SetupSelection`] turns a role, difficulty and question count into
//! [`SessionParameters`], which travel to the session as a navigation route
//! (see [`interview::route`]).

pub mod config;
pub mod core;
pub mod i18n;
pub mod interview;
pub mod prompt;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    difficulty::Difficulty, error::DomainError, model::Model, question_count::QuestionCount,
    role::Role,
};
pub use i18n::{Language, MessageCatalog, Translations};
pub use interview::{
    feedback::{AnswerFeedback, FeedbackResult},
    notification::{Notification, NotificationLevel},
    parameters::SessionParameters,
    phase::InterviewPhase,
    route::{decode_route, encode_route},
    session::{AnswerOutcome, InterviewSession, PendingFeedback},
    setup::{CountChoice, DEFAULT_ROLE_PRESETS, SetupSelection},
    view::InterviewView,
};
pub use prompt::{InterviewPromptTemplate, parse_feedback, parse_questions};
