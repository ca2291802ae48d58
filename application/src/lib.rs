//! Application layer for interview-practice
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BehaviorConfig, SessionDefaults};
pub use ports::{
    completion::{CompletionError, CompletionGateway, FeedbackRequest, QuestionRequest},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    notification::{NoNotifications, NotificationSink},
    preference_store::{MemoryPreferenceStore, PreferenceError, PreferenceStore},
    progress::{InterviewProgressNotifier, NoProgress},
    translate::Translate,
};
pub use use_cases::completion::LlmCompletionGateway;
pub use use_cases::language::LanguageService;
pub use use_cases::run_interview::InterviewController;
