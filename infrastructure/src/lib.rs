//! Infrastructure layer for interview-practice
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod i18n;
pub mod logging;
pub mod openai;
pub mod preferences;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileI18nConfig, FileInterviewConfig,
    FileLoggingConfig, FileOutputConfig, FileOutputFormat, FileProviderConfig, FileReplConfig,
};
pub use i18n::{CatalogError, bundled_translations};
pub use logging::JsonlConversationLogger;
pub use openai::{
    error::HttpGatewayError,
    gateway::{OpenAiConfig, OpenAiLlmGateway},
    session::OpenAiSession,
};
pub use preferences::FilePreferenceStore;
