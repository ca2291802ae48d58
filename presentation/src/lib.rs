//! Presentation layer for interview-practice
//!
//! This crate contains CLI definitions, the setup form, the interview REPL,
//! per-phase rendering, progress reporters and output formatters.

pub mod cli;
pub mod config;
pub mod interview;
pub mod output;
pub mod progress;
pub mod render;
pub mod setup;

// Re-export commonly used types
pub use cli::commands::{Cli, DifficultyArg, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use interview::{InterviewRepl, LineReader, ReedlineReader, ReplError};
pub use output::console::{ConsoleFormatter, InterviewFailure, InterviewReport};
pub use output::notifier::ConsoleNotifier;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use render::ViewRenderer;
pub use setup::{SetupForm, SetupOutcome};
