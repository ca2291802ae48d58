//! Interactive interview loop

pub mod command;
pub mod reader;
pub mod repl;

pub use command::{AnswerBuffer, ReplCommand};
pub use reader::{Input, LineReader, ReedlineReader};
pub use repl::{InterviewRepl, ReplError};
