//! Prompt domain
//!
//! Templates for the two completion requests of an interview run, and the
//! parsers that turn model output back into domain values.

pub mod parsing;
mod template;

pub use parsing::{parse_feedback, parse_questions};
pub use template::InterviewPromptTemplate;
