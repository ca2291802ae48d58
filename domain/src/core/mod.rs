//! Core domain concepts shared across all subdomains.
//!
//! - [`role::Role`] — the interview role being practiced
//! - [`difficulty::Difficulty`] — Low / Medium / Hard
//! - [`question_count::QuestionCount`] — number of questions, within [1, 50]
//! - [`model::Model`] — the completion model identifier
//! - [`error::DomainError`] — domain-level errors
//! - [`string`] — display helpers

pub mod difficulty;
pub mod error;
pub mod model;
pub mod question_count;
pub mod role;
pub mod string;
