//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Interview role cannot be empty")]
    EmptyRole,

    #[error("Invalid difficulty: {0}")]
    InvalidDifficulty(String),

    #[error("Question count must be between {min} and {max}, got {value}")]
    QuestionCountOutOfRange { value: i64, min: u8, max: u8 },

    #[error("Invalid question count: {0}")]
    InvalidQuestionCount(String),

    #[error("Invalid navigation address: {0}")]
    InvalidRoute(String),

    #[error("Cannot {action} while {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: &'static str,
    },
}

impl DomainError {
    /// Check if this error was caused by driving the session out of order
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, DomainError::InvalidTransition { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_error_display() {
        let error = DomainError::InvalidTransition {
            action: "submit an answer",
            phase: "loading_questions",
        };
        assert_eq!(
            error.to_string(),
            "Cannot submit an answer while loading_questions"
        );
        assert!(error.is_invalid_transition());
    }

    #[test]
    fn test_range_error_display() {
        let error = DomainError::QuestionCountOutOfRange {
            value: 51,
            min: 1,
            max: 50,
        };
        assert_eq!(
            error.to_string(),
            "Question count must be between 1 and 50, got 51"
        );
        assert!(!error.is_invalid_transition());
    }
}
