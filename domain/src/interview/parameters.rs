//! Session parameters value object

use crate::core::difficulty::Difficulty;
use crate::core::question_count::QuestionCount;
use crate::core::role::Role;
use serde::{Deserialize, Serialize};

/// Everything needed to start an interview session (Value Object)
///
/// Built once by the setup form and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionParameters {
    role: Role,
    difficulty: Difficulty,
    question_count: QuestionCount,
}

impl SessionParameters {
    pub fn new(role: Role, difficulty: Difficulty, question_count: QuestionCount) -> Self {
        Self {
            role,
            difficulty,
            question_count,
        }
    }

    /// Parameters for a role with Medium difficulty and 8 questions
    pub fn with_defaults(role: Role) -> Self {
        Self::new(role, Difficulty::default(), QuestionCount::default())
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn question_count(&self) -> QuestionCount {
        self.question_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_defaults() {
        let params = SessionParameters::with_defaults(Role::try_new("QA Engineer").unwrap());
        assert_eq!(params.role().as_str(), "QA Engineer");
        assert_eq!(params.difficulty(), Difficulty::Medium);
        assert_eq!(params.question_count().get(), 8);
    }
}
