//! Difficulty value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Difficulty level of the generated questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    /// Basic, foundational questions
    Low,
    /// In-depth and scenario-based questions
    #[default]
    Medium,
    /// Complex, challenging, multi-part questions
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Low, Difficulty::Medium, Difficulty::Hard];

    /// Canonical spelling used in prompts and navigation addresses
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Low => "Low",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Message catalog key for the localized label
    pub fn translation_key(&self) -> &'static str {
        match self {
            Difficulty::Low => "low",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Guidance given to the question generator for this level
    pub fn guidance(&self) -> &'static str {
        match self {
            Difficulty::Low => "ask basic, foundational questions",
            Difficulty::Medium => "ask more in-depth and scenario-based questions",
            Difficulty::Hard => "ask complex, challenging, and multi-part questions",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = DomainError;

    /// Case-insensitive; accepts "easy" and "difficult" as aliases
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "easy" => Ok(Difficulty::Low),
            "medium" | "mid" => Ok(Difficulty::Medium),
            "hard" | "difficult" => Ok(Difficulty::Hard),
            _ => Err(DomainError::InvalidDifficulty(s.to_string())),
        }
    }
}
