//! Question count value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of questions requested for a session, always within [1, 50]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct QuestionCount(u8);

impl QuestionCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 50;
    pub const DEFAULT: u8 = 8;

    /// Counts offered by the setup form before falling back to a custom value
    pub const PRESETS: [u8; 5] = [5, 8, 10, 15, 20];

    pub fn new(value: i64) -> Result<Self, DomainError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::QuestionCountOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Clamp any integer into the valid range
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn get(&self) -> usize {
        self.0 as usize
    }
}

impl Default for QuestionCount {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl std::fmt::Display for QuestionCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for QuestionCount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidQuestionCount(s.to_string()))?;
        Self::new(value)
    }
}

impl TryFrom<i64> for QuestionCount {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionCount> for u8 {
    fn from(count: QuestionCount) -> Self {
        count.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_eight() {
        assert_eq!(QuestionCount::default().get(), 8);
    }

    #[test]
    fn test_bounds() {
        assert!(QuestionCount::new(1).is_ok());
        assert!(QuestionCount::new(50).is_ok());
        assert!(QuestionCount::new(0).is_err());
        assert!(QuestionCount::new(51).is_err());
        assert!(QuestionCount::new(-3).is_err());
    }

    #[test]
    fn test_clamped() {
        assert_eq!(QuestionCount::clamped(0).get(), 1);
        assert_eq!(QuestionCount::clamped(500).get(), 50);
        assert_eq!(QuestionCount::clamped(12).get(), 12);
    }

    #[test]
    fn test_parse() {
        assert_eq!("15".parse::<QuestionCount>().unwrap().get(), 15);
        assert!(matches!(
            "ten".parse::<QuestionCount>(),
            Err(DomainError::InvalidQuestionCount(_))
        ));
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in QuestionCount::PRESETS {
            assert!(QuestionCount::new(preset as i64).is_ok());
        }
    }
}
