//! Setup parameter builder
//!
//! Collects the difficulty and question count chosen on the setup screen and
//! turns a role submission into [`SessionParameters`].

use crate::core::difficulty::Difficulty;
use crate::core::error::DomainError;
use crate::core::question_count::QuestionCount;
use crate::core::role::Role;
use crate::interview::parameters::SessionParameters;
use crate::interview::route::encode_route;

/// Message catalog keys of the built-in role presets
pub const DEFAULT_ROLE_PRESETS: [&str; 3] = ["softwareEngineer", "itEngineer", "12thStudent"];

/// How the question count was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountChoice {
    /// One of [`QuestionCount::PRESETS`]
    Preset(QuestionCount),
    /// A free value within [1, 50]
    Custom(QuestionCount),
}

impl CountChoice {
    pub fn count(&self) -> QuestionCount {
        match self {
            CountChoice::Preset(count) | CountChoice::Custom(count) => *count,
        }
    }
}

impl Default for CountChoice {
    fn default() -> Self {
        CountChoice::Preset(QuestionCount::default())
    }
}

/// Current selections of the setup form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetupSelection {
    difficulty: Difficulty,
    count: CountChoice,
}

impl SetupSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_count(mut self, count: QuestionCount) -> Self {
        self.count = if QuestionCount::PRESETS.contains(&(count.get() as u8)) {
            CountChoice::Preset(count)
        } else {
            CountChoice::Custom(count)
        };
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn count(&self) -> CountChoice {
        self.count
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Pick one of the preset counts
    pub fn select_preset_count(&mut self, preset: u8) -> Result<(), DomainError> {
        if !QuestionCount::PRESETS.contains(&preset) {
            return Err(DomainError::InvalidQuestionCount(preset.to_string()));
        }
        self.count = CountChoice::Preset(QuestionCount::new(preset as i64)?);
        Ok(())
    }

    /// Enter a custom count; rejected values leave the selection unchanged
    pub fn set_custom_count(&mut self, value: i64) -> Result<(), DomainError> {
        self.count = CountChoice::Custom(QuestionCount::new(value)?);
        Ok(())
    }

    /// Submit a role from a preset tile or the free-text field.
    ///
    /// Returns `None` when the role trims to empty; the form stays as it is
    /// and no error is surfaced.
    pub fn submit_role(&self, role: &str) -> Option<SessionParameters> {
        let role = Role::try_new(role)?;
        Some(SessionParameters::new(
            role,
            self.difficulty,
            self.count.count(),
        ))
    }

    /// Submit a role and produce the navigation address of the new session
    pub fn submit_route(&self, role: &str) -> Option<String> {
        self.submit_role(role).map(|params| encode_route(&params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::route::decode_route;

    #[test]
    fn test_defaults() {
        let selection = SetupSelection::new();
        assert_eq!(selection.difficulty(), Difficulty::Medium);
        assert_eq!(selection.count().count().get(), 8);
        assert!(matches!(selection.count(), CountChoice::Preset(_)));
    }

    #[test]
    fn test_blank_role_is_inert() {
        let selection = SetupSelection::new();
        assert!(selection.submit_role("").is_none());
        assert!(selection.submit_role("   ").is_none());
        assert!(selection.submit_route("\t").is_none());
    }

    #[test]
    fn test_submit_role_uses_selection() {
        let mut selection = SetupSelection::new();
        selection.select_difficulty(Difficulty::Hard);
        selection.set_custom_count(12).unwrap();

        let params = selection.submit_role("  Civil Engineer ").unwrap();
        assert_eq!(params.role().as_str(), "Civil Engineer");
        assert_eq!(params.difficulty(), Difficulty::Hard);
        assert_eq!(params.question_count().get(), 12);
    }

    #[test]
    fn test_custom_count_out_of_range_keeps_previous() {
        let mut selection = SetupSelection::new();
        selection.select_preset_count(15).unwrap();
        assert!(selection.set_custom_count(51).is_err());
        assert!(selection.set_custom_count(0).is_err());
        assert_eq!(selection.count(), CountChoice::Preset(QuestionCount::new(15).unwrap()));
    }

    #[test]
    fn test_unknown_preset_rejected() {
        let mut selection = SetupSelection::new();
        assert!(selection.select_preset_count(7).is_err());
    }

    #[test]
    fn test_with_count_classifies_presets() {
        let preset = SetupSelection::new().with_count(QuestionCount::new(10).unwrap());
        assert!(matches!(preset.count(), CountChoice::Preset(_)));
        let custom = SetupSelection::new().with_count(QuestionCount::new(7).unwrap());
        assert!(matches!(custom.count(), CountChoice::Custom(_)));
    }

    #[test]
    fn test_submit_route_decodes_back() {
        let selection = SetupSelection::new().with_difficulty(Difficulty::Low);
        let route = selection.submit_route("Data Analyst").unwrap();
        let params = decode_route(&route).unwrap();
        assert_eq!(params.role().as_str(), "Data Analyst");
        assert_eq!(params.difficulty(), Difficulty::Low);
        assert_eq!(params.question_count().get(), 8);
    }
}
