//! Interview defaults from TOML (`[interview]` section)

use interview_application::SessionDefaults;
use interview_domain::{ConfigIssue, ConfigIssueCode, Difficulty, QuestionCount};
use serde::{Deserialize, Serialize};

/// Raw interview configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInterviewConfig {
    /// Pre-selected difficulty ("low", "medium", "hard")
    pub difficulty: Option<String>,
    /// Pre-selected number of questions
    pub questions: Option<i64>,
    /// Role presets offered by the setup form
    pub presets: Option<Vec<String>>,
}

impl FileInterviewConfig {
    pub fn parse_difficulty(&self) -> (Difficulty, Vec<ConfigIssue>) {
        match self.difficulty.as_deref() {
            None => (Difficulty::default(), vec![]),
            Some(value) => match value.parse::<Difficulty>() {
                Ok(difficulty) => (difficulty, vec![]),
                Err(_) => (
                    Difficulty::default(),
                    vec![ConfigIssue::warning(
                        ConfigIssueCode::UnknownDifficulty,
                        format!(
                            "interview.difficulty: unknown value '{}', falling back to '{}'",
                            value,
                            Difficulty::default()
                        ),
                    )],
                ),
            },
        }
    }

    pub fn parse_questions(&self) -> (QuestionCount, Vec<ConfigIssue>) {
        match self.questions {
            None => (QuestionCount::default(), vec![]),
            Some(value) => match QuestionCount::new(value) {
                Ok(count) => (count, vec![]),
                Err(e) => (
                    QuestionCount::default(),
                    vec![ConfigIssue::warning(
                        ConfigIssueCode::QuestionCountOutOfRange,
                        format!(
                            "interview.questions: {}, falling back to {}",
                            e,
                            QuestionCount::default()
                        ),
                    )],
                ),
            },
        }
    }

    /// Configured presets without blank entries; `None` keeps the defaults
    pub fn parse_presets(&self) -> (Option<Vec<String>>, Vec<ConfigIssue>) {
        let Some(presets) = &self.presets else {
            return (None, vec![]);
        };

        let mut issues = Vec::new();
        let kept: Vec<String> = presets
            .iter()
            .filter_map(|p| {
                let trimmed = p.trim();
                if trimmed.is_empty() {
                    issues.push(ConfigIssue::warning(
                        ConfigIssueCode::EmptyPreset,
                        "interview.presets: ignoring empty role",
                    ));
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect();

        if kept.is_empty() {
            (None, issues)
        } else {
            (Some(kept), issues)
        }
    }

    /// Setup form defaults, with every invalid value replaced
    pub fn to_session_defaults(&self) -> (SessionDefaults, Vec<ConfigIssue>) {
        let mut defaults = SessionDefaults::default();
        let mut issues = Vec::new();

        let (difficulty, i) = self.parse_difficulty();
        defaults.difficulty = difficulty;
        issues.extend(i);

        let (count, i) = self.parse_questions();
        defaults.question_count = count;
        issues.extend(i);

        let (presets, i) = self.parse_presets();
        if let Some(presets) = presets {
            defaults.role_presets = presets;
        }
        issues.extend(i);

        (defaults, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_section_uses_defaults() {
        let (defaults, issues) = FileInterviewConfig::default().to_session_defaults();
        assert!(issues.is_empty());
        assert_eq!(defaults.difficulty, Difficulty::Medium);
        assert_eq!(defaults.question_count.get(), 8);
        assert_eq!(defaults.role_presets[0], "softwareEngineer");
    }

    #[test]
    fn test_valid_values() {
        let config = FileInterviewConfig {
            difficulty: Some("hard".to_string()),
            questions: Some(15),
            presets: Some(vec!["Data Analyst".to_string(), "DevOps".to_string()]),
        };
        let (defaults, issues) = config.to_session_defaults();
        assert!(issues.is_empty());
        assert_eq!(defaults.difficulty, Difficulty::Hard);
        assert_eq!(defaults.question_count.get(), 15);
        assert_eq!(defaults.role_presets, ["Data Analyst", "DevOps"]);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = FileInterviewConfig {
            difficulty: Some("extreme".to_string()),
            questions: Some(99),
            presets: Some(vec!["  ".to_string()]),
        };
        let (defaults, issues) = config.to_session_defaults();
        assert_eq!(defaults.difficulty, Difficulty::Medium);
        assert_eq!(defaults.question_count.get(), 8);
        assert_eq!(defaults.role_presets.len(), 3);

        let codes: Vec<_> = issues.iter().map(|i| i.code).collect();
        assert_eq!(
            codes,
            vec![
                ConfigIssueCode::UnknownDifficulty,
                ConfigIssueCode::QuestionCountOutOfRange,
                ConfigIssueCode::EmptyPreset,
            ]
        );
    }
}
