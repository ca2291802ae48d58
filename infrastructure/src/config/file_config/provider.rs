//! Completion provider configuration from TOML (`[provider]` section)

use interview_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};

/// Raw provider configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL of an OpenAI-compatible API.
    pub base_url: String,
    /// Model used for questions and feedback.
    pub model: String,
    /// Environment variable holding the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Max tokens per response.
    pub max_tokens: Option<u32>,
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Timeout in seconds for each completion request.
    pub timeout_seconds: Option<u64>,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: Model::DEFAULT.to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            max_tokens: None,
            temperature: None,
            timeout_seconds: Some(120),
        }
    }
}

impl FileProviderConfig {
    /// Configured model, or the default when blank
    pub fn parse_model(&self) -> (Model, Vec<ConfigIssue>) {
        let name = self.model.trim();
        if name.is_empty() {
            (
                Model::default(),
                vec![ConfigIssue::warning(
                    ConfigIssueCode::EmptyModel,
                    format!("provider.model is empty, using '{}'", Model::DEFAULT),
                )],
            )
        } else {
            (Model::new(name), vec![])
        }
    }

    /// Request timeout; zero disables the timeout
    pub fn parse_timeout(&self) -> (Option<u64>, Vec<ConfigIssue>) {
        match self.timeout_seconds {
            Some(0) => (
                None,
                vec![ConfigIssue::warning(
                    ConfigIssueCode::ZeroTimeout,
                    "provider.timeout_seconds is 0, requests will not time out",
                )],
            ),
            other => (other, vec![]),
        }
    }

    /// API key from `api_key`, else from the `api_key_env` variable
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileProviderConfig::default();
        assert_eq!(config.parse_model().0, Model::default());
        let (timeout, issues) = config.parse_timeout();
        assert_eq!(timeout, Some(120));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_blank_model_falls_back() {
        let config = FileProviderConfig {
            model: "  ".to_string(),
            ..FileProviderConfig::default()
        };
        let (model, issues) = config.parse_model();
        assert_eq!(model, Model::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::EmptyModel);
    }

    #[test]
    fn test_zero_timeout_disables() {
        let config = FileProviderConfig {
            timeout_seconds: Some(0),
            ..FileProviderConfig::default()
        };
        let (timeout, issues) = config.parse_timeout();
        assert!(timeout.is_none());
        assert_eq!(issues[0].code, ConfigIssueCode::ZeroTimeout);
    }

    #[test]
    fn test_direct_api_key_wins() {
        let config = FileProviderConfig {
            api_key: Some("sk-direct".to_string()),
            api_key_env: "INTERVIEW_TEST_UNSET_KEY_VAR".to_string(),
            ..FileProviderConfig::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("sk-direct"));
    }

    #[test]
    fn test_missing_api_key() {
        let config = FileProviderConfig {
            api_key: None,
            api_key_env: "INTERVIEW_TEST_UNSET_KEY_VAR".to_string(),
            ..FileProviderConfig::default()
        };
        assert!(config.resolve_api_key().is_none());
    }
}
