//! Chat completion gateway implementation.
//!
//! Provides [`OpenAiLlmGateway`] which implements [`LlmGateway`] by opening
//! stateless [`OpenAiSession`]s against a chat completion endpoint.

use crate::openai::error::{HttpGatewayError, Result};
use crate::openai::session::OpenAiSession;
use async_trait::async_trait;
use interview_application::{GatewayError, LlmGateway, LlmSession};
use interview_domain::Model;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Connection settings for a chat completion endpoint
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Base URL without the `/chat/completions` suffix
    pub base_url: String,
    /// Bearer token; local servers usually need none
    pub api_key: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    /// Per-request timeout enforced by the HTTP client
    pub timeout: Option<Duration>,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
            max_tokens: None,
            temperature: None,
            timeout: None,
        }
    }
}

impl OpenAiConfig {
    pub(crate) fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// LLM gateway for OpenAI-compatible servers.
pub struct OpenAiLlmGateway {
    client: reqwest::Client,
    config: Arc<OpenAiConfig>,
}

impl OpenAiLlmGateway {
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let base_url = config.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(HttpGatewayError::InvalidBaseUrl(config.base_url.clone()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        info!("Using chat completion endpoint {}", config.completions_url());
        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }
}

#[async_trait]
impl LlmGateway for OpenAiLlmGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> std::result::Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(OpenAiSession::new(
            self.client.clone(),
            Arc::clone(&self.config),
            model.clone(),
            system_prompt,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_http_base_url() {
        let config = OpenAiConfig {
            base_url: "ftp://example.com".to_string(),
            ..OpenAiConfig::default()
        };
        assert!(matches!(
            OpenAiLlmGateway::new(config),
            Err(HttpGatewayError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_completions_url_trims_slash() {
        let config = OpenAiConfig {
            base_url: "http://localhost:11434/v1/".to_string(),
            ..OpenAiConfig::default()
        };
        assert_eq!(
            config.completions_url(),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_creates_session_for_model() {
        let gateway = OpenAiLlmGateway::new(OpenAiConfig::default()).unwrap();
        let model = Model::new("gpt-4o");
        let session = gateway
            .create_session_with_system_prompt(&model, "You are terse.")
            .await
            .unwrap();
        assert_eq!(session.model(), &model);
    }
}
