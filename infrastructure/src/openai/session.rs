//! Chat completion session.
//!
//! Provides [`OpenAiSession`] which implements [`LlmSession`]. Each `send`
//! is an independent request carrying the system prompt and one user
//! message; no history is kept between calls.

use crate::openai::error::{HttpGatewayError, Result};
use crate::openai::gateway::OpenAiConfig;
use crate::openai::protocol::{ChatMessage, ChatRequest, ChatResponse, extract_api_error};
use async_trait::async_trait;
use interview_application::{GatewayError, LlmSession};
use interview_domain::Model;
use std::sync::Arc;
use tracing::debug;

pub struct OpenAiSession {
    client: reqwest::Client,
    config: Arc<OpenAiConfig>,
    model: Model,
    system_prompt: String,
}

impl OpenAiSession {
    pub fn new(
        client: reqwest::Client,
        config: Arc<OpenAiConfig>,
        model: Model,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            client,
            config,
            model,
            system_prompt: system_prompt.into(),
        }
    }

    /// Sends a prompt and returns the assistant message text.
    pub async fn ask(&self, content: &str) -> Result<String> {
        let body = ChatRequest {
            model: self.model.as_str(),
            messages: vec![
                ChatMessage::system(&self.system_prompt),
                ChatMessage::user(content),
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!("Sending {} bytes to {}", content.len(), self.model);
        let mut request = self.client.post(self.config.completions_url()).json(&body);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        let payload = response.text().await?;
        if !status.is_success() {
            return Err(HttpGatewayError::Api {
                status: status.as_u16(),
                message: extract_api_error(&payload),
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&payload)?;
        parsed.into_text().ok_or(HttpGatewayError::EmptyResponse)
    }
}

#[async_trait]
impl LlmSession for OpenAiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> std::result::Result<String, GatewayError> {
        self.ask(content).await.map_err(GatewayError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response and hand back the raw request.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/v1", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                received.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&received).to_string();
                if let Some(header_end) = text.find("\r\n\r\n") {
                    let content_length = text[..header_end]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if received.len() >= header_end + 4 + content_length {
                        break;
                    }
                }
                if n == 0 {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&received).to_string()
        });

        (base_url, handle)
    }

    fn session(base_url: String, api_key: Option<&str>) -> OpenAiSession {
        let config = OpenAiConfig {
            base_url,
            api_key: api_key.map(str::to_string),
            ..OpenAiConfig::default()
        };
        OpenAiSession::new(
            reqwest::Client::new(),
            Arc::new(config),
            Model::new("test-model"),
            "You are an interviewer.",
        )
    }

    #[tokio::test]
    async fn test_send_returns_message_content() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"choices":[{"message":{"role":"assistant","content":"{\"questions\":[\"Q?\"]}"}}]}"#,
        )
        .await;

        let reply = session(base_url, Some("sk-test")).send("Generate").await.unwrap();
        assert_eq!(reply, r#"{"questions":["Q?"]}"#);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /v1/chat/completions"));
        assert!(request.to_lowercase().contains("authorization: bearer sk-test"));
        assert!(request.contains("\"model\":\"test-model\""));
        assert!(request.contains("You are an interviewer."));
    }

    #[tokio::test]
    async fn test_api_error_status() {
        let (base_url, server) = serve_once(
            "401 Unauthorized",
            r#"{"error":{"message":"Incorrect API key provided"}}"#,
        )
        .await;

        let err = session(base_url, None).ask("Generate").await.unwrap_err();
        match err {
            HttpGatewayError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Incorrect API key provided");
            }
            other => panic!("Expected API error, got {:?}", other),
        }

        let request = server.await.unwrap();
        assert!(!request.to_lowercase().contains("authorization:"));
    }

    #[tokio::test]
    async fn test_empty_choices() {
        let (base_url, _server) = serve_once("200 OK", r#"{"choices":[]}"#).await;
        let err = session(base_url, None).send("Generate").await.unwrap_err();
        assert!(matches!(err, GatewayError::ParseError(_)));
    }
}
