//! Error types for the HTTP completion adapter

use interview_application::GatewayError;
use thiserror::Error;

/// Result type alias for HTTP adapter operations
pub type Result<T> = std::result::Result<T, HttpGatewayError>;

/// Errors that can occur when calling a chat completion endpoint
#[derive(Error, Debug)]
pub enum HttpGatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response contained no message content")]
    EmptyResponse,

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl From<HttpGatewayError> for GatewayError {
    fn from(error: HttpGatewayError) -> Self {
        match error {
            HttpGatewayError::Http(e) if e.is_timeout() => GatewayError::Timeout,
            HttpGatewayError::Http(e) if e.is_connect() => {
                GatewayError::ConnectionError(e.to_string())
            }
            HttpGatewayError::Api { status: 404, message } => {
                GatewayError::ModelNotAvailable(message)
            }
            HttpGatewayError::Serialization(e) => GatewayError::ParseError(e.to_string()),
            HttpGatewayError::EmptyResponse => {
                GatewayError::ParseError(HttpGatewayError::EmptyResponse.to_string())
            }
            other => GatewayError::RequestFailed(other.to_string()),
        }
    }
}
