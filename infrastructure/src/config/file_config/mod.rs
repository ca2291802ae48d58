//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod i18n;
mod interview;
mod logging;
mod output;
mod provider;
mod repl;

pub use i18n::FileI18nConfig;
pub use interview::FileInterviewConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use provider::FileProviderConfig;
pub use repl::FileReplConfig;

use interview_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration that cannot be used at all
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("provider.base_url must start with http:// or https:// (got '{0}')")]
    InvalidBaseUrl(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion provider settings
    pub provider: FileProviderConfig,
    /// Setup form defaults
    pub interview: FileInterviewConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Transcript and log file settings
    pub logging: FileLoggingConfig,
    /// Language preference settings
    pub i18n: FileI18nConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Every reported value falls back to its default when used.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.provider.parse_model().1);
        issues.extend(self.provider.parse_timeout().1);
        issues.extend(self.interview.to_session_defaults().1);

        issues
    }

    /// Checks that make the configuration unusable
    pub fn validate_strict(&self) -> Result<(), ConfigValidationError> {
        let base_url = self.provider.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigValidationError::InvalidBaseUrl(
                self.provider.base_url.clone(),
            ));
        }
        Ok(())
    }
}
