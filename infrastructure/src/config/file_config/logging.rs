//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript path; transcripts are off when unset
    pub conversation_log: Option<String>,
    /// Also write operational logs to this file
    pub file: Option<String>,
}
