//! Language preference configuration from TOML (`[i18n]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileI18nConfig {
    /// Where the active language is persisted
    /// (default: `$XDG_CONFIG_HOME/interview-practice/preferences.json`)
    pub preference_file: Option<String>,
}
