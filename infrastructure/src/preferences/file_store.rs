//! JSON-file preference store

use interview_application::{PreferenceError, PreferenceStore};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct Preferences {
    language: Option<String>,
}

/// Stores preferences as `{"language": "<code>"}` in a JSON file.
///
/// A missing file means "no preference"; it is created on first save.
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$XDG_CONFIG_HOME/interview-practice/preferences.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("interview-practice").join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Preferences, PreferenceError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(Preferences::default()),
            Ok(content) => serde_json::from_str(&content)
                .map_err(|e| PreferenceError::Read(format!("{}: {}", self.path.display(), e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Preferences::default()),
            Err(e) => Err(PreferenceError::Read(format!("{}: {}", self.path.display(), e))),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load_language(&self) -> Result<Option<String>, PreferenceError> {
        Ok(self.read()?.language)
    }

    fn save_language(&self, code: &str) -> Result<(), PreferenceError> {
        let write_error = |e: &dyn std::fmt::Display| {
            PreferenceError::Write(format!("{}: {}", self.path.display(), e))
        };

        let mut preferences = self.read().unwrap_or_default();
        preferences.language = Some(code.to_string());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| write_error(&e))?;
        }
        let json = serde_json::to_string_pretty(&preferences).map_err(|e| write_error(&e))?;
        std::fs::write(&self.path, json).map_err(|e| write_error(&e))?;

        debug!("Saved language preference {} to {}", code, self.path.display());
        Ok(())
    }
}
