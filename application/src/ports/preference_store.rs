//! Preference persistence port

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("Failed to read preferences: {0}")]
    Read(String),

    #[error("Failed to write preferences: {0}")]
    Write(String),
}

/// Process-wide user preferences that outlive a session.
///
/// Only the active language code is stored.
pub trait PreferenceStore: Send + Sync {
    /// The persisted language code, if any
    fn load_language(&self) -> Result<Option<String>, PreferenceError>;

    fn save_language(&self, code: &str) -> Result<(), PreferenceError>;
}

/// Keeps preferences in memory only
#[derive(Default)]
pub struct MemoryPreferenceStore {
    language: std::sync::Mutex<Option<String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(code: impl Into<String>) -> Self {
        Self {
            language: std::sync::Mutex::new(Some(code.into())),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load_language(&self) -> Result<Option<String>, PreferenceError> {
        self.language
            .lock()
            .map(|guard| guard.clone())
            .map_err(|e| PreferenceError::Read(e.to_string()))
    }

    fn save_language(&self, code: &str) -> Result<(), PreferenceError> {
        let mut guard = self
            .language
            .lock()
            .map_err(|e| PreferenceError::Write(e.to_string()))?;
        *guard = Some(code.to_string());
        Ok(())
    }
}
