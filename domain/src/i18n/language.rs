//! Language value object

use serde::{Deserialize, Serialize};

/// A supported display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Baseline language
    #[default]
    En,
    Mr,
    Hi,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Mr, Language::Hi];

    /// Two-letter code, as persisted
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Mr => "mr",
            Language::Hi => "hi",
        }
    }

    /// Name of the language in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Mr => "मराठी",
            Language::Hi => "हिन्दी",
        }
    }

    /// Look up a language by code; `None` for unsupported codes
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        Self::ALL.into_iter().find(|l| l.code() == code)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
