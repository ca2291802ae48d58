//! Bundled message catalogs
//!
//! The English, Marathi and Hindi tables ship inside the binary as TOML.

use interview_domain::{Language, MessageCatalog, Translations};
use thiserror::Error;

const EN: &str = include_str!("../../locales/en.toml");
const MR: &str = include_str!("../../locales/mr.toml");
const HI: &str = include_str!("../../locales/hi.toml");

#[derive(Error, Debug)]
#[error("Invalid {language} message catalog: {source}")]
pub struct CatalogError {
    pub language: Language,
    #[source]
    pub source: toml::de::Error,
}

fn bundled_source(language: Language) -> &'static str {
    match language {
        Language::En => EN,
        Language::Mr => MR,
        Language::Hi => HI,
    }
}

/// Parse one bundled catalog
pub fn load_catalog(language: Language) -> Result<MessageCatalog, CatalogError> {
    toml::from_str(bundled_source(language)).map_err(|source| CatalogError { language, source })
}

/// Catalogs for every supported language
pub fn bundled_translations() -> Result<Translations, CatalogError> {
    let mut translations = Translations::new();
    for language in Language::ALL {
        translations.insert(language, load_catalog(language)?);
    }
    Ok(translations)
}
