//! Message catalogs
//!
//! A catalog is a tree of string tables. Keys address leaves with dots:
//! `results.title` looks up `title` inside the `results` table.

use crate::i18n::language::Language;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
enum Entry {
    Text(String),
    Table(HashMap<String, Entry>),
}

/// Localized strings for one language
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    entries: HashMap<String, Entry>,
}

impl MessageCatalog {
    /// Resolve a (possibly dotted) key to its string
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut parts = key.split('.');
        let mut entry = self.entries.get(parts.next()?)?;
        for part in parts {
            match entry {
                Entry::Table(table) => entry = table.get(part)?,
                Entry::Text(_) => return None,
            }
        }
        match entry {
            Entry::Text(text) => Some(text),
            Entry::Table(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The catalogs of every loaded language
#[derive(Debug, Clone, Default)]
pub struct Translations {
    catalogs: HashMap<Language, MessageCatalog>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, language: Language, catalog: MessageCatalog) -> Self {
        self.catalogs.insert(language, catalog);
        self
    }

    pub fn insert(&mut self, language: Language, catalog: MessageCatalog) {
        self.catalogs.insert(language, catalog);
    }

    pub fn supports(&self, language: Language) -> bool {
        self.catalogs.contains_key(&language)
    }

    /// Translate `key` for `language`, falling back to the key itself
    pub fn translate<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        self.catalogs
            .get(&language)
            .and_then(|catalog| catalog.get(key))
            .unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(toml_str: &str) -> MessageCatalog {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_flat_and_dotted_keys() {
        let catalog = catalog(
            r#"
welcome = "Welcome"

[results]
title = "Interview Report"
"#,
        );
        assert_eq!(catalog.get("welcome"), Some("Welcome"));
        assert_eq!(catalog.get("results.title"), Some("Interview Report"));
        assert_eq!(catalog.get("results"), None);
        assert_eq!(catalog.get("welcome.extra"), None);
        assert_eq!(catalog.get("missing"), None);
    }

    #[test]
    fn test_translate_falls_back_to_key() {
        let translations =
            Translations::new().with_catalog(Language::En, catalog(r#"welcome = "Welcome""#));
        assert_eq!(translations.translate(Language::En, "welcome"), "Welcome");
        assert_eq!(
            translations.translate(Language::En, "nonexistent.key"),
            "nonexistent.key"
        );
        assert_eq!(translations.translate(Language::Hi, "welcome"), "welcome");
        assert_eq!(translations.translate(Language::En, "."), ".");
    }

    #[test]
    fn test_supports() {
        let translations = Translations::new().with_catalog(Language::Mr, MessageCatalog::default());
        assert!(translations.supports(Language::Mr));
        assert!(!translations.supports(Language::Hi));
    }
}
