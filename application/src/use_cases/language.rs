//! Language selection use case
//!
//! Owns the process-wide active language. Readers call [`LanguageService::t`]
//! or subscribe to changes through a `tokio::sync::watch` channel.

use crate::ports::preference_store::PreferenceStore;
use crate::ports::translate::Translate;
use interview_domain::{Language, Translations};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Active language plus the catalogs to translate with
pub struct LanguageService {
    translations: Arc<Translations>,
    store: Arc<dyn PreferenceStore>,
    active: watch::Sender<Language>,
}

impl LanguageService {
    /// Initialize from the persisted preference, falling back to English
    /// when nothing usable is stored.
    pub fn init(translations: Arc<Translations>, store: Arc<dyn PreferenceStore>) -> Self {
        let persisted = match store.load_language() {
            Ok(code) => code,
            Err(e) => {
                warn!("Could not load language preference: {}", e);
                None
            }
        };

        let language = persisted
            .as_deref()
            .and_then(Language::from_code)
            .filter(|l| translations.supports(*l))
            .unwrap_or_default();
        debug!("Active language: {}", language);

        let (active, _) = watch::channel(language);
        Self {
            translations,
            store,
            active,
        }
    }

    pub fn current(&self) -> Language {
        *self.active.borrow()
    }

    /// Languages with a loaded catalog
    pub fn available(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|l| self.translations.supports(*l))
            .collect()
    }

    /// Switch the active language.
    ///
    /// Unknown or unloaded codes are ignored and return `false`. Selecting
    /// the active language again is a no-op that still returns `true`.
    pub fn set_language(&self, code: &str) -> bool {
        let Some(language) = Language::from_code(code).filter(|l| self.translations.supports(*l))
        else {
            debug!("Ignoring unsupported language code {:?}", code);
            return false;
        };

        let changed = self.active.send_if_modified(|current| {
            if *current == language {
                false
            } else {
                *current = language;
                true
            }
        });

        if changed {
            info!("Language changed to {}", language);
            if let Err(e) = self.store.save_language(language.code()) {
                warn!("Could not persist language preference: {}", e);
            }
        }
        true
    }

    /// Receiver that observes every language change
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.active.subscribe()
    }
}

impl Translate for LanguageService {
    fn t(&self, key: &str) -> String {
        self.translations.translate(self.current(), key).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::preference_store::{MemoryPreferenceStore, PreferenceError};
    use interview_domain::MessageCatalog;

    fn catalog(entries: &[(&str, &str)]) -> MessageCatalog {
        let value = serde_json::Value::Object(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
                .collect(),
        );
        serde_json::from_value(value).unwrap()
    }

    fn translations() -> Arc<Translations> {
        Arc::new(
            Translations::new()
                .with_catalog(Language::En, catalog(&[("welcome", "Welcome")]))
                .with_catalog(Language::Hi, catalog(&[("welcome", "स्वागत है")])),
        )
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load_language(&self) -> Result<Option<String>, PreferenceError> {
            Err(PreferenceError::Read("disk on fire".to_string()))
        }

        fn save_language(&self, _code: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::Write("disk on fire".to_string()))
        }
    }

    #[test]
    fn test_defaults_to_english() {
        let service = LanguageService::init(translations(), Arc::new(MemoryPreferenceStore::new()));
        assert_eq!(service.current(), Language::En);
        assert_eq!(service.t("welcome"), "Welcome");
    }

    #[test]
    fn test_missing_key_returns_key() {
        let service = LanguageService::init(translations(), Arc::new(MemoryPreferenceStore::new()));
        assert_eq!(service.t("nonexistent.key"), "nonexistent.key");
    }

    #[test]
    fn test_init_from_persisted_preference() {
        let store = Arc::new(MemoryPreferenceStore::with_language("hi"));
        let service = LanguageService::init(translations(), store);
        assert_eq!(service.current(), Language::Hi);
        assert_eq!(service.t("welcome"), "स्वागत है");
    }

    #[test]
    fn test_init_ignores_unloaded_persisted_language() {
        let store = Arc::new(MemoryPreferenceStore::with_language("mr"));
        let service = LanguageService::init(translations(), store);
        assert_eq!(service.current(), Language::En);
    }

    #[test]
    fn test_init_survives_store_failure() {
        let service = LanguageService::init(translations(), Arc::new(BrokenStore));
        assert_eq!(service.current(), Language::En);
        assert!(service.set_language("hi"));
        assert_eq!(service.current(), Language::Hi);
    }

    #[test]
    fn test_set_language_persists_and_applies() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let service = LanguageService::init(translations(), store.clone());

        assert!(service.set_language("hi"));
        assert_eq!(service.t("welcome"), "स्वागत है");
        assert_eq!(store.load_language().unwrap().as_deref(), Some("hi"));
    }

    #[test]
    fn test_unknown_language_is_ignored() {
        let store = Arc::new(MemoryPreferenceStore::new());
        let service = LanguageService::init(translations(), store.clone());

        assert!(!service.set_language("fr"));
        assert!(!service.set_language("mr"));
        assert_eq!(service.current(), Language::En);
        assert!(store.load_language().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_subscribers_observe_changes() {
        let service = LanguageService::init(translations(), Arc::new(MemoryPreferenceStore::new()));
        let mut receiver = service.subscribe();

        assert!(service.set_language("hi"));
        receiver.changed().await.unwrap();
        assert_eq!(*receiver.borrow_and_update(), Language::Hi);
    }

    #[test]
    fn test_set_same_language_is_idempotent() {
        let service = LanguageService::init(translations(), Arc::new(MemoryPreferenceStore::new()));
        let receiver = service.subscribe();

        assert!(service.set_language("en"));
        assert!(!receiver.has_changed().unwrap());
        assert_eq!(service.current(), Language::En);
    }

    #[test]
    fn test_available_languages() {
        let service = LanguageService::init(translations(), Arc::new(MemoryPreferenceStore::new()));
        assert_eq!(service.available(), vec![Language::En, Language::Hi]);
    }
}
