//! Preference persistence
//!
//! Provides [`FilePreferenceStore`], a small JSON file that implements the
//! [`PreferenceStore`](interview_application::PreferenceStore) port.

mod file_store;

pub use file_store::FilePreferenceStore;
