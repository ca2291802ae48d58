//! Internationalization domain
//!
//! Supported languages and the message catalogs that back `t(key)`.

pub mod catalog;
pub mod language;

pub use catalog::{MessageCatalog, Translations};
pub use language::Language;
