//! Translation port

/// `t(key)`: the active language's string for `key`, or `key` itself
pub trait Translate: Send + Sync {
    fn t(&self, key: &str) -> String;
}
