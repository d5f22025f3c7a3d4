//! Key-value persistence used for session state.
//!
//! Mirrors the browser `localStorage` API: string keys, string values,
//! synchronous access, no transactions. Concurrent writers are
//! last-writer-wins.

/// Synchronous string key-value store.
///
/// Implementations are cheap handles; clones share the same backing storage.
pub trait KeyValueStore: Clone {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);

    /// Remove every key.
    fn clear(&self);

    /// Tell other listeners in the page that storage was modified.
    fn notify_changed(&self);
}
