use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::cookies::CookieJar;
use crate::storage::KeyValueStore;

/// In-memory KeyValueStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    notifications: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of change notifications broadcast so far.
    pub fn notifications(&self) -> usize {
        self.notifications.load(Ordering::SeqCst)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }

    fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    fn notify_changed(&self) {
        self.notifications.fetch_add(1, Ordering::SeqCst);
    }
}

/// In-memory CookieJar. Cookies can be seeded to simulate a backend-issued session.
#[derive(Clone, Debug, Default)]
pub struct MemoryCookies {
    cookies: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryCookies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cookie(self, name: &str, value: &str) -> Self {
        self.cookies
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
        self
    }
}

impl CookieJar for MemoryCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.lock().unwrap().get(name).cloned()
    }

    fn remove(&self, name: &str) {
        self.cookies.lock().unwrap().remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("authToken").is_none());

        store.set("authToken", "abc");
        assert_eq!(store.get("authToken"), Some("abc".to_string()));

        store.set("authToken", "def");
        assert_eq!(store.get("authToken"), Some("def".to_string()));

        store.remove("authToken");
        assert!(store.get("authToken").is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("role", "Tutor");
        assert_eq!(other.get("role"), Some("Tutor".to_string()));

        other.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_notifications_counted() {
        let store = MemoryStore::new();
        assert_eq!(store.notifications(), 0);
        store.notify_changed();
        store.clone().notify_changed();
        assert_eq!(store.notifications(), 2);
    }

    #[test]
    fn test_memory_cookies() {
        let jar = MemoryCookies::new().with_cookie("Token", "xyz");
        assert_eq!(jar.get("Token"), Some("xyz".to_string()));
        jar.remove("Token");
        assert!(jar.get("Token").is_none());
    }
}
