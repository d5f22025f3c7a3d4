//! # Browser-backed persistence: `localStorage` and `document.cookie`
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. It is a
//! zero-size handle that looks up `window.localStorage` on every call, so it
//! is `Clone` and never holds a JS reference across awaits.
//!
//! [`DocumentCookies`] reads and expires cookies through `document.cookie`.
//!
//! ## Error handling
//!
//! Storage can be unavailable (private browsing, disabled cookies, quota).
//! All methods swallow those errors: reads return `None`, writes do nothing.
//! The server stays the source of truth for the session, so a broken store
//! degrades to "logged out" rather than crashing the page.

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlDocument, Storage};

use crate::cookies::{find_cookie, CookieJar};
use crate::storage::KeyValueStore;

/// `window.localStorage` backed store.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.clear();
        }
    }

    /// Dispatch a plain `storage` event on `window`.
    ///
    /// Browsers only fire `storage` for *other* tabs, so same-page listeners
    /// need this synthetic one.
    fn notify_changed(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Ok(event) = Event::new("storage") {
            let _ = window.dispatch_event(&event);
        }
    }
}

/// `document.cookie` backed jar.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookies;

impl DocumentCookies {
    pub fn new() -> Self {
        Self
    }

    fn document() -> Option<HtmlDocument> {
        web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
    }
}

impl CookieJar for DocumentCookies {
    fn get(&self, name: &str) -> Option<String> {
        let header = Self::document()?.cookie().ok()?;
        find_cookie(&header, name)
    }

    fn remove(&self, name: &str) {
        if let Some(document) = Self::document() {
            let expired = format!("{name}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/");
            let _ = document.set_cookie(&expired);
        }
    }
}
