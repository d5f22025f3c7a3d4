//! # Typed session persistence
//!
//! [`SessionStore`] wraps a [`KeyValueStore`] and a [`CookieJar`] and exposes
//! the handful of session fields the client persists, instead of letting
//! callers read raw keys.
//!
//! | Key / cookie | Accessors | Written by |
//! |--------------|-----------|------------|
//! | `authToken` (storage) | [`token`](SessionStore::token), [`resolve_token`](SessionStore::resolve_token), [`forget_token`](SessionStore::forget_token) | login page, cookie mirroring |
//! | `role` (storage) | [`role`](SessionStore::role), [`set_role`](SessionStore::set_role) | profile refresh |
//! | `avatarUrl` (storage) | [`avatar_url`](SessionStore::avatar_url), [`set_avatar_url`](SessionStore::set_avatar_url) | profile refresh |
//! | `Token` (cookie) | read by [`resolve_token`](SessionStore::resolve_token), cleared by [`clear`](SessionStore::clear) | backend only |
//!
//! Values are stored without any schema version.

use crate::cookies::CookieJar;
use crate::models::Role;
use crate::storage::KeyValueStore;

pub const TOKEN_KEY: &str = "authToken";
pub const ROLE_KEY: &str = "role";
pub const AVATAR_KEY: &str = "avatarUrl";
pub const TOKEN_COOKIE: &str = "Token";

/// Typed accessors over persisted session state.
#[derive(Clone, Debug)]
pub struct SessionStore<S, C> {
    storage: S,
    cookies: C,
}

impl<S: KeyValueStore, C: CookieJar> SessionStore<S, C> {
    pub fn new(storage: S, cookies: C) -> Self {
        Self { storage, cookies }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn cookies(&self) -> &C {
        &self.cookies
    }

    /// The persisted token, without consulting cookies.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.storage.set(TOKEN_KEY, token);
    }

    /// Find the auth token: local storage first, then the `Token` cookie.
    ///
    /// A token found only in the cookie is copied into local storage.
    pub fn resolve_token(&self) -> Option<String> {
        if let Some(token) = self.token() {
            return Some(token);
        }
        let token = self.cookies.get(TOKEN_COOKIE)?;
        self.set_token(&token);
        Some(token)
    }

    pub fn forget_token(&self) {
        self.storage.remove(TOKEN_KEY);
    }

    /// Last role written by a profile refresh. May be stale.
    pub fn role(&self) -> Option<Role> {
        self.storage.get(ROLE_KEY).as_deref().and_then(Role::parse)
    }

    pub fn set_role(&self, role: Option<Role>) {
        match role {
            Some(role) => self.storage.set(ROLE_KEY, role.as_str()),
            None => self.storage.remove(ROLE_KEY),
        }
    }

    pub fn avatar_url(&self) -> Option<String> {
        self.storage.get(AVATAR_KEY).filter(|a| !a.is_empty())
    }

    pub fn set_avatar_url(&self, url: &str) {
        self.storage.set(AVATAR_KEY, url);
    }

    /// Wipe all persisted state, expire the session cookie and notify listeners.
    pub fn clear(&self) {
        self.storage.clear();
        self.cookies.remove(TOKEN_COOKIE);
        self.storage.notify_changed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryCookies, MemoryStore};

    fn session(cookies: MemoryCookies) -> SessionStore<MemoryStore, MemoryCookies> {
        SessionStore::new(MemoryStore::new(), cookies)
    }

    #[test]
    fn test_resolve_prefers_local_token() {
        let s = session(MemoryCookies::new().with_cookie(TOKEN_COOKIE, "from-cookie"));
        s.set_token("from-storage");
        assert_eq!(s.resolve_token(), Some("from-storage".to_string()));
    }

    #[test]
    fn test_resolve_mirrors_cookie_token() {
        let s = session(MemoryCookies::new().with_cookie(TOKEN_COOKIE, "from-cookie"));
        assert!(s.token().is_none());

        assert_eq!(s.resolve_token(), Some("from-cookie".to_string()));
        assert_eq!(s.token(), Some("from-cookie".to_string()));
    }

    #[test]
    fn test_resolve_without_any_token() {
        let s = session(MemoryCookies::new());
        assert!(s.resolve_token().is_none());
        assert!(s.storage().get(TOKEN_KEY).is_none());
    }

    #[test]
    fn test_empty_token_is_absent() {
        let s = session(MemoryCookies::new());
        s.set_token("");
        assert!(s.resolve_token().is_none());
    }

    #[test]
    fn test_role_roundtrip() {
        let s = session(MemoryCookies::new());
        assert!(s.role().is_none());

        s.set_role(Some(Role::Admin));
        assert_eq!(s.role(), Some(Role::Admin));
        assert_eq!(s.storage().get(ROLE_KEY), Some("Admin".to_string()));

        s.set_role(None);
        assert!(s.role().is_none());
    }

    #[test]
    fn test_unknown_persisted_role() {
        let s = session(MemoryCookies::new());
        s.storage().set(ROLE_KEY, "undefined");
        assert!(s.role().is_none());
    }

    #[test]
    fn test_clear_wipes_everything() {
        let s = session(MemoryCookies::new().with_cookie(TOKEN_COOKIE, "c"));
        s.set_token("t");
        s.set_role(Some(Role::Student));
        s.set_avatar_url("https://cdn/a.png");

        s.clear();

        assert!(s.token().is_none());
        assert!(s.role().is_none());
        assert!(s.avatar_url().is_none());
        assert!(s.cookies().get(TOKEN_COOKIE).is_none());
        assert_eq!(s.storage().notifications(), 1);
        assert!(s.resolve_token().is_none());
    }
}
