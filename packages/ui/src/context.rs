//! Session context and hooks for the UI.

use api::ApiClient;
use dioxus::prelude::*;
use store::{ClientConfig, SessionStore};

use crate::session::SessionState;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformSessionStore = SessionStore<store::LocalStore, store::DocumentCookies>;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformSessionStore = SessionStore<store::MemoryStore, store::MemoryCookies>;

/// Create the platform-appropriate session store.
///
/// - **Web** (WASM + `web` feature): `localStorage` and `document.cookie`
/// - **Everything else**: in-memory, empty on every start
pub fn make_session_store() -> PlatformSessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStore::new(), store::DocumentCookies::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        SessionStore::new(store::MemoryStore::new(), store::MemoryCookies::new())
    }
}

/// Services and state shared by session-aware components.
#[derive(Clone)]
pub struct SessionContext {
    pub state: Signal<SessionState>,
    pub api: ApiClient,
    pub store: PlatformSessionStore,
    pub config: ClientConfig,
}

/// Get the session context, if a [`SessionProvider`] is mounted above.
pub fn use_session_context() -> Option<SessionContext> {
    try_use_context::<Option<SessionContext>>().flatten()
}

/// Get the current session snapshot signal.
pub fn use_session() -> Option<Signal<SessionState>> {
    use_session_context().map(|context| context.state)
}

/// Provider component that owns the session state.
/// Wrap your router with this component to enable the navbar.
#[component]
pub fn SessionProvider(config: ClientConfig, children: Element) -> Element {
    let state = use_signal(SessionState::default);

    let context = use_hook(|| match ApiClient::new(&config.api) {
        Ok(api) => Some(SessionContext {
            state,
            api,
            store: make_session_store(),
            config: config.clone(),
        }),
        Err(e) => {
            tracing::error!("Failed to create API client: {}", e);
            None
        }
    });

    use_context_provider(|| context);

    rsx! {
        {children}
    }
}
