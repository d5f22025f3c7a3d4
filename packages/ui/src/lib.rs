//! This crate contains the session logic and navigation UI shared by the app.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod debounce;
pub use debounce::Debouncer;

pub mod session;
pub use session::{
    logout, refresh_session, LogoutOutcome, Refresh, Session, SessionState, WalletSnapshot,
};

pub mod view;
pub use view::{BalanceBadge, NavLink, NavStyle, NavbarView};

mod context;
pub use context::{
    make_session_store, use_session, use_session_context, PlatformSessionStore, SessionContext,
    SessionProvider,
};

mod navbar;
pub use navbar::Navbar;
