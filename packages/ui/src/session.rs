//! # Session bootstrap and logout
//!
//! The navbar keeps one [`SessionState`] in a signal. It is only ever replaced
//! wholesale by the two transitions in this module, so the view never sees a
//! half-applied refresh.
//!
//! ## [`refresh_session`]
//!
//! Runs on every route change:
//!
//! 1. Restore the persisted avatar and role into the snapshot.
//! 2. Resolve the token (local storage, then the `Token` cookie).
//! 3. No token: logged out, plus a redirect to login when the route is protected.
//! 4. Token: logged in, then three concurrent fetches:
//!
//! | Fetch | Runs when | On failure |
//! |-------|-----------|------------|
//! | profile | always | token forgotten, session reset, error message, redirect to login |
//! | balance | persisted role is not `Admin` | logged, previous balance kept |
//! | admin wallet | persisted role is `Admin` | logged, previous wallet kept |
//!
//! The wallet choice uses the role persisted *before* this refresh. A role
//! change reported by the profile fetch only affects the next refresh.
//!
//! ## [`logout`]
//!
//! Notifies the backend (when a token exists), then wipes persisted state and
//! resets the snapshot. A failed notification leaves the session untouched
//! unless [`NavigationConfig::clear_session_on_logout_failure`] is set.

use api::{AdminWallet, ApiError, MarketplaceApi, UserProfile};
use store::{CookieJar, KeyValueStore, NavigationConfig, Role, SessionStore};

pub const DEFAULT_FULLNAME: &str = "User";
pub const DEFAULT_AVATAR_URL: &str =
    "https://www.gravatar.com/avatar/00000000000000000000000000000000?d=mp&f=y";
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired, please log in again.";
pub const LOGOUT_FAILED_MESSAGE: &str = "Logout failed!";

/// Identity shown by the navbar. The token itself stays in [`SessionStore`].
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub fullname: String,
    /// Empty until a profile or persisted avatar is known.
    pub avatar_url: String,
    pub role: Option<Role>,
    pub is_logged_in: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            fullname: DEFAULT_FULLNAME.to_string(),
            avatar_url: String::new(),
            role: None,
            is_logged_in: false,
        }
    }
}

/// Last fetched wallet figures. Never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WalletSnapshot {
    /// Personal balance (students and tutors).
    pub balance: f64,
    /// Platform aggregate (admins).
    pub admin: Option<AdminWallet>,
}

impl WalletSnapshot {
    pub fn admin_balance(&self) -> f64 {
        self.admin.as_ref().map(AdminWallet::amount).unwrap_or(0.0)
    }
}

/// Everything the navbar renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Session,
    pub wallet: WalletSnapshot,
    /// User-visible error, e.g. an expired session.
    pub error: Option<String>,
}

impl SessionState {
    /// Copy persisted avatar and role into the snapshot.
    pub fn restore_from<S: KeyValueStore, C: CookieJar>(&mut self, store: &SessionStore<S, C>) {
        if let Some(avatar) = store.avatar_url() {
            self.session.avatar_url = avatar;
        }
        if let Some(role) = store.role() {
            self.session.role = Some(role);
        }
    }
}

/// Result of [`refresh_session`].
#[derive(Clone, Debug, PartialEq)]
pub struct Refresh {
    pub state: SessionState,
    /// Route to navigate to once the refresh is applied.
    pub redirect: Option<String>,
}

/// Result of [`logout`].
#[derive(Debug)]
pub struct LogoutOutcome {
    pub state: SessionState,
    pub redirect: Option<String>,
    /// Set when the backend notification failed; the caller alerts the user.
    pub failure: Option<ApiError>,
}

/// Synchronise the session snapshot with the backend for `path`.
pub async fn refresh_session<A, S, C>(
    api: &A,
    store: &SessionStore<S, C>,
    path: &str,
    nav: &NavigationConfig,
    prior: &SessionState,
) -> Refresh
where
    A: MarketplaceApi,
    S: KeyValueStore,
    C: CookieJar,
{
    let mut state = prior.clone();
    state.restore_from(store);

    let Some(token) = store.resolve_token() else {
        state.session.is_logged_in = false;
        let redirect = nav
            .is_protected(path)
            .then(|| nav.login_route.clone());
        return Refresh { state, redirect };
    };

    state.session.is_logged_in = true;

    let admin = store.role().is_some_and(|role| role.is_admin());
    let (profile, balance, wallet) = futures::join!(
        api.user_by_token(&token),
        async {
            if admin {
                None
            } else {
                Some(api.show_balance(&token).await)
            }
        },
        async {
            if admin {
                Some(api.show_wallet_admin(&token).await)
            } else {
                None
            }
        },
    );

    let mut redirect = None;
    match profile {
        Ok(profile) => apply_profile(&mut state, store, &profile),
        Err(e) => {
            tracing::error!(status = ?e.status(), error = %e, "failed to load user profile");
            store.forget_token();
            state.session = Session::default();
            state.error = Some(SESSION_EXPIRED_MESSAGE.to_string());
            redirect = Some(nav.login_route.clone());
        }
    }

    match balance {
        Some(Ok(balance)) => state.wallet.balance = balance.amount(),
        Some(Err(e)) => tracing::error!(error = %e, "failed to load balance"),
        None => {}
    }

    match wallet {
        Some(Ok(wallet)) => state.wallet.admin = Some(wallet),
        Some(Err(e)) => tracing::error!(error = %e, "failed to load admin wallet"),
        None => {}
    }

    Refresh { state, redirect }
}

fn apply_profile<S: KeyValueStore, C: CookieJar>(
    state: &mut SessionState,
    store: &SessionStore<S, C>,
    profile: &UserProfile,
) {
    let role = profile.role();
    let avatar = match profile.avatar() {
        Some(url) => cache_busted(url, now_millis()),
        None => DEFAULT_AVATAR_URL.to_string(),
    };

    store.set_role(role);
    store.set_avatar_url(&avatar);

    state.session.fullname = profile.fullname().unwrap_or(DEFAULT_FULLNAME).to_string();
    state.session.role = role;
    state.session.avatar_url = avatar;
    state.error = None;
}

/// End the session locally and on the backend.
pub async fn logout<A, S, C>(
    api: &A,
    store: &SessionStore<S, C>,
    nav: &NavigationConfig,
    prior: &SessionState,
) -> LogoutOutcome
where
    A: MarketplaceApi,
    S: KeyValueStore,
    C: CookieJar,
{
    let mut failure = None;
    if let Some(token) = store.token() {
        if let Err(e) = api.logout(&token).await {
            tracing::error!(status = ?e.status(), error = %e, "logout request failed");
            if !nav.clear_session_on_logout_failure {
                return LogoutOutcome {
                    state: prior.clone(),
                    redirect: None,
                    failure: Some(e),
                };
            }
            failure = Some(e);
        }
    }

    store.clear();

    LogoutOutcome {
        state: SessionState::default(),
        redirect: Some(nav.login_route.clone()),
        failure,
    }
}

/// Append a timestamp query so browsers refetch a replaced avatar.
pub fn cache_busted(url: &str, millis: u64) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}{millis}")
}

#[cfg(target_arch = "wasm32")]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
