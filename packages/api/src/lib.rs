//! # API crate: HTTP client for the MultiCourse backend
//!
//! Everything the navigation shell needs from the REST backend lives here: a
//! configured HTTP client, the wire models, and a small trait the session
//! logic is written against so it can run against a fake in tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base-URL prefixing, JSON content type, credentialed requests |
//! | [`error`] | [`ApiError`]: status/body failures, transport and decode errors |
//! | [`models`] | Response bodies ([`UserProfile`], [`Balance`], [`AdminWallet`]) |
//!
//! ## Endpoints
//!
//! All calls carry `Authorization: Bearer <token>`.
//!
//! | Method | Path | [`MarketplaceApi`] method |
//! |--------|------|---------------------------|
//! | `GET` | `/api/users/get-user-by-token` | [`user_by_token`](MarketplaceApi::user_by_token) |
//! | `GET` | `/api/wallet/show-balance` | [`show_balance`](MarketplaceApi::show_balance) |
//! | `GET` | `/api/wallet/show-wallet-admin` | [`show_wallet_admin`](MarketplaceApi::show_wallet_admin) |
//! | `POST` | `/api/users/logout` | [`logout`](MarketplaceApi::logout) |
//!
//! There are no retries and no timeouts; every failure is returned to the caller.

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{AdminWallet, Balance, UserProfile};

pub use store::{ApiConfig, Role};

pub const USER_BY_TOKEN_PATH: &str = "/api/users/get-user-by-token";
pub const SHOW_BALANCE_PATH: &str = "/api/wallet/show-balance";
pub const SHOW_WALLET_ADMIN_PATH: &str = "/api/wallet/show-wallet-admin";
pub const LOGOUT_PATH: &str = "/api/users/logout";

/// Backend operations used by the navigation shell.
pub trait MarketplaceApi {
    /// Profile of the account owning `token`.
    fn user_by_token(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<UserProfile, ApiError>>;
    /// Personal wallet balance (students and tutors).
    fn show_balance(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<Balance, ApiError>>;
    /// Platform wallet aggregate (admins).
    fn show_wallet_admin(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<AdminWallet, ApiError>>;
    /// Tell the backend the session is over.
    fn logout(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
}

impl MarketplaceApi for ApiClient {
    async fn user_by_token(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.send_json(self.get(USER_BY_TOKEN_PATH).bearer_auth(token))
            .await
    }

    async fn show_balance(&self, token: &str) -> Result<Balance, ApiError> {
        self.send_json(self.get(SHOW_BALANCE_PATH).bearer_auth(token))
            .await
    }

    async fn show_wallet_admin(&self, token: &str) -> Result<AdminWallet, ApiError> {
        self.send_json(self.get(SHOW_WALLET_ADMIN_PATH).bearer_auth(token))
            .await
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        let request = self
            .post(LOGOUT_PATH)
            .bearer_auth(token)
            .json(&serde_json::json!({}));
        self.send(request).await.map(|_| ())
    }
}
