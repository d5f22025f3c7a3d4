//! # Wire models for the MultiCourse backend
//!
//! | Struct | Endpoint |
//! |--------|----------|
//! | [`UserProfile`] | `GET /api/users/get-user-by-token` |
//! | [`Balance`] | `GET /api/wallet/show-balance` |
//! | [`AdminWallet`] | `GET /api/wallet/show-wallet-admin` |
//!
//! The backend is loose about optional fields (missing, `null` or empty
//! strings all occur), so every field is optional and the helpers below
//! normalise them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use store::Role;

/// Profile returned for a bearer token.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl UserProfile {
    /// Parsed role; unknown role names are treated as absent.
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::parse)
    }

    /// Non-empty full name.
    pub fn fullname(&self) -> Option<&str> {
        self.fullname.as_deref().filter(|n| !n.trim().is_empty())
    }

    /// Non-empty avatar URL.
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref().filter(|a| !a.is_empty())
    }
}

/// Personal wallet balance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(default)]
    pub current_balance: Option<f64>,
}

impl Balance {
    pub fn amount(&self) -> f64 {
        self.current_balance.unwrap_or(0.0)
    }
}

/// Platform wallet aggregate visible to admins.
///
/// Only `current_balance` is interpreted; the remaining aggregate fields are
/// kept verbatim in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminWallet {
    #[serde(default)]
    pub current_balance: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AdminWallet {
    pub fn amount(&self) -> f64 {
        self.current_balance.unwrap_or(0.0)
    }
}
