//! # Client configuration: `multicourse.toml`
//!
//! Defines the TOML configuration consumed by the navigation shell
//! (filename: [`ClientConfig::filename`] = `"multicourse.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://multicourse.onrender.com/"
//!
//! [navigation]
//! debounce_ms = 300
//! login_route = "/login"
//! home_route = "/"
//! deposit_route = "/deposit"
//! hidden_prefixes = ["/login", "/signup", "/uploadtutorcertificate"]
//! protected_routes = ["/userprofile", "/cart"]
//! clear_session_on_logout_failure = false
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. TOML (de)serialisation, build-time overrides and the canonical filename. |
//! | [`ApiConfig`] | Backend base URL. |
//! | [`NavigationConfig`] | Route sets and debounce delay used by the navbar. |
//!
//! Every field has a default, so a missing or empty file is equivalent to the
//! production configuration. The web app embeds its `multicourse.toml` at
//! build time and loads it with [`ClientConfig::from_file_contents`]; the
//! `MULTICOURSE_API_URL` build variable still wins over the file's base URL.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `multicourse.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Prefix for every request path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://multicourse.onrender.com/".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Navbar routing policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Trailing-edge debounce applied to every navigation.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_login_route")]
    pub login_route: String,
    #[serde(default = "default_home_route")]
    pub home_route: String,
    #[serde(default = "default_deposit_route")]
    pub deposit_route: String,
    /// The navbar is not rendered on routes starting with any of these.
    #[serde(default = "default_hidden_prefixes")]
    pub hidden_prefixes: Vec<String>,
    /// Routes that require a token; visiting them logged out redirects to login.
    #[serde(default = "default_protected_routes")]
    pub protected_routes: Vec<String>,
    /// Reset the local session even when the logout request fails.
    #[serde(default)]
    pub clear_session_on_logout_failure: bool,
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_login_route() -> String {
    "/login".to_string()
}

fn default_home_route() -> String {
    "/".to_string()
}

fn default_deposit_route() -> String {
    "/deposit".to_string()
}

fn default_hidden_prefixes() -> Vec<String> {
    ["/login", "/signup", "/uploadtutorcertificate"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_protected_routes() -> Vec<String> {
    ["/userprofile", "/cart"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            login_route: default_login_route(),
            home_route: default_home_route(),
            deposit_route: default_deposit_route(),
            hidden_prefixes: default_hidden_prefixes(),
            protected_routes: default_protected_routes(),
            clear_session_on_logout_failure: false,
        }
    }
}

impl NavigationConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Whether the navbar is suppressed on `path`.
    pub fn is_hidden(&self, path: &str) -> bool {
        self.hidden_prefixes.iter().any(|p| path.starts_with(p.as_str()))
    }

    /// Exact match against the protected set.
    pub fn is_protected(&self, path: &str) -> bool {
        self.protected_routes.iter().any(|p| p == path)
    }

    pub fn is_home(&self, path: &str) -> bool {
        path == self.home_route
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "multicourse.toml"
    }

    /// Default configuration with the `MULTICOURSE_API_URL` build-time override applied.
    pub fn from_build_env() -> Self {
        Self::default().with_base_url_override(option_env!("MULTICOURSE_API_URL"))
    }

    /// Parse the contents of a config file and apply the build-time override.
    pub fn from_file_contents(text: &str) -> Result<Self, toml::de::Error> {
        Ok(Self::from_toml(text)?.with_base_url_override(option_env!("MULTICOURSE_API_URL")))
    }

    /// Builder method to replace the base URL when an override is present.
    pub fn with_base_url_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "https://multicourse.onrender.com/");
        assert_eq!(config.navigation.debounce(), Duration::from_millis(300));
        assert!(!config.navigation.clear_session_on_logout_failure);
    }

    #[test]
    fn test_partial_sections() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:5000/"

            [navigation]
            debounce_ms = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000/");
        assert_eq!(config.navigation.debounce_ms, 50);
        assert_eq!(config.navigation.login_route, "/login");
        assert_eq!(config.navigation.protected_routes, vec!["/userprofile", "/cart"]);
    }

    #[test]
    fn test_file_contents_loader() {
        let config = ClientConfig::from_file_contents(
            r#"
            [navigation]
            debounce_ms = 120
            protected_routes = ["/userprofile", "/cart", "/deposit"]
            clear_session_on_logout_failure = true
            "#,
        )
        .unwrap();
        assert_eq!(config.navigation.debounce(), Duration::from_millis(120));
        assert!(config.navigation.is_protected("/deposit"));
        assert!(config.navigation.clear_session_on_logout_failure);
        assert_eq!(
            config.api.base_url,
            option_env!("MULTICOURSE_API_URL")
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .unwrap_or("https://multicourse.onrender.com/")
        );

        assert!(ClientConfig::from_file_contents("[navigation]\ndebounce_ms = \"soon\"").is_err());
    }

    #[test]
    fn test_base_url_override() {
        let config = ClientConfig::default().with_base_url_override(Some("http://api.test/"));
        assert_eq!(config.api.base_url, "http://api.test/");

        let config = ClientConfig::default().with_base_url_override(Some("  "));
        assert_eq!(config.api.base_url, default_base_url());

        let config = ClientConfig::default().with_base_url_override(None);
        assert_eq!(config.api.base_url, default_base_url());
    }

    #[test]
    fn test_route_policy() {
        let nav = NavigationConfig::default();

        assert!(nav.is_hidden("/login"));
        assert!(nav.is_hidden("/signup/step-2"));
        assert!(nav.is_hidden("/uploadtutorcertificate"));
        assert!(!nav.is_hidden("/"));
        assert!(!nav.is_hidden("/course-list"));

        assert!(nav.is_protected("/cart"));
        assert!(nav.is_protected("/userprofile"));
        assert!(!nav.is_protected("/cart/items"));
        assert!(!nav.is_protected("/"));

        assert!(nav.is_home("/"));
        assert!(!nav.is_home("/about"));
    }
}
