pub mod config;
pub mod cookies;
pub mod models;
pub mod session;
pub mod storage;

mod memory;
pub use memory::{MemoryCookies, MemoryStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::{DocumentCookies, LocalStore};

pub use config::{ApiConfig, ClientConfig, NavigationConfig};
pub use cookies::CookieJar;
pub use models::Role;
pub use session::SessionStore;
pub use storage::KeyValueStore;
