//! # Domain models shared by every package
//!
//! [`Role`] is the marketplace role attached to an account. It decides which
//! wallet endpoint is queried and which balance widget the navbar renders:
//!
//! | Role | Wallet endpoint | Navbar |
//! |------|-----------------|--------|
//! | `Admin` | `/api/wallet/show-wallet-admin` | "Admin Balance" |
//! | `Student` | `/api/wallet/show-balance` | "Balance" + "Top Up" |
//! | `Tutor` | `/api/wallet/show-balance` | "Balance" |
//!
//! Roles travel as their exact capitalised names both on the wire and in
//! persisted storage. Anything else parses to `None`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role as reported by the profile endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Student,
    Tutor,
}

impl Role {
    /// Parse the wire/storage representation. Unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Admin" => Some(Role::Admin),
            "Student" => Some(Role::Student),
            "Tutor" => Some(Role::Tutor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Student => "Student",
            Role::Tutor => "Tutor",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_roles() {
        assert_eq!(Role::parse("Admin"), Some(Role::Admin));
        assert_eq!(Role::parse("Student"), Some(Role::Student));
        assert_eq!(Role::parse("Tutor"), Some(Role::Tutor));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("undefined"), None);
    }

    #[test]
    fn test_display_matches_storage_form() {
        for role in [Role::Admin, Role::Student, Role::Tutor] {
            assert_eq!(Role::parse(&role.to_string()), Some(role));
        }
    }
}
