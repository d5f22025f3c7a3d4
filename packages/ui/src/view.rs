//! Navbar view model: what to draw for a route and a session snapshot.

use store::{NavigationConfig, Role};

use crate::session::SessionState;

/// Links shown on the home route only.
pub const PRIMARY_LINKS: [(&str, &str); 4] = [
    ("Home", "/"),
    ("Courses", "/course-list"),
    ("Contact", "/contact"),
    ("About", "/about"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavStyle {
    /// Transparent bar laid over the home page hero.
    Overlay,
    Solid,
}

impl NavStyle {
    pub fn class(&self) -> &'static str {
        match self {
            NavStyle::Overlay => "navbar navbar--overlay",
            NavStyle::Solid => "navbar navbar--solid",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BalanceBadge {
    Admin { amount: f64 },
    Personal { amount: f64, top_up: bool },
}

impl BalanceBadge {
    pub fn class(&self) -> &'static str {
        match self {
            BalanceBadge::Admin { .. } => "navbar-balance navbar-balance--admin",
            BalanceBadge::Personal { .. } => "navbar-balance",
        }
    }

    pub fn label(&self) -> String {
        match self {
            BalanceBadge::Admin { amount } => format!("Admin Balance: {amount} VND"),
            BalanceBadge::Personal { amount, .. } => format!("Balance: {amount} VND"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavbarView {
    pub style: NavStyle,
    pub home_path: String,
    pub links: Vec<NavLink>,
    pub fullname: String,
    pub avatar_url: Option<String>,
    pub balance: Option<BalanceBadge>,
    /// Deposit route when the "Top Up" action is offered.
    pub top_up_path: Option<String>,
    pub show_logout: bool,
    pub error: Option<String>,
}

impl NavbarView {
    /// Returns `None` when the navbar is hidden on `path`.
    pub fn build(path: &str, state: &SessionState, nav: &NavigationConfig) -> Option<Self> {
        if nav.is_hidden(path) {
            return None;
        }

        let home = nav.is_home(path);
        let session = &state.session;

        let balance = match session.role {
            Some(Role::Admin) => Some(BalanceBadge::Admin {
                amount: state.wallet.admin_balance(),
            }),
            Some(role @ (Role::Student | Role::Tutor)) => Some(BalanceBadge::Personal {
                amount: state.wallet.balance,
                top_up: role == Role::Student,
            }),
            None => None,
        };
        let top_up_path = matches!(balance, Some(BalanceBadge::Personal { top_up: true, .. }))
            .then(|| nav.deposit_route.clone());

        Some(Self {
            style: if home { NavStyle::Overlay } else { NavStyle::Solid },
            home_path: nav.home_route.clone(),
            links: if home {
                PRIMARY_LINKS
                    .iter()
                    .map(|&(label, path)| NavLink {
                        label,
                        path: path.to_string(),
                    })
                    .collect()
            } else {
                Vec::new()
            },
            fullname: session.fullname.clone(),
            avatar_url: Some(session.avatar_url.clone()).filter(|a| !a.is_empty()),
            balance,
            top_up_path,
            show_logout: session.is_logged_in,
            error: state.error.clone(),
        })
    }
}
