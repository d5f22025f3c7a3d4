use dioxus::prelude::*;

use crate::context::use_session_context;
use crate::debounce::Debouncer;
use crate::icons::{FaRightFromBracket, FaWallet};
use crate::session::{logout, refresh_session, LOGOUT_FAILED_MESSAGE};
use crate::view::NavbarView;
use crate::Icon;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Top navigation bar.
///
/// `path` is the current route; every change triggers a session refresh.
/// Navigation requests are debounced and handed to `on_navigate`.
#[component]
pub fn Navbar(path: String, on_navigate: EventHandler<String>) -> Element {
    let Some(context) = use_session_context() else {
        return rsx! {};
    };
    let mut state = context.state;

    let debouncer = use_hook(|| Debouncer::<String>::new(context.config.navigation.debounce()));

    // Drop any pending navigation when the navbar goes away
    use_drop({
        let debouncer = debouncer.clone();
        move || debouncer.cancel()
    });

    let navigate = use_callback({
        let debouncer = debouncer.clone();
        move |target: String| {
            let debouncer = debouncer.clone();
            spawn(async move {
                if let Some(target) = debouncer.call(target).await {
                    on_navigate.call(target);
                }
            });
        }
    });

    // Refresh the session on every route change
    let refresh_context = context.clone();
    let route = path.clone();
    use_effect(use_reactive!(|route| {
        let context = refresh_context.clone();
        state.write().restore_from(&context.store);
        spawn(async move {
            let prior = state.peek().clone();
            let refresh = refresh_session(
                &context.api,
                &context.store,
                &route,
                &context.config.navigation,
                &prior,
            )
            .await;
            state.set(refresh.state);
            if let Some(target) = refresh.redirect {
                navigate.call(target);
            }
        });
    }));

    let on_logout = {
        let context = context.clone();
        move |_| {
            let context = context.clone();
            async move {
                let prior = state.peek().clone();
                let outcome =
                    logout(&context.api, &context.store, &context.config.navigation, &prior).await;
                if outcome.failure.is_some() {
                    alert(LOGOUT_FAILED_MESSAGE);
                }
                state.set(outcome.state);
                if let Some(target) = outcome.redirect {
                    navigate.call(target);
                }
            }
        }
    };

    let Some(view) = NavbarView::build(&path, &state.read(), &context.config.navigation) else {
        return rsx! {};
    };

    rsx! {
        document::Stylesheet { href: NAVBAR_CSS }

        nav {
            class: view.style.class(),
            div {
                class: "navbar-inner",

                h1 {
                    class: "navbar-brand",
                    onclick: {
                        let home = view.home_path.clone();
                        move |_| navigate.call(home.clone())
                    },
                    "MultiCourse"
                }

                if !view.links.is_empty() {
                    div {
                        class: "navbar-links",
                        for link in view.links.iter() {
                            button {
                                key: "{link.path}",
                                class: "navbar-link",
                                onclick: {
                                    let path = link.path.clone();
                                    move |_| navigate.call(path.clone())
                                },
                                "{link.label}"
                            }
                        }
                    }
                }

                div {
                    class: "navbar-session",

                    if let Some(ref error) = view.error {
                        span { class: "navbar-error", "{error}" }
                    }

                    if let Some(ref avatar) = view.avatar_url {
                        img {
                            class: "navbar-avatar",
                            src: "{avatar}",
                            alt: "Avatar",
                        }
                    }
                    span { class: "navbar-name", "{view.fullname}" }

                    if let Some(ref badge) = view.balance {
                        div {
                            class: badge.class(),
                            Icon { icon: FaWallet, width: 14, height: 14 }
                            span { "{badge.label()}" }
                            if let Some(deposit) = view.top_up_path.clone() {
                                button {
                                    class: "navbar-top-up",
                                    onclick: move |_| navigate.call(deposit.clone()),
                                    "Top Up"
                                }
                            }
                        }
                    }

                    if view.show_logout {
                        button {
                            class: "navbar-logout",
                            onclick: on_logout,
                            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                            "Logout"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn alert(message: &str) {
    tracing::warn!("{}", message);
}
