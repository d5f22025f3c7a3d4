use dioxus::prelude::*;

use store::ClientConfig;
use ui::{Navbar, SessionProvider};
use views::{
    About, Cart, Contact, CourseList, Deposit, Home, Login, NotFound, Signup,
    UploadTutorCertificate, UserProfile,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/course-list")]
        CourseList {},
        #[route("/contact")]
        Contact {},
        #[route("/about")]
        About {},
        #[route("/userprofile")]
        UserProfile {},
        #[route("/cart")]
        Cart {},
        #[route("/deposit")]
        Deposit {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/uploadtutorcertificate")]
        UploadTutorCertificate {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_FILE: &str = include_str!("../multicourse.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Embedded `multicourse.toml`, or the defaults when it does not parse.
fn load_config() -> ClientConfig {
    ClientConfig::from_file_contents(CONFIG_FILE).unwrap_or_else(|e| {
        tracing::error!("Invalid {}, using defaults: {}", ClientConfig::filename(), e);
        ClientConfig::from_build_env()
    })
}

/// Layout shared by every page: navbar above the routed view.
#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        Navbar {
            path: route.to_string(),
            on_navigate: move |path: String| {
                tracing::debug!("navigating to {}", path);
                nav.push(path);
            },
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
