//! Placeholder pages. Only the navbar behaviour is implemented here; each page
//! renders its title so routing can be exercised end to end.

use dioxus::prelude::*;
use ui::use_session;

#[component]
fn Page(title: String) -> Element {
    rsx! {
        section {
            class: "page-placeholder",
            h2 { "{title}" }
        }
    }
}

#[component]
pub fn CourseList() -> Element {
    rsx! { Page { title: "Courses" } }
}

#[component]
pub fn Contact() -> Element {
    rsx! { Page { title: "Contact" } }
}

#[component]
pub fn About() -> Element {
    rsx! { Page { title: "About" } }
}

#[component]
pub fn UserProfile() -> Element {
    let title = match use_session() {
        Some(state) => format!("Profile of {}", state.read().session.fullname),
        None => "Profile".to_string(),
    };
    rsx! { Page { title } }
}

#[component]
pub fn Cart() -> Element {
    rsx! { Page { title: "Cart" } }
}

#[component]
pub fn Deposit() -> Element {
    rsx! { Page { title: "Top up your wallet" } }
}

#[component]
pub fn Login() -> Element {
    rsx! { Page { title: "Log in" } }
}

#[component]
pub fn Signup() -> Element {
    rsx! { Page { title: "Sign up" } }
}

#[component]
pub fn UploadTutorCertificate() -> Element {
    rsx! { Page { title: "Upload tutor certificate" } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! { Page { title: format!("Page not found: /{path}") } }
}
