use dioxus::prelude::*;

/// Landing page. The navbar is laid over this hero.
#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "hero",
            h2 { "Learn from the best tutors" }
            p { "Browse courses, top up your wallet and start learning today." }
        }
    }
}
