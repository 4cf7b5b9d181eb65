//! Sign-in page.

use dioxus::prelude::*;
use ui::{SignInView, HOME_PATH};

#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "auth-page",
            a { class: "auth-home", href: HOME_PATH, "\u{2190} Orayze" }
            SignInView {}
        }
    }
}
