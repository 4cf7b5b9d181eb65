//! Registration page.

use dioxus::prelude::*;
use ui::{SignUpView, HOME_PATH};

#[component]
pub fn Signup() -> Element {
    rsx! {
        div {
            class: "auth-page",
            a { class: "auth-home", href: HOME_PATH, "\u{2190} Orayze" }
            SignUpView {}
        }
    }
}
