use dioxus::prelude::*;

use crate::navigation::{LOGIN_PATH, SIGNUP_PATH};
use crate::session::use_session;

/// Sign In / Sign Up links for the landing page. Hidden once signed in.
#[component]
pub fn AuthLinks() -> Element {
    let session = use_session();
    if session().user.is_some() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "auth-buttons",
            a { class: "auth-link login-link", href: LOGIN_PATH, "Sign In" }
            a { class: "auth-link signup-link", href: SIGNUP_PATH, "Sign Up" }
        }
    }
}
