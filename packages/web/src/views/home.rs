//! Landing page.

use dioxus::prelude::*;
use ui::{use_page_gate, AuthLinks, Page, DASHBOARD_PATH};

/// Landing page. Visitors with a session go straight to the dashboard.
#[component]
pub fn Home() -> Element {
    use_page_gate(Page::Home);

    rsx! {
        section {
            class: "hero",
            div {
                class: "hero-content",
                h1 { "Orayze" }
                p {
                    class: "hero-tagline",
                    "Check in on your oral health from home with a quick photo scan."
                }
                a { class: "cta-button", href: DASHBOARD_PATH, "Get Started" }
                AuthLinks {}
            }
        }
    }
}
