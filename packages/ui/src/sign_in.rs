//! Email + password sign-in form.

use api::{NoticeKind, Page, Scheduler};
use dioxus::prelude::*;

use crate::navigation::{redirect_to, SIGNUP_PATH};
use crate::notices::{use_notifier, NoticeBanner};
use crate::services::use_services;
use crate::session::{use_session, SessionState};
use crate::timers::SpawnScheduler;

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");

/// Sign-in form with fields `email`, `password` and `remember`.
///
/// The credential check resolves after the configured latency. On success the
/// session is stored and the page moves to the dashboard.
#[component]
pub fn SignInView() -> Element {
    let services = use_services();
    let mut session = use_session();
    let notifier = use_notifier();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_sign_in = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        loading.set(true);

        let services = services.clone();
        let (e, p, r) = (email(), password(), remember());
        let latency = services.config.auth.latency();
        SpawnScheduler.schedule(latency, move || {
            let config = &services.config;
            match services.accounts.sign_in(&e, &p, r) {
                Ok(user) => {
                    session.set(SessionState { user: Some(user) });
                    notifier.show(
                        NoticeKind::Success,
                        "Login successful! Redirecting...",
                        config.notices.form_linger(),
                    );
                    SpawnScheduler.schedule(config.auth.sign_in_redirect(), || {
                        redirect_to(Page::AFTER_SIGN_IN.path())
                    });
                }
                Err(err) => {
                    notifier.show(NoticeKind::Error, err.to_string(), config.notices.form_linger());
                    if let Ok(mut loading) = loading.try_write() {
                        *loading = false;
                    }
                }
            }
        });
    };

    rsx! {
        document::Stylesheet { href: AUTH_CSS }

        div {
            class: "auth-card",

            h1 { class: "auth-title", "Welcome Back" }
            p { class: "auth-subtitle", "Sign in to your Orayze account" }

            NoticeBanner {}

            form {
                id: "loginForm",
                class: "auth-form",
                onsubmit: handle_sign_in,

                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    name: "email",
                    r#type: "email",
                    required: true,
                    placeholder: "you@example.com",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    name: "password",
                    r#type: "password",
                    required: true,
                    placeholder: "Your password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                label {
                    class: "auth-checkbox",
                    input {
                        id: "remember",
                        name: "remember",
                        r#type: "checkbox",
                        checked: remember(),
                        onchange: move |evt: FormEvent| remember.set(evt.checked()),
                    }
                    "Remember me"
                }

                button {
                    class: if loading() { "auth-button loading" } else { "auth-button" },
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign In" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                a { href: SIGNUP_PATH, "Sign up" }
            }
        }
    }
}
