//! Registration form.

use api::{NoticeKind, Page, Scheduler, SignUpForm};
use dioxus::prelude::*;

use crate::navigation::{redirect_to, LOGIN_PATH};
use crate::notices::{use_notifier, NoticeBanner};
use crate::services::use_services;
use crate::timers::SpawnScheduler;

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");

/// Sign-up form with fields `firstName`, `lastName`, `email`, `password`,
/// `confirmPassword` and `terms`.
///
/// Field validation runs immediately; account creation resolves after the
/// configured latency and then sends the user to the sign-in page.
#[component]
pub fn SignUpView() -> Element {
    let services = use_services();
    let notifier = use_notifier();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut terms = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_sign_up = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }

        let form = SignUpForm {
            first_name: first_name(),
            last_name: last_name(),
            email: email(),
            password: password(),
            confirm_password: confirm_password(),
            terms_accepted: terms(),
        };
        let linger = services.config.notices.form_linger();
        if let Err(e) = form.validate() {
            notifier.show(NoticeKind::Error, e.to_string(), linger);
            return;
        }

        loading.set(true);
        let services = services.clone();
        SpawnScheduler.schedule(services.config.auth.latency(), move || {
            match services.accounts.sign_up(&form) {
                Ok(_) => {
                    notifier.show(
                        NoticeKind::Success,
                        "Account created successfully! Please sign in.",
                        linger,
                    );
                    SpawnScheduler.schedule(services.config.auth.sign_up_redirect(), || {
                        redirect_to(Page::AFTER_SIGN_UP.path())
                    });
                }
                Err(err) => {
                    notifier.show(NoticeKind::Error, err.to_string(), linger);
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

            h1 { class: "auth-title", "Create Account" }
            p { class: "auth-subtitle", "Start tracking your oral health with Orayze" }

            NoticeBanner {}

            form {
                id: "signupForm",
                class: "auth-form",
                onsubmit: handle_sign_up,

                div {
                    class: "auth-row",
                    div {
                        label { r#for: "firstName", "First name" }
                        input {
                            id: "firstName",
                            name: "firstName",
                            r#type: "text",
                            value: first_name(),
                            oninput: move |evt: FormEvent| first_name.set(evt.value()),
                        }
                    }
                    div {
                        label { r#for: "lastName", "Last name" }
                        input {
                            id: "lastName",
                            name: "lastName",
                            r#type: "text",
                            value: last_name(),
                            oninput: move |evt: FormEvent| last_name.set(evt.value()),
                        }
                    }
                }

                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    name: "email",
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    name: "password",
                    r#type: "password",
                    placeholder: "At least 8 characters",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                label { r#for: "confirmPassword", "Confirm password" }
                input {
                    id: "confirmPassword",
                    name: "confirmPassword",
                    r#type: "password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                label {
                    class: "auth-checkbox",
                    input {
                        id: "terms",
                        name: "terms",
                        r#type: "checkbox",
                        checked: terms(),
                        onchange: move |evt: FormEvent| terms.set(evt.checked()),
                    }
                    "I agree to the Terms of Service and Privacy Policy"
                }

                button {
                    class: if loading() { "auth-button loading" } else { "auth-button" },
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Create Account" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                a { href: LOGIN_PATH, "Sign in" }
            }
        }
    }
}
