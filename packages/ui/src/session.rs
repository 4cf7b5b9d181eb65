//! Session context and hooks for the UI.

use api::{NoticeKind, NoticeSlot, Page, PageGate, Scheduler, SessionUser};
use dioxus::prelude::*;
use store::AppConfig;

use crate::navigation::redirect_to;
use crate::notices::use_notifier;
use crate::services::{use_services, AppServices};
use crate::timers::SpawnScheduler;

/// Who is signed in on this page load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
}

/// Get the current session state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Decide access to `page` once, from the session present at load.
///
/// Redirects when the page must not render. Later session changes on the
/// same page (logging out) leave the decision alone.
pub fn use_page_gate(page: Page) -> PageGate {
    let session = use_session();
    use_hook(move || {
        let gate = PageGate::on_load(page, session.peek().user.clone());
        if let Some(target) = gate.redirect() {
            redirect_to(target.path());
        }
        gate
    })
}

/// Provider component that builds the page services and reads the session
/// pointer once. Wrap your app with this component.
#[component]
pub fn SessionProvider(config: AppConfig, children: Element) -> Element {
    let services = use_context_provider(|| AppServices::new(config.clone()));

    let session = use_signal(|| SessionState {
        user: services.accounts.current_session(),
    });
    let notices = use_signal(NoticeSlot::default);

    use_context_provider(|| session);
    use_context_provider(|| notices);

    rsx! {
        {children}
    }
}

/// Button to sign out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut session = use_session();
    let services = use_services();
    let notifier = use_notifier();

    let onclick = move |evt: MouseEvent| {
        evt.prevent_default();
        let config = &services.config;
        match services.accounts.log_out() {
            Ok(()) => {
                session.set(SessionState::default());
                notifier.show(
                    NoticeKind::Success,
                    "Logged out successfully!",
                    config.notices.dashboard_linger(),
                );
                SpawnScheduler.schedule(config.auth.log_out_redirect(), || {
                    redirect_to(Page::AFTER_LOG_OUT.path())
                });
            }
            Err(e) => {
                tracing::error!("Failed to sign out: {:?}", e);
                notifier.show(NoticeKind::Error, e.to_string(), config.notices.dashboard_linger());
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
