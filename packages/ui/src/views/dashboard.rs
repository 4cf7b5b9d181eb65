use api::dashboard::SCAN_COMPLETED_MESSAGE;
use api::{
    CaptureMethod, DashboardAction, NavMenu, NoticeKind, Page, RngScore, ScanSession, ScanStats,
    Scheduler, QUICK_ACTIONS,
};
use dioxus::prelude::*;

use super::ScanModal;
use crate::notices::{use_notifier, NoticeBanner};
use crate::services::use_services;
use crate::session::{use_page_gate, LogoutButton};
use crate::timers::SpawnScheduler;

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

/// The signed-in home page: greeting, scan card, stats, quick actions.
///
/// Without a session it redirects to the sign-in page and renders nothing.
#[component]
pub fn DashboardView() -> Element {
    let services = use_services();
    let notifier = use_notifier();
    let mut scan = use_signal(ScanSession::new);
    let mut stats = use_signal(ScanStats::default);
    let mut nav = use_signal(NavMenu::default);
    let gate = use_page_gate(Page::Dashboard);

    // Keeps rendering for the signed-in user through the log-out notice
    let Some(user) = gate.user().cloned() else {
        return rsx! {};
    };

    let config = services.config.clone();
    let linger = config.notices.dashboard_linger();

    let mut start_scan = move || {
        if !scan.write().open() {
            tracing::debug!("Scan dialog already open");
        }
    };

    let on_capture = {
        let config = config.clone();
        move |method: CaptureMethod| {
            let Some(ticket) = scan.write().begin(method) else {
                return;
            };
            SpawnScheduler.schedule(config.scan.duration(), move || {
                // The dialog may have been closed or the page left meanwhile.
                let completed = scan
                    .try_write()
                    .map(|mut s| s.complete(ticket))
                    .unwrap_or(false);
                if !completed {
                    tracing::debug!("Ignoring completion of an abandoned scan");
                }
            });
        }
    };

    let on_view_results = {
        let range = config.scan.score_range();
        move |_: ()| {
            let mut scores = RngScore::thread();
            let score = scan
                .write()
                .view_results(&mut stats.write(), &mut scores, range.clone());
            if let Some(score) = score {
                tracing::debug!("Scan finished with health score {}", score);
                notifier.show(NoticeKind::Success, SCAN_COMPLETED_MESSAGE, linger);
            }
        }
    };

    let mut handle_action = move |label: &str| match DashboardAction::from_label(label) {
        Some(DashboardAction::StartScan) => start_scan(),
        Some(action) => {
            if let Some(message) = action.placeholder_message() {
                notifier.show(NoticeKind::Info, message, linger);
            }
        }
        None => tracing::debug!("Unhandled dashboard action: {}", label),
    };

    let current = stats();
    let nav_items: Vec<(usize, String, bool)> = {
        let menu = nav.read();
        menu.labels()
            .iter()
            .enumerate()
            .map(|(i, label)| (i, label.clone(), menu.is_active(i)))
            .collect()
    };

    rsx! {
        document::Stylesheet { href: DASHBOARD_CSS }

        div {
            class: "dashboard",

            header {
                class: "dashboard-header",
                div { class: "logo", "Orayze" }
                nav {
                    class: "dashboard-nav",
                    for (index, label, active) in nav_items {
                        a {
                            key: "{label}",
                            class: if active { "nav-link active" } else { "nav-link" },
                            href: "#",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                if let Some(message) = nav.write().select(index) {
                                    notifier.show(NoticeKind::Info, message, linger);
                                }
                            },
                            "{label}"
                        }
                    }
                }
                div {
                    class: "user-menu",
                    span { class: "user-full-name", "{user.full_name()}" }
                    LogoutButton { class: "logout-btn" }
                }
            }

            main {
                class: "dashboard-main",

                section {
                    class: "welcome-card",
                    h1 {
                        "Welcome back, "
                        span { id: "userName", "{user.first_name}" }
                        "!"
                    }
                    p { "Ready for today's oral health check?" }
                    button {
                        class: "scan-button",
                        onclick: move |_| start_scan(),
                        "Start Scan"
                    }
                }

                section {
                    class: "stats-grid",
                    div {
                        class: "stat-card",
                        div { class: "stat-number", "{current.total_scans}" }
                        div { class: "stat-label", "Total Scans" }
                    }
                    div {
                        class: "stat-card",
                        div { class: "stat-number", "{current.health_score_label()}" }
                        div { class: "stat-label", "Health Score" }
                    }
                    div {
                        class: "stat-card",
                        div { class: "stat-number", "{current.last_scan_label()}" }
                        div { class: "stat-label", "Last Scan" }
                    }
                }

                section {
                    class: "quick-actions",
                    h2 { "Quick Actions" }
                    div {
                        class: "action-buttons",
                        for label in QUICK_ACTIONS {
                            button {
                                key: "{label}",
                                class: "action-btn",
                                onclick: move |_| handle_action(label),
                                "{label}"
                            }
                        }
                    }
                }
            }

            ScanModal {
                phase: scan.read().phase(),
                on_close: move |_| scan.write().dismiss(),
                on_capture: on_capture,
                on_view_results: on_view_results,
            }

            NoticeBanner { class: "dashboard-message" }
        }
    }
}
