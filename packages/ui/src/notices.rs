//! Transient notice banner.

use std::time::Duration;

use api::{NoticeKind, NoticeSlot, Scheduler};
use dioxus::prelude::*;

use crate::timers::SpawnScheduler;

/// Handle for showing a notice in the page's single notice slot.
#[derive(Clone, Copy, PartialEq)]
pub struct Notifier {
    slot: Signal<NoticeSlot>,
}

pub fn use_notifier() -> Notifier {
    Notifier {
        slot: use_context::<Signal<NoticeSlot>>(),
    }
}

impl Notifier {
    /// Replace the current notice and dismiss it after `linger`.
    pub fn show(self, kind: NoticeKind, message: impl Into<String>, linger: Duration) {
        let mut slot = self.slot;
        let id = slot.write().show(kind, message);
        SpawnScheduler.schedule(linger, move || {
            if let Ok(mut slot) = slot.try_write() {
                slot.dismiss(id);
            }
        });
    }
}

/// Renders the current notice, if any.
///
/// `class` positions the banner: inline above a form, or floating on the
/// dashboard.
#[component]
pub fn NoticeBanner(#[props(default = "message".to_string())] class: String) -> Element {
    let slot = use_context::<Signal<NoticeSlot>>();
    let Some(notice) = slot.read().current().cloned() else {
        return rsx! {};
    };

    rsx! {
        div {
            key: "{notice.id:?}",
            class: "{class} {notice.kind.class()}",
            style: "background: {notice.kind.color()};",
            role: "status",
            "{notice.message}"
        }
    }
}
