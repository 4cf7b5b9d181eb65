use api::{CaptureMethod, ScanPhase};
use dioxus::prelude::*;

use super::ModalOverlay;

const SCAN_TIPS: [&str; 4] = [
    "Ensure good lighting",
    "Open your mouth wide",
    "Hold your phone steady",
    "Take a clear photo of your teeth",
];

/// The scan dialog. Renders nothing while the scan is idle.
#[component]
pub fn ScanModal(
    phase: ScanPhase,
    on_close: EventHandler<()>,
    on_capture: EventHandler<CaptureMethod>,
    on_view_results: EventHandler<()>,
) -> Element {
    if phase == ScanPhase::Idle {
        return rsx! {};
    }

    rsx! {
        ModalOverlay {
            title: "Start New Scan",
            on_close: on_close,

            {match phase {
                ScanPhase::ModalOpen => rsx! {
                    div {
                        class: "scan-instructions",
                        h4 { "How to take a good scan:" }
                        ol {
                            for tip in SCAN_TIPS {
                                li { key: "{tip}", "{tip}" }
                            }
                        }
                    }
                    div {
                        class: "scan-options",
                        button {
                            class: "camera-btn",
                            onclick: move |_| on_capture.call(CaptureMethod::Camera),
                            "\u{1F4F7} Use Camera"
                        }
                        button {
                            class: "upload-btn",
                            onclick: move |_| on_capture.call(CaptureMethod::Upload),
                            "\u{1F4C1} Upload Photo"
                        }
                    }
                },
                ScanPhase::Scanning(_) => rsx! {
                    div {
                        class: "scanning-animation",
                        div { class: "scan-circle" }
                        p { "Scanning your oral health..." }
                    }
                },
                ScanPhase::Complete => rsx! {
                    div {
                        class: "scan-complete",
                        div { class: "success-icon", "\u{2713}" }
                        h4 { "Scan Complete!" }
                        p { "Your oral health analysis is ready." }
                        button {
                            class: "view-results-btn",
                            onclick: move |_| on_view_results.call(()),
                            "View Results"
                        }
                    }
                },
                ScanPhase::Idle => rsx! {},
            }}
        }
    }
}
