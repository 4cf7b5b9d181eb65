use dioxus::prelude::*;

const TITLE_ID: &str = "modal-title";

/// Full-screen dialog with a titled header and a close control.
///
/// Closes on the close control, a click outside the card, or Escape. The
/// card takes focus when it mounts so Escape works without clicking first.
#[component]
pub fn ModalOverlay(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "scan-modal",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "modal-content",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: TITLE_ID,
                tabindex: "-1",
                onmounted: move |evt: MountedEvent| async move {
                    if let Err(e) = evt.set_focus(true).await {
                        tracing::debug!("Dialog could not take focus: {:?}", e);
                    }
                },
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                div {
                    class: "modal-header",
                    h3 { id: TITLE_ID, "{title}" }
                    button {
                        class: "close-modal",
                        r#type: "button",
                        title: "Close",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "\u{00D7}"
                    }
                }

                div {
                    class: "modal-body",
                    {children}
                }
            }
        }
    }
}
