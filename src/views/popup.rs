use std::cell::Cell;
use std::rc::Rc;
use dioxus::prelude::*;
use crate::features::{ CloseAction, PopupScheduler };

/// A click reaches the backdrop after bubbling out of the content box; only
/// clicks that started on the backdrop itself close the popup.
fn backdrop_close(clicked_content: bool) -> Option<CloseAction> {
    if clicked_content { None } else { Some(CloseAction::Backdrop) }
}

#[component]
pub fn PromoPopup(popup: Signal<PopupScheduler>) -> Element {
    let mut popup = popup;
    let clicked_content = use_hook(|| Rc::new(Cell::new(false)));
    let mark_content = clicked_content.clone();
    let open = popup.read().is_open();
    let reason = popup.read().reason().map(|r| r.as_str()).unwrap_or("");

    rsx! {
        div {
            id: "promo-popup",
            class: "popup-backdrop",
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "promo-title",
            "aria-hidden": !open,
            "data-open": open,
            "data-reason": reason,
            hidden: !open,
            tabindex: "-1",
            onclick: move |_| {
                if let Some(action) = backdrop_close(clicked_content.replace(false)) {
                    popup.write().close(action);
                }
            },
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    popup.write().close(CloseAction::Escape);
                }
            },

            div {
                class: "popup-content",
                onclick: move |_| mark_content.set(true),

                button {
                    class: "popup-close",
                    r#type: "button",
                    "aria-label": "Close",
                    onclick: move |_| {
                        popup.write().close(CloseAction::CloseButton);
                    },
                    "×"
                }
                h2 { id: "promo-title", "Before you go: 20% off your first year" }
                p { "Start a free trial today and the discount is applied automatically when you upgrade." }
                div { class: "popup-actions",
                    button {
                        class: "cta popup-join",
                        r#type: "button",
                        onclick: move |_| {
                            popup.write().accept();
                        },
                        "Claim my discount"
                    }
                    button {
                        class: "popup-decline",
                        r#type: "button",
                        onclick: move |_| {
                            popup.write().close(CloseAction::Decline);
                        },
                        "No thanks"
                    }
                }
            }
        }
    }
}
