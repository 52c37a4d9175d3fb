use dioxus::prelude::*;
use crate::features::{ Accordion, PanelView };

const FAQ_ITEMS: &[(&str, &str)] = &[
    (
        "How long is the free trial?",
        "Fourteen days with every feature unlocked. No card required to start.",
    ),
    (
        "Can I cancel at any time?",
        "Yes. Cancel from your account settings and you will not be billed again.",
    ),
    (
        "Do you offer team plans?",
        "Team plans start at five seats and include shared workspaces and admin controls.",
    ),
    (
        "Where is my data stored?",
        "In EU data centers, encrypted at rest and in transit.",
    ),
];

#[component]
pub fn Faq() -> Element {
    let mut accordion = use_signal(|| Accordion::new(FAQ_ITEMS.len()));

    rsx! {
        section { id: "faq", class: "container faq",
            h2 { "Frequently asked questions" }
            div { class: "accordion",
                {FAQ_ITEMS.iter().enumerate().map(|(index, (question, answer))| {
                    let view = accordion.read().view(index).unwrap_or(PanelView::from(false));
                    let panel_id = format!("faq-panel-{}", index);
                    rsx! {
                        div {
                            key: "{index}",
                            class: "accordion-item",
                            "data-open": view.open,
                            button {
                                class: "accordion-button",
                                r#type: "button",
                                "aria-expanded": view.aria_expanded,
                                "aria-controls": "{panel_id}",
                                onclick: move |_| {
                                    accordion.write().toggle(index);
                                },
                                span { "{question}" }
                                span { class: "accordion-icon", "aria-hidden": "true", {view.icon} }
                            }
                            div {
                                id: "{panel_id}",
                                class: "accordion-panel",
                                hidden: !view.open,
                                p { "{answer}" }
                            }
                        }
                    }
                })}
            }
        }
    }
}
