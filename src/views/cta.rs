use dioxus::prelude::*;
use dioxus::html::input_data::MouseButton;
use crate::features::{ ClickModifiers, CtaClick, CtaTracker };
use crate::platform::Services;

fn click_modifiers(meta: bool, ctrl: bool, button: Option<MouseButton>) -> ClickModifiers {
    ClickModifiers {
        meta,
        ctrl,
        middle_button: button == Some(MouseButton::Auxiliary),
    }
}

fn modifiers_of(evt: &MouseEvent) -> ClickModifiers {
    let keys = evt.modifiers();
    click_modifiers(keys.meta(), keys.ctrl(), evt.trigger_button())
}

fn cta_click(label: &str, location: &str, is_link: bool, modifiers: ClickModifiers) -> CtaClick {
    CtaClick {
        label: label.to_string(),
        location: location.to_string(),
        is_link,
        modifiers,
    }
}

/// Anchor to the signup destination. The href is filled in from config so
/// "open in new tab" lands in the right place too.
#[component]
pub fn CtaLink(label: String, location: String, #[props(default)] class: String) -> Element {
    let services = use_context::<Services>();
    let tracker = use_hook(|| CtaTracker::from_services(&services));
    let anchor = tracker.destination_anchor();
    let href = anchor.href;
    let text = label.clone();
    let tag = location.clone();
    let press_tracker = tracker.clone();
    let press_label = label.clone();
    let press_location = location.clone();

    rsx! {
        a {
            class: "cta {class}",
            href: "{href}",
            rel: anchor.rel,
            "data-cta": "true",
            "data-location": "{tag}",
            onclick: move |evt: MouseEvent| {
                let click = cta_click(&label, &location, true, modifiers_of(&evt));
                if tracker.handle(&click).prevent_default {
                    evt.prevent_default();
                }
            },
            // Browsers send no `click` for the middle button.
            onmousedown: move |evt: MouseEvent| {
                let modifiers = modifiers_of(&evt);
                if modifiers.middle_button {
                    press_tracker.handle(&cta_click(&press_label, &press_location, true, modifiers));
                }
            },
            "{text}"
        }
    }
}

#[component]
pub fn CtaButton(label: String, location: String, #[props(default)] class: String) -> Element {
    let services = use_context::<Services>();
    let tracker = use_hook(|| CtaTracker::from_services(&services));
    let text = label.clone();
    let tag = location.clone();

    rsx! {
        button {
            r#type: "button",
            class: "cta {class}",
            "data-cta": "true",
            "data-location": "{tag}",
            onclick: move |evt: MouseEvent| {
                let click = cta_click(&label, &location, false, modifiers_of(&evt));
                tracker.handle(&click);
            },
            "{text}"
        }
    }
}
