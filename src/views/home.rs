use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;
use crate::features::{ PopupScheduler, PopupTrigger };
use crate::platform::Services;
use crate::views::{ ContactSection, CtaButton, CtaLink, Faq, PromoPopup };

#[cfg(target_arch = "wasm32")]
fn schedule_popup_timer(triggers: Coroutine<PopupTrigger>, delay_ms: u32) {
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        triggers.send(PopupTrigger::Timer);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_popup_timer(_triggers: Coroutine<PopupTrigger>, delay_ms: u32) {
    log::debug!("Popup timer ({} ms) only runs in the browser", delay_ms);
}

#[cfg(target_arch = "wasm32")]
fn watch_exit_intent(triggers: Coroutine<PopupTrigger>) {
    crate::platform::web::on_exit_intent(move |trigger| triggers.send(trigger));
}

#[cfg(not(target_arch = "wasm32"))]
fn watch_exit_intent(_triggers: Coroutine<PopupTrigger>) {
    log::debug!("No pointer to watch outside the browser");
}

#[component]
pub fn Home() -> Element {
    let services = use_context::<Services>();
    let delay_ms = services.config.popup_delay_ms;
    let mut popup = use_signal(|| PopupScheduler::from_services(&services));

    let triggers = use_coroutine(move |mut rx: UnboundedReceiver<PopupTrigger>| async move {
        while let Some(trigger) = rx.next().await {
            popup.write().trigger(trigger);
        }
    });
    use_hook(move || {
        if !popup.peek().already_shown() {
            schedule_popup_timer(triggers, delay_ms);
            watch_exit_intent(triggers);
        }
    });

    rsx! {
        div { class: "page",
            section { class: "container hero",
                h1 { "Plan less. Ship more." }
                p { class: "hero-lead",
                    "Brightpath keeps your roadmap, sprints and releases in one calm place."
                }
                div { class: "hero-actions",
                    CtaLink { label: "Start free trial", location: "hero" }
                    CtaButton { label: "Book a demo", location: "hero", class: "cta-secondary" }
                }
            }

            section { id: "features", class: "container features",
                article {
                    h3 { "Roadmaps that stay current" }
                    p { "Link goals to work items and watch progress update itself." }
                }
                article {
                    h3 { "Sprints without spreadsheets" }
                    p { "Capacity, scope and carry-over, calculated for you." }
                }
                article {
                    h3 { "Release notes on autopilot" }
                    p { "Every merged change is summarized for your customers." }
                }
                CtaLink { label: "See pricing", location: "features" }
            }

            Faq {}
            ContactSection {}
            PromoPopup { popup }
        }
    }
}
