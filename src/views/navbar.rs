use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;
use crate::features::{ NavState, ThemeController };
use crate::platform::{ self, Services };
use crate::routes::Route;
use crate::views::CtaLink;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[cfg(target_arch = "wasm32")]
fn watch_resize(resizes: Coroutine<f64>) {
    platform::web::on_resize(move |width| resizes.send(width));
}

#[cfg(not(target_arch = "wasm32"))]
fn watch_resize(_resizes: Coroutine<f64>) {
    log::debug!("No viewport to watch outside the browser");
}

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let services = use_context::<Services>();
    let mut theme = use_context::<Signal<ThemeController>>();
    let breakpoint = services.config.nav_breakpoint_px;
    let mut nav = use_signal(|| NavState::new(breakpoint, platform::viewport_width()));

    let resizes = use_coroutine(move |mut rx: UnboundedReceiver<f64>| async move {
        while let Some(width) = rx.next().await {
            nav.write().on_resize(width);
        }
    });
    use_hook(move || watch_resize(resizes));

    let toggle = theme.read().state();
    let menu = *nav.read();
    let menu_style = format!("display: {}", menu.display());

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            header { class: "site-header",
                nav { id: "navbar", class: "container nav",
                    Link { class: "brand", to: Route::Home, "Brightpath" }

                    button {
                        id: "nav-toggle",
                        class: "nav-toggle",
                        r#type: "button",
                        "aria-controls": "nav-menu",
                        "aria-expanded": menu.aria_expanded(),
                        "aria-label": "Toggle navigation",
                        onclick: move |_| {
                            nav.write().toggle();
                        },
                        "☰"
                    }

                    ul {
                        id: "nav-menu",
                        class: "nav-menu",
                        style: "{menu_style}",
                        li { a { href: "#features", "Features" } }
                        li { a { href: "#faq", "FAQ" } }
                        li { a { href: "#contact", "Contact" } }
                        li {
                            CtaLink { label: "Get started", location: "nav", class: "cta-small" }
                        }
                    }

                    button {
                        id: "theme-toggle",
                        class: "theme-toggle",
                        r#type: "button",
                        title: toggle.label,
                        "aria-label": toggle.label,
                        "aria-pressed": toggle.aria_pressed,
                        onclick: move |_| {
                            theme.write().toggle();
                        },
                        {toggle.icon}
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}
