use std::rc::Rc;
use crate::platform::{ self, AnalyticsHook, Navigator, Services };
use super::AnalyticsEvent;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ClickModifiers {
    pub meta: bool,
    pub ctrl: bool,
    pub middle_button: bool,
}

impl ClickModifiers {
    /// The visitor asked for a new tab/window.
    pub fn opens_elsewhere(&self) -> bool {
        self.meta || self.ctrl || self.middle_button
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CtaClick {
    pub label: String,
    /// Where on the page the CTA sits, e.g. "hero" or "pricing".
    pub location: String,
    pub is_link: bool,
    pub modifiers: ClickModifiers,
}

/// Attributes back-filled onto every destination anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DestinationAnchor {
    pub href: String,
    pub rel: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CtaOutcome {
    pub prevent_default: bool,
    pub redirected: bool,
}

#[derive(Clone)]
pub struct CtaTracker {
    destination: String,
    category: String,
    analytics: Option<Rc<dyn AnalyticsHook>>,
    navigator: Rc<dyn Navigator>,
}

impl CtaTracker {
    pub fn new(
        destination: &str,
        category: &str,
        analytics: Option<Rc<dyn AnalyticsHook>>,
        navigator: Rc<dyn Navigator>
    ) -> Self {
        Self {
            destination: destination.to_string(),
            category: category.to_string(),
            analytics,
            navigator,
        }
    }

    pub fn from_services(services: &Services) -> Self {
        Self::new(
            &services.config.destination_url,
            &services.config.analytics_category,
            services.analytics.clone(),
            services.navigator.clone()
        )
    }

    /// Value back-filled into the `href` of every destination anchor.
    pub fn destination_href(&self) -> &str {
        &self.destination
    }

    pub fn destination_anchor(&self) -> DestinationAnchor {
        DestinationAnchor {
            href: self.destination.clone(),
            rel: "noopener",
        }
    }

    pub fn handle(&self, click: &CtaClick) -> CtaOutcome {
        let event = AnalyticsEvent::cta(&self.category, &click.label, &click.location);
        platform::report(self.analytics.as_ref(), &event);

        if click.is_link && click.modifiers.opens_elsewhere() {
            return CtaOutcome {
                prevent_default: false,
                redirected: false,
            };
        }

        let redirected = match self.navigator.navigate(&self.destination) {
            Ok(()) => true,
            Err(e) => {
                log::error!("CTA redirect failed: {}", e);
                false
            }
        };

        CtaOutcome {
            prevent_default: click.is_link,
            redirected,
        }
    }
}
