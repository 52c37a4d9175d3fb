use std::rc::Rc;
use crate::platform::{ self, AnalyticsHook, KeyValueStore, Navigator, Services };
use super::AnalyticsEvent;

const SHOWN_VALUE: &str = "1";
const ACCEPT_LABEL: &str = "popup_join";
const ACCEPT_LOCATION_PREFIX: &str = "exit_popup_";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PopupTrigger {
    Timer,
    /// Pointer left the document; `client_y` is where it was last seen.
    ExitIntent {
        client_y: f64,
        viewport_width: f64,
    },
}

impl PopupTrigger {
    /// Builds an exit-intent trigger from a document `mouseout`. Without a
    /// known viewport width there is nothing to compare against.
    pub fn from_pointer_exit(client_y: i32, viewport_width: Option<f64>) -> Option<Self> {
        viewport_width.map(|viewport_width| PopupTrigger::ExitIntent {
            client_y: f64::from(client_y),
            viewport_width,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupReason {
    Timer,
    ExitIntent,
}

impl PopupReason {
    pub fn as_str(self) -> &'static str {
        match self {
            PopupReason::Timer => "timer",
            PopupReason::ExitIntent => "exit_intent",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseAction {
    Backdrop,
    CloseButton,
    Decline,
    Escape,
}

/// Presents the promo popup at most once per browser session.
///
/// Both triggers funnel through [`PopupScheduler::trigger`], which checks the
/// shown flag first, so the 15 second timer can keep running after exit
/// intent fired. The flag is kept in memory as well as in session storage;
/// a session store that refuses writes still limits the popup to one
/// appearance per page load.
pub struct PopupScheduler {
    session: Rc<dyn KeyValueStore>,
    session_key: String,
    exit_min_width: f64,
    destination: String,
    category: String,
    analytics: Option<Rc<dyn AnalyticsHook>>,
    navigator: Rc<dyn Navigator>,
    shown: bool,
    open: bool,
    reason: Option<PopupReason>,
}

impl PopupScheduler {
    pub fn from_services(services: &Services) -> Self {
        let config = &services.config;
        let shown = match services.session.get(&config.popup_session_key) {
            Ok(value) => value.as_deref() == Some(SHOWN_VALUE),
            Err(e) => {
                log::debug!("Popup flag unreadable, assuming not shown: {}", e);
                false
            }
        };

        Self {
            session: services.session.clone(),
            session_key: config.popup_session_key.clone(),
            exit_min_width: f64::from(config.exit_intent_min_width_px),
            destination: config.destination_url.clone(),
            category: config.analytics_category.clone(),
            analytics: services.analytics.clone(),
            navigator: services.navigator.clone(),
            shown,
            open: false,
            reason: None,
        }
    }

    pub fn already_shown(&self) -> bool {
        self.shown
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn reason(&self) -> Option<PopupReason> {
        self.reason
    }

    /// Opens the popup if this trigger qualifies and nothing showed it yet.
    pub fn trigger(&mut self, trigger: PopupTrigger) -> Option<PopupReason> {
        if self.shown {
            return None;
        }

        let reason = match trigger {
            PopupTrigger::Timer => PopupReason::Timer,
            PopupTrigger::ExitIntent { client_y, viewport_width } => {
                if client_y > 0.0 || viewport_width < self.exit_min_width {
                    return None;
                }
                PopupReason::ExitIntent
            }
        };

        self.shown = true;
        self.open = true;
        self.reason = Some(reason);
        if let Err(e) = self.session.set(&self.session_key, SHOWN_VALUE) {
            log::debug!("Popup flag not persisted: {}", e);
        }
        log::info!("Showing popup ({})", reason.as_str());
        Some(reason)
    }

    /// Returns whether the popup was open. The shown flag is untouched.
    pub fn close(&mut self, action: CloseAction) -> bool {
        let was_open = self.open;
        self.open = false;
        if was_open {
            log::debug!("Popup closed via {:?}", action);
        }
        was_open
    }

    /// Reports the join click under the trigger's reason and redirects.
    pub fn accept(&mut self) -> bool {
        let reason = self.reason.map(PopupReason::as_str).unwrap_or("unknown");
        let location = format!("{}{}", ACCEPT_LOCATION_PREFIX, reason);
        let event = AnalyticsEvent::cta(&self.category, ACCEPT_LABEL, &location);
        platform::report(self.analytics.as_ref(), &event);
        self.open = false;

        match self.navigator.navigate(&self.destination) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Popup redirect failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::SiteConfig;
    use crate::platform::MemoryStore;

    fn scheduler() -> (PopupScheduler, Rc<MemoryStore>) {
        let session = Rc::new(MemoryStore::new());
        let mut services = Services::in_memory(SiteConfig::default());
        services.session = session.clone();
        (PopupScheduler::from_services(&services), session)
    }

    fn exit(client_y: f64, viewport_width: f64) -> PopupTrigger {
        PopupTrigger::ExitIntent { client_y, viewport_width }
    }

    #[test]
    fn test_timer_shows_once() {
        let (mut popup, session) = scheduler();
        assert_eq!(popup.trigger(PopupTrigger::Timer), Some(PopupReason::Timer));
        assert!(popup.is_open());
        assert_eq!(session.get("promo_popup_shown").unwrap().as_deref(), Some("1"));
        assert_eq!(popup.trigger(PopupTrigger::Timer), None);
        assert_eq!(popup.trigger(exit(0.0, 1400.0)), None);
    }

    #[test]
    fn test_exit_intent_requires_top_edge_and_wide_viewport() {
        let (mut popup, _) = scheduler();
        assert_eq!(popup.trigger(exit(40.0, 1400.0)), None);
        assert_eq!(popup.trigger(exit(-2.0, 899.0)), None);
        assert!(!popup.already_shown());
        assert_eq!(popup.trigger(exit(-2.0, 900.0)), Some(PopupReason::ExitIntent));
        assert_eq!(popup.reason(), Some(PopupReason::ExitIntent));
    }

    #[test]
    fn test_pointer_exit_builds_trigger() {
        assert_eq!(
            PopupTrigger::from_pointer_exit(-3, Some(1280.0)),
            Some(exit(-3.0, 1280.0))
        );
        assert_eq!(PopupTrigger::from_pointer_exit(0, None), None);
    }

    #[test]
    fn test_pointer_exit_above_viewport_opens_popup() {
        let (mut popup, _) = scheduler();
        let below_top = PopupTrigger::from_pointer_exit(64, Some(1280.0)).unwrap();
        assert_eq!(popup.trigger(below_top), None);
        let narrow = PopupTrigger::from_pointer_exit(0, Some(768.0)).unwrap();
        assert_eq!(popup.trigger(narrow), None);
        let leaving = PopupTrigger::from_pointer_exit(0, Some(1280.0)).unwrap();
        assert_eq!(popup.trigger(leaving), Some(PopupReason::ExitIntent));
    }

    #[test]
    fn test_close_keeps_shown_flag() {
        let (mut popup, _) = scheduler();
        popup.trigger(PopupTrigger::Timer);
        assert!(popup.close(CloseAction::Decline));
        assert!(!popup.is_open());
        assert!(popup.already_shown());
        assert!(!popup.close(CloseAction::Backdrop));
        assert_eq!(popup.trigger(PopupTrigger::Timer), None);
    }

    #[test]
    fn test_flag_from_earlier_page_suppresses() {
        let mut services = Services::in_memory(SiteConfig::default());
        services.session = Rc::new(MemoryStore::with_entry("promo_popup_shown", "1"));
        let mut popup = PopupScheduler::from_services(&services);
        assert_eq!(popup.trigger(PopupTrigger::Timer), None);
        assert!(!popup.is_open());
    }
}
