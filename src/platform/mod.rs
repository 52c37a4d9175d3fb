//! Browser capabilities the features depend on. Each feature receives them
//! through `Services` instead of reaching for `window` directly, so the same
//! controllers run against the real browser or against in-memory fakes.

pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

use std::rc::Rc;
use crate::configs::SiteConfig;
use crate::error::SiteError;
use crate::features::AnalyticsEvent;

pub use memory::{ LogNavigator, MemoryStore };

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError>;
    fn set(&self, key: &str, value: &str) -> Result<(), SiteError>;
}

pub trait AnalyticsHook {
    fn track(&self, event: &AnalyticsEvent) -> Result<(), SiteError>;
}

pub trait Navigator {
    fn navigate(&self, url: &str) -> Result<(), SiteError>;
}

/// Reports an event if a hook is installed. Failures never reach the caller.
pub fn report(analytics: Option<&Rc<dyn AnalyticsHook>>, event: &AnalyticsEvent) {
    let Some(hook) = analytics else {
        log::debug!("No analytics hook, dropping {}", event.name);
        return;
    };
    if let Err(e) = hook.track(event) {
        log::warn!("Failed to report {}: {}", event.name, e);
    }
}

#[derive(Clone)]
pub struct Services {
    pub config: SiteConfig,
    /// Survives browser restarts (theme preference).
    pub durable: Rc<dyn KeyValueStore>,
    /// Cleared when the tab closes (popup flag).
    pub session: Rc<dyn KeyValueStore>,
    pub analytics: Option<Rc<dyn AnalyticsHook>>,
    pub navigator: Rc<dyn Navigator>,
    pub prefers_dark: bool,
}

impl Services {
    /// In-memory capabilities. Used on native targets and in tests.
    pub fn in_memory(config: SiteConfig) -> Self {
        Self {
            config,
            durable: Rc::new(MemoryStore::new()),
            session: Rc::new(MemoryStore::new()),
            analytics: None,
            navigator: Rc::new(LogNavigator),
            prefers_dark: false,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn detect(config: SiteConfig) -> Self {
        web::browser_services(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn detect(config: SiteConfig) -> Self {
        Self::in_memory(config)
    }
}

#[cfg(target_arch = "wasm32")]
pub fn viewport_width() -> Option<f64> {
    web::viewport_width()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_width() -> Option<f64> {
    None
}
