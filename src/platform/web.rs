use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{ JsCast, JsValue };
use crate::configs::SiteConfig;
use crate::error::SiteError;
use crate::features::theme::document_marker;
use crate::features::{ AnalyticsEvent, PopupTrigger };
use crate::utils::Theme;
use super::{ AnalyticsHook, KeyValueStore, Navigator, Services };

const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StorageArea {
    Local,
    Session,
}

#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage {
    area: StorageArea,
}

impl BrowserStorage {
    pub fn new(area: StorageArea) -> Self {
        Self { area }
    }

    fn storage(&self) -> Result<web_sys::Storage, SiteError> {
        let window = web_sys::window().ok_or_else(|| SiteError::Storage("No window".to_string()))?;
        let storage = match self.area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        };
        storage
            .map_err(|e| SiteError::from_js(SiteError::Storage, e))?
            .ok_or_else(|| SiteError::Storage(format!("{:?} storage unavailable", self.area)))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| SiteError::from_js(SiteError::Storage, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| SiteError::from_js(SiteError::Storage, e))
    }
}

/// Calls `window.gtag("event", name, params)` when the page loaded gtag.
/// The lookup happens per call since the tag script loads asynchronously.
#[derive(Debug, Clone, Copy, Default)]
pub struct GtagHook;

impl AnalyticsHook for GtagHook {
    fn track(&self, event: &AnalyticsEvent) -> Result<(), SiteError> {
        let window = web_sys::window().ok_or_else(|| SiteError::Analytics("No window".to_string()))?;
        let gtag = js_sys::Reflect
            ::get(&window, &JsValue::from_str("gtag"))
            .map_err(|e| SiteError::from_js(SiteError::Analytics, e))?;

        let Some(gtag) = gtag.dyn_ref::<js_sys::Function>() else {
            log::debug!("gtag not loaded, skipping {}", event.name);
            return Ok(());
        };

        let params = serde_json
            ::to_string(event)
            .map_err(|e| SiteError::Analytics(e.to_string()))?;
        let params = js_sys::JSON
            ::parse(&params)
            .map_err(|e| SiteError::from_js(SiteError::Analytics, e))?;

        gtag
            .call3(&JsValue::NULL, &JsValue::from_str("event"), &JsValue::from_str(&event.name), &params)
            .map_err(|e| SiteError::from_js(SiteError::Analytics, e))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) -> Result<(), SiteError> {
        let window = web_sys::window().ok_or_else(|| SiteError::Navigation("No window".to_string()))?;
        window
            .location()
            .set_href(url)
            .map_err(|e| SiteError::from_js(SiteError::Navigation, e))
    }
}

pub fn browser_services(config: SiteConfig) -> Services {
    Services {
        config,
        durable: Rc::new(BrowserStorage::new(StorageArea::Local)),
        session: Rc::new(BrowserStorage::new(StorageArea::Session)),
        analytics: Some(Rc::new(GtagHook)),
        navigator: Rc::new(BrowserNavigator),
        prefers_dark: prefers_dark(),
    }
}

pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
}

/// Marks `<html>` so stylesheets can key off `[data-theme="dark"]`.
pub fn apply_theme_to_document(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element()) else {
        return;
    };

    let result = match document_marker(theme) {
        Some(marker) => root.set_attribute(THEME_ATTRIBUTE, marker),
        None => root.remove_attribute(THEME_ATTRIBUTE),
    };
    if let Err(e) = result {
        log::debug!("Failed to mark document theme: {:?}", e);
    }
}

/// Registers `callback` for every window resize with the new inner width.
/// The listener lives for the rest of the page.
pub fn on_resize<F>(mut callback: F)
    where F: FnMut(f64) + 'static
{
    let Some(window) = web_sys::window() else {
        return;
    };

    let closure = Closure::<dyn FnMut()>::new(move || {
        if let Some(width) = viewport_width() {
            callback(width);
        }
    });

    if let Err(e) = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref()) {
        log::warn!("Failed to register resize listener: {:?}", e);
        return;
    }
    closure.forget();
}

/// Watches `mouseout` on the whole document, so the pointer is seen leaving
/// the window no matter which element (sticky header included) it was over.
pub fn on_exit_intent<F>(mut callback: F)
    where F: FnMut(PopupTrigger) + 'static
{
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |event: web_sys::MouseEvent| {
        if let Some(trigger) = PopupTrigger::from_pointer_exit(event.client_y(), viewport_width()) {
            callback(trigger);
        }
    });

    if let Err(e) = document.add_event_listener_with_callback("mouseout", closure.as_ref().unchecked_ref()) {
        log::warn!("Failed to register exit-intent listener: {:?}", e);
        return;
    }
    closure.forget();
}
