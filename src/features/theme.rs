use std::rc::Rc;
use crate::platform::{ KeyValueStore, Services };
use crate::utils::{ Theme, ThemeState };

/// Persisted value if valid, then the OS color-scheme hint.
pub fn resolve_initial(store: &dyn KeyValueStore, key: &str, prefers_dark: bool) -> Theme {
    let stored = match store.get(key) {
        Ok(value) => value.and_then(|v| v.parse::<Theme>().ok()),
        Err(e) => {
            log::debug!("Theme preference unreadable, ignoring: {}", e);
            None
        }
    };

    stored.unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
}

pub struct ThemeController {
    store: Rc<dyn KeyValueStore>,
    key: String,
    current: Theme,
}

impl ThemeController {
    pub fn load(store: Rc<dyn KeyValueStore>, key: &str, prefers_dark: bool) -> Self {
        let current = resolve_initial(store.as_ref(), key, prefers_dark);
        log::info!("Initial theme: {}", current.as_str());
        Self {
            store,
            key: key.to_string(),
            current,
        }
    }

    pub fn from_services(services: &Services) -> Self {
        Self::load(services.durable.clone(), &services.config.theme_key, services.prefers_dark)
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn state(&self) -> ThemeState {
        ThemeState::from(self.current)
    }

    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.inverted();
        apply(self.current);
        if let Err(e) = self.store.set(&self.key, self.current.as_str()) {
            log::debug!("Theme preference not persisted: {}", e);
        }
        self.current
    }
}

/// Value of `data-theme` on `<html>`; light pages carry no marker at all.
pub fn document_marker(theme: Theme) -> Option<&'static str> {
    match theme {
        Theme::Dark => Some(theme.as_str()),
        Theme::Light => None,
    }
}

#[cfg(target_arch = "wasm32")]
pub fn apply(theme: Theme) {
    crate::platform::web::apply_theme_to_document(theme);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply(_theme: Theme) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;

    #[test]
    fn test_stored_preference_wins_over_os_hint() {
        let store = MemoryStore::with_entry("theme", "light");
        assert_eq!(resolve_initial(&store, "theme", true), Theme::Light);
    }

    #[test]
    fn test_falls_back_to_os_hint() {
        let store = MemoryStore::new();
        assert_eq!(resolve_initial(&store, "theme", true), Theme::Dark);
        assert_eq!(resolve_initial(&store, "theme", false), Theme::Light);
    }

    #[test]
    fn test_document_marker_only_when_dark() {
        assert_eq!(document_marker(Theme::Dark), Some("dark"));
        assert_eq!(document_marker(Theme::Light), None);
        assert_eq!(document_marker(Theme::Light.inverted()), Some("dark"));
    }

    #[test]
    fn test_garbage_value_ignored() {
        let store = MemoryStore::with_entry("theme", "sepia");
        assert_eq!(resolve_initial(&store, "theme", true), Theme::Dark);
    }

    #[test]
    fn test_toggle_twice_restores_and_persists() {
        let store = Rc::new(MemoryStore::new());
        let mut controller = ThemeController::load(store.clone(), "theme", false);
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(controller.state(), ThemeState::from(Theme::Light));
    }
}
