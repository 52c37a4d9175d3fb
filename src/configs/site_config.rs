use serde::{ Deserialize, Serialize };
use crate::error::SiteError;

pub const DEFAULT_DESTINATION_URL: &str = "https://app.example.com/signup";
pub const DEFAULT_BREAKPOINT_PX: u32 = 900;
pub const DEFAULT_POPUP_DELAY_MS: u32 = 15_000;

/// Everything the interactive features need to know about the page,
/// gathered in one place and handed to `Services` at startup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Where every CTA and the popup's accept button sends the visitor.
    pub destination_url: String,
    /// Durable storage key for the theme preference.
    pub theme_key: String,
    /// Session storage key for the popup-shown flag.
    pub popup_session_key: String,
    /// At or above this width the navigation is always expanded.
    pub nav_breakpoint_px: u32,
    /// Exit-intent only counts on viewports at least this wide.
    pub exit_intent_min_width_px: u32,
    pub popup_delay_ms: u32,
    pub analytics_category: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            destination_url: DEFAULT_DESTINATION_URL.to_string(),
            theme_key: "theme".to_string(),
            popup_session_key: "promo_popup_shown".to_string(),
            nav_breakpoint_px: DEFAULT_BREAKPOINT_PX,
            exit_intent_min_width_px: DEFAULT_BREAKPOINT_PX,
            popup_delay_ms: DEFAULT_POPUP_DELAY_MS,
            analytics_category: "engagement".to_string(),
        }
    }
}

impl SiteConfig {
    /// Overrides on top of the defaults; missing fields keep their default.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Native builds only. Reads `.env` and the process environment.
    pub fn from_env() -> Result<Self, SiteError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, SiteError>
        where F: Fn(&str) -> Option<String>
    {
        let mut config = SiteConfig::default();

        match lookup("SITE_DESTINATION_URL") {
            Some(url) => {
                config.destination_url = url;
            }
            None => {
                log::warn!(
                    "SITE_DESTINATION_URL not set, using default destination {}",
                    DEFAULT_DESTINATION_URL
                );
            }
        }

        if let Some(delay) = lookup("SITE_POPUP_DELAY_MS") {
            config.popup_delay_ms = delay.trim().parse()?;
        }

        config.validate()?;
        log::info!("Using destination URL: {}", config.destination_url);
        Ok(config)
    }

    fn validate(&self) -> Result<(), SiteError> {
        if !(self.destination_url.starts_with("https://") || self.destination_url.starts_with("http://")) {
            return Err(
                SiteError::Config(format!("destination must be an http(s) URL: {}", self.destination_url))
            );
        }
        if self.theme_key.is_empty() || self.popup_session_key.is_empty() {
            return Err(SiteError::Config("storage keys must not be empty".to_string()));
        }
        Ok(())
    }
}
