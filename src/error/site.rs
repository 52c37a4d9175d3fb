use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq)]
pub enum SiteError {
    Storage(String),
    Analytics(String),
    Navigation(String),
    Config(String),
}

impl SiteError {
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn from_js(kind: fn(String) -> SiteError, value: wasm_bindgen::JsValue) -> Self {
        let msg = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        kind(msg)
    }
}

impl Display for SiteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            SiteError::Analytics(msg) => write!(f, "Analytics Error: {}", msg),
            SiteError::Navigation(msg) => write!(f, "Navigation Error: {}", msg),
            SiteError::Config(msg) => write!(f, "Config Error: {}", msg),
        }
    }
}

impl std::error::Error for SiteError {}

impl From<serde_json::Error> for SiteError {
    fn from(error: serde_json::Error) -> Self {
        SiteError::Config(error.to_string())
    }
}

impl From<std::num::ParseIntError> for SiteError {
    fn from(error: std::num::ParseIntError) -> Self {
        SiteError::Config(error.to_string())
    }
}
