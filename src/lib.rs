mod views;
mod routes;
mod utils;
pub mod configs;
pub mod error;
pub mod features;
pub mod platform;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::SiteConfig;
pub use crate::error::SiteError;
pub use crate::platform::Services;
