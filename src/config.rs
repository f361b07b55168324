//! Build-time Configuration
//!
//! Values baked in from the environment when the WASM bundle is built
//! (e.g. `CHORE_API_BASE_URL=https://api.example trunk build`).

use std::str::FromStr;

use tracing::Level;

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the chore API, without a trailing slash.
    /// Empty when unset; requests then fail as malformed URLs.
    pub api_base_url: String,
    /// Most verbose level forwarded to the browser console
    pub log_level: Level,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("CHORE_API_BASE_URL"), option_env!("CHORE_LOG_LEVEL"))
    }

    pub fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();

        let log_level = log_level
            .and_then(|level| Level::from_str(level.trim()).ok())
            .unwrap_or(Level::INFO);

        Self { api_base_url, log_level }
    }
}
