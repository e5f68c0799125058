//! Environment configuration surface
//!
//! Both API keys are read at startup but their absence is not fatal:
//! a missing key surfaces as a configuration error on the first call
//! to the corresponding collaborator, without attempting the network.

/// OpenWeather current-weather API base URL
pub const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Last.fm API base URL
pub const LASTFM_BASE_URL: &str = "https://ws.audioscrobbler.com/2.0";

const DEFAULT_PORT: u16 = 8000;

/// Runtime configuration, resolved from the process environment
#[derive(Debug, Clone)]
pub struct Config {
    pub openweather_api_key: Option<String>,
    pub lastfm_api_key: Option<String>,
    pub openweather_base_url: String,
    pub lastfm_base_url: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Base URLs are overridable (used by tests to point the clients at
    /// a local stub); `MOODTUNE_PORT` overrides the listen port.
    pub fn from_env() -> Self {
        Self {
            openweather_api_key: env_non_empty("OPENWEATHER_API_KEY"),
            lastfm_api_key: env_non_empty("LASTFM_API_KEY"),
            openweather_base_url: std::env::var("OPENWEATHER_BASE_URL")
                .unwrap_or_else(|_| OPENWEATHER_BASE_URL.to_string()),
            lastfm_base_url: std::env::var("LASTFM_BASE_URL")
                .unwrap_or_else(|_| LASTFM_BASE_URL.to_string()),
            port: std::env::var("MOODTUNE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}

/// Treat unset and empty environment variables the same way
fn env_non_empty(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(v) if !v.is_empty() => Some(v),
        _ => None,
    }
}
