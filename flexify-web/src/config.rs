//! Frontend configuration module
//!
//! Values are baked in at build time through environment variables so the
//! static bundle needs no runtime configuration endpoint.

use log::Level;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Frontend configuration for the backend API and third-party sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub api_base_url: String,
    /// Google OAuth client id. Google sign-in is hidden when unset.
    pub google_client_id: Option<String>,
    pub log_level: Level,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("FLEXIFY_API_URL"),
            option_env!("FLEXIFY_GOOGLE_CLIENT_ID"),
            option_env!("FLEXIFY_LOG_LEVEL"),
        )
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from raw values, falling back to defaults for
    /// anything missing, blank or unparsable.
    pub fn from_values(
        api_url: Option<&str>,
        google_client_id: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let google_client_id = google_client_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(ToString::to_string);

        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(Level::Info);

        Self {
            api_base_url,
            google_client_id,
            log_level,
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn google_client_id(&self) -> Option<&str> {
        self.google_client_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Missing values fall back to the local development backend.
    #[test]
    fn test_frontend_config_defaults() {
        let config = FrontendConfig::from_values(None, None, None);
        assert_eq!(config.api_base_url(), DEFAULT_API_URL);
        assert_eq!(config.google_client_id(), None);
        assert_eq!(config.log_level, Level::Info);
    }

    /// Trailing slashes are stripped so paths can be joined uniformly.
    #[test]
    fn test_frontend_config_trims_api_url() {
        let config = FrontendConfig::from_values(Some(" https://api.flexify.app/api/ "), None, None);
        assert_eq!(config.api_base_url(), "https://api.flexify.app/api");
    }

    /// A blank client id behaves like an unset one.
    #[test]
    fn test_frontend_config_blank_client_id() {
        let config = FrontendConfig::from_values(None, Some("   "), None);
        assert_eq!(config.google_client_id(), None);

        let config = FrontendConfig::from_values(None, Some("abc.apps.googleusercontent.com"), None);
        assert_eq!(
            config.google_client_id(),
            Some("abc.apps.googleusercontent.com")
        );
    }

    /// Log levels parse case-insensitively and ignore garbage.
    #[test]
    fn test_frontend_config_log_level() {
        let config = FrontendConfig::from_values(None, None, Some("debug"));
        assert_eq!(config.log_level, Level::Debug);

        let config = FrontendConfig::from_values(None, None, Some("loud"));
        assert_eq!(config.log_level, Level::Info);
    }
}
