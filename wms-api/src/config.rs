//! Environment-driven configuration.
//!
//! A missing base URL fails fast here with a named-variable error instead of
//! surfacing later as a confusing fetch failure.

use thiserror::Error;

/// Environment variable holding the REST API base URL.
pub const API_BASE_URL_VAR: &str = "WMS_API_BASE_URL";

/// Environment variable holding the Mapbox access token for the heatmap.
pub const MAPBOX_TOKEN_VAR: &str = "WMS_MAPBOX_ACCESS_TOKEN";

/// Configuration errors raised before any network request is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{API_BASE_URL_VAR} is not set; point it at the waste management REST API base URL")]
    MissingApiBaseUrl,

    #[error("{MAPBOX_TOKEN_VAR} is not set; the map view needs a Mapbox access token")]
    MissingMapToken,
}

/// Runtime configuration for the API client and the map view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the REST API, without a trailing slash.
    pub api_base_url: String,
    /// Mapbox access token. Only the dashboard's heatmap needs it, so the
    /// CLI runs fine without one.
    pub mapbox_access_token: Option<String>,
}

impl Config {
    /// Build a configuration from explicit values.
    ///
    /// The WASM dashboard goes through here with `option_env!` captures,
    /// since a browser bundle has no process environment.
    pub fn from_values(
        api_base_url: Option<&str>,
        mapbox_access_token: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = match api_base_url.map(str::trim) {
            Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
            _ => return Err(ConfigError::MissingApiBaseUrl),
        };
        let mapbox_access_token = mapbox_access_token
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string);
        Ok(Self {
            api_base_url,
            mapbox_access_token,
        })
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = std::env::var(API_BASE_URL_VAR).ok();
        let token = std::env::var(MAPBOX_TOKEN_VAR).ok();
        Self::from_values(base.as_deref(), token.as_deref())
    }

    /// The Mapbox token, or a fail-fast error for map consumers.
    pub fn require_map_token(&self) -> Result<&str, ConfigError> {
        self.mapbox_access_token
            .as_deref()
            .ok_or(ConfigError::MissingMapToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_base_url_is_a_config_error() {
        assert_eq!(
            Config::from_values(None, None),
            Err(ConfigError::MissingApiBaseUrl)
        );
        assert_eq!(
            Config::from_values(Some("   "), None),
            Err(ConfigError::MissingApiBaseUrl)
        );
    }

    #[test]
    fn base_url_is_normalized() {
        let config = Config::from_values(Some("https://api.example.test/"), None).unwrap();
        assert_eq!(config.api_base_url, "https://api.example.test");
    }

    #[test]
    fn map_token_is_optional_until_required() {
        let config = Config::from_values(Some("https://api.example.test"), None).unwrap();
        assert_eq!(config.require_map_token(), Err(ConfigError::MissingMapToken));

        let config =
            Config::from_values(Some("https://api.example.test"), Some("pk.test")).unwrap();
        assert_eq!(config.require_map_token(), Ok("pk.test"));
    }

    #[test]
    fn error_message_names_the_variable() {
        let message = ConfigError::MissingApiBaseUrl.to_string();
        assert!(message.contains(API_BASE_URL_VAR));
    }
}
