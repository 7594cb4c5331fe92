//! Frontend configuration

use thiserror::Error;
use url::Url;

/// Remote origin serving the user and workspace API
pub const DEFAULT_API_URL: &str = "https://box-201.arbibox.com";

/// Session storage keys
pub struct StorageKeys;

impl StorageKeys {
    /// Key holding the bearer token presented to protected endpoints
    pub const ACCESS_TOKEN: &'static str = "access_token";

    /// Key holding the refresh token (stored, never used by the client)
    pub const REFRESH_TOKEN: &'static str = "refresh_token";
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    api_url: String,
}

impl PortalConfig {
    /// Build a config for the given API origin.
    ///
    /// The origin must be an absolute http(s) URL; a trailing slash is dropped.
    pub fn new(api_url: impl Into<String>) -> Result<Self, ConfigError> {
        let api_url = api_url.into();
        let invalid = |reason: String| ConfigError::InvalidApiUrl {
            url: api_url.clone(),
            reason,
        };

        let parsed = Url::parse(&api_url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
        }

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Use `override_url` when given and valid, otherwise the default origin
    pub fn from_override(override_url: Option<&str>) -> Self {
        match override_url.map(Self::new) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                tracing::warn!("Ignoring API URL override: {}", e);
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_remote_origin() {
        assert_eq!(PortalConfig::default().api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let config = PortalConfig::new("http://localhost:8000/").unwrap();
        assert_eq!(config.api_url(), "http://localhost:8000");
    }

    #[test]
    fn rejects_relative_and_non_http_urls() {
        assert!(matches!(
            PortalConfig::new("/api"),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
        assert!(matches!(
            PortalConfig::new("ftp://example.com"),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
    }

    #[test]
    fn invalid_override_falls_back_to_default() {
        assert_eq!(
            PortalConfig::from_override(Some("not a url")),
            PortalConfig::default()
        );
        assert_eq!(
            PortalConfig::from_override(Some("http://127.0.0.1:3000")).api_url(),
            "http://127.0.0.1:3000"
        );
        assert_eq!(PortalConfig::from_override(None), PortalConfig::default());
    }
}
