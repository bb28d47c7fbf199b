//! Runtime configuration for the catalog client.
//!
//! The provider credential has no built-in fallback: it must be supplied
//! through the command line or the `NASA_API_KEY` environment variable.

use std::time::Duration;

use thiserror::Error;

/// Default near-Earth-object catalog endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov/neo/rest/v1";

/// Default upstream request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Environment variable holding the provider credential.
pub const API_KEY_ENV: &str = "NASA_API_KEY";

/// Environment variable overriding the catalog base URL.
pub const BASE_URL_ENV: &str = "NEO_BASE_URL";

/// Environment variable overriding the request timeout.
pub const TIMEOUT_ENV: &str = "NEO_TIMEOUT_SECS";

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing catalog API key: pass --api-key or set NASA_API_KEY")]
    MissingApiKey,

    #[error("invalid timeout {0:?}: expected a positive whole number of seconds")]
    InvalidTimeout(String),

    #[error("invalid base URL {0:?}")]
    InvalidBaseUrl(String),
}

/// Catalog client configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Provider credential appended to every request.
    pub api_key: String,
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Create a configuration with the default base URL and timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Replace the base URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    /// Replace the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Result<Self, ConfigError> {
        if secs == 0 {
            return Err(ConfigError::InvalidTimeout(secs.to_string()));
        }
        self.timeout = Duration::from_secs(secs);
        Ok(self)
    }

    /// Resolve configuration from explicit values, falling back to the
    /// environment for anything left unset.
    pub fn resolve(
        api_key: Option<String>,
        base_url: Option<String>,
        timeout_secs: Option<String>,
    ) -> Result<Self, ConfigError> {
        Self::resolve_with(api_key, base_url, timeout_secs, |name| std::env::var(name).ok())
    }

    /// Same as [`Config::resolve`] with an injectable environment lookup.
    pub fn resolve_with(
        api_key: Option<String>,
        base_url: Option<String>,
        timeout_secs: Option<String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key
            .or_else(|| env(API_KEY_ENV))
            .ok_or(ConfigError::MissingApiKey)?;
        let mut config = Self::new(api_key)?;

        if let Some(url) = base_url.or_else(|| env(BASE_URL_ENV)) {
            config = config.with_base_url(&url)?;
        }

        if let Some(raw) = timeout_secs.or_else(|| env(TIMEOUT_ENV)) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
            config = config.with_timeout_secs(secs)?;
        }

        Ok(config)
    }
}
