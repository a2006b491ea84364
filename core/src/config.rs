//! Configuration for catalog client construction.

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::BuildError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// Environment variable overriding the service base URL.
pub const BASE_URL_ENV: &str = "MOVIE_SERVICE_URL";
/// Environment variable holding the transport timeout in milliseconds.
pub const TIMEOUT_ENV: &str = "MOVIE_SERVICE_TIMEOUT_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the movie service, without the `/movieservice` prefix.
    pub base_url: String,
    /// Per-request timeout enforced by the transport. `None` leaves the
    /// transport's own default in place.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a config from `MOVIE_SERVICE_URL` and `MOVIE_SERVICE_TIMEOUT_MS`,
    /// falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, BuildError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BuildError> {
        let mut config = Self::default();
        if let Some(url) = lookup(BASE_URL_ENV) {
            config.base_url = url;
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let millis: u64 = raw.trim().parse().map_err(|_| BuildError::InvalidSetting {
                name: TIMEOUT_ENV,
                value: raw.clone(),
            })?;
            config.timeout = Some(Duration::from_millis(millis));
        }
        config.validate()?;
        Ok(config)
    }

    /// Check that `base_url` is an absolute URL.
    pub fn validate(&self) -> Result<(), BuildError> {
        Url::parse(&self.base_url).map_err(|source| BuildError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        Ok(())
    }
}
