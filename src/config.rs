use crate::error::{Error, Result};
use std::env;

/// Environment variable holding the backend base URL
pub const BASE_URL_ENV: &str = "BACKEND_URL";

/// Environment variable holding the request timeout in seconds
pub const TIMEOUT_ENV: &str = "UPLOAD_TIMEOUT_SECONDS";

/// Default timeout in seconds for HTTP requests
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Configuration for the constraints client
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Base URL of the backend serving `/upload/constraints`
    pub base_url: Option<String>,

    /// Timeout in seconds for HTTP requests
    pub timeout_seconds: Option<u64>,
}

impl Config {
    /// Build a configuration from `BACKEND_URL` and `UPLOAD_TIMEOUT_SECONDS`.
    ///
    /// Unset or empty variables are left as `None`; a timeout that is not a
    /// number is an error.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty());

        let timeout_seconds = match env::var(TIMEOUT_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Some(raw.trim().parse::<u64>().map_err(|_| {
                Error::InvalidConfig(format!("{TIMEOUT_ENV} must be a whole number of seconds"))
            })?),
            _ => None,
        };

        Ok(Self {
            base_url,
            timeout_seconds,
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let url = match &self.base_url {
            Some(url) if !url.trim().is_empty() => url,
            _ => return Err(Error::InvalidConfig("Base URL is not configured".to_string())),
        };

        crate::utils::is_valid_url(url)?;

        if self.timeout_seconds == Some(0) {
            return Err(Error::InvalidConfig(
                "Timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the base URL without a trailing slash
    pub fn get_base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or_default()
            .trim()
            .trim_end_matches('/')
            .to_string()
    }

    /// Get the timeout in seconds, falling back to the default if not set
    pub fn get_timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}
