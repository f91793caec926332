use crate::error::{Error, Result};
use std::env;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.prd.realitydefender.xyz";

/// Per-request HTTP timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "REALITY_DEFENDER_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "REALITY_DEFENDER_BASE_URL";

/// Client configuration.
///
/// Only the credential is required; everything else falls back to the
/// service defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Static credential sent as `X-API-KEY`
    pub api_key: String,

    /// Service root, without a trailing slash
    pub base_url: Option<String>,

    /// Timeout in seconds for a single HTTP request (not a whole poll)
    pub timeout_seconds: Option<u64>,
}

impl Config {
    /// Configuration with the given key and default everything else
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Read the key and optional base URL from the environment
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV)
            .map_err(|_| Error::Unauthorized("API key is required".to_string()))?;
        let base_url = env::var(BASE_URL_ENV).ok();

        let config = Self {
            api_key,
            base_url,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the credential and base URL; both failures are construction-time
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Unauthorized("API key is required".to_string()));
        }

        match self.base_url.as_deref() {
            Some(url) if url.trim().is_empty() => Err(Error::InvalidRequest(
                "Base URL cannot be empty".to_string(),
            )),
            _ => Ok(()),
        }
    }

    pub fn get_base_url(&self) -> String {
        self.base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn get_timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}
