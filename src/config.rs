//! Backend connection settings

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const BASE_URL_ENV: &str = "TRUSS_API_BASE";
pub const TIMEOUT_ENV: &str = "TRUSS_API_TIMEOUT_SECS";

/// Where the prediction service lives and how long to wait for it
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(&base_url.into())?,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `TRUSS_API_BASE` and `TRUSS_API_TIMEOUT_SECS`.
    ///
    /// Native builds check the process environment first; wasm builds only
    /// see the values baked in at compile time. Bad values are logged and
    /// replaced by the defaults so the UI always comes up.
    pub fn from_env() -> Self {
        let base_url = runtime_var(BASE_URL_ENV)
            .or_else(|| option_env!("TRUSS_API_BASE").map(str::to_string));
        let timeout = runtime_var(TIMEOUT_ENV)
            .or_else(|| option_env!("TRUSS_API_TIMEOUT_SECS").map(str::to_string));
        Self::from_values(base_url.as_deref(), timeout.as_deref())
    }

    pub(crate) fn from_values(base_url: Option<&str>, timeout: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = base_url {
            match normalize_base_url(raw) {
                Ok(url) => config.base_url = url,
                Err(e) => tracing::warn!("{e}; falling back to {DEFAULT_BASE_URL}"),
            }
        }

        if let Some(raw) = timeout {
            match parse_timeout(raw) {
                Ok(timeout) => config.timeout = timeout,
                Err(e) => tracing::warn!("{e}; falling back to {}s", DEFAULT_TIMEOUT.as_secs()),
            }
        }

        config
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"));
    match host {
        Some(host) if !host.is_empty() => Ok(trimmed.to_string()),
        _ => Err(ConfigError::InvalidBaseUrl(raw.to_string())),
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs > 0.0)
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or_else(|| ConfigError::InvalidTimeout(raw.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn runtime_var(_name: &str) -> Option<String> {
    None
}
