//! Calculator configuration
//!
//! ## Configuration Sources
//! Values are resolved from, lowest to highest precedence:
//! 1. Built-in defaults
//! 2. `.env` file in the current directory or parent directories (if present)
//! 3. System environment variables
//! 4. Command-line flags
//!
//! ## Environment Variables
//! - `CALCULATOR_API_URL`: base URL of the arithmetic service
//! - `CALCULATOR_TIMEOUT_SECS`: request timeout in seconds
//! - `CALCULATOR_LOG_LEVEL`: tracing level (trace, debug, info, warn, error)

use std::time::Duration;
use url::Url;

use shared::OperationKind;
use crate::error::{CalculatorError, CalculatorResult};

pub const API_URL_VAR: &str = "CALCULATOR_API_URL";
pub const TIMEOUT_VAR: &str = "CALCULATOR_TIMEOUT_SECS";
pub const LOG_LEVEL_VAR: &str = "CALCULATOR_LOG_LEVEL";

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Resolved calculator configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    pub base_url: Url,
    pub request_timeout: Duration,
    pub log_level: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_URL).unwrap(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Load configuration from `.env` and the process environment
    pub fn from_env() -> CalculatorResult<Self> {
        // Missing .env is fine
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> CalculatorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_VAR) {
            config.base_url = parse_base_url(&url)?;
        }
        if let Some(secs) = lookup(TIMEOUT_VAR) {
            config.request_timeout = parse_timeout(&secs)?;
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level = level;
        }

        Ok(config)
    }

    /// Set the service base URL
    pub fn with_base_url(mut self, url: &str) -> CalculatorResult<Self> {
        self.base_url = parse_base_url(url)?;
        Ok(self)
    }

    /// Set the request timeout in seconds
    pub fn with_timeout_secs(mut self, secs: u64) -> CalculatorResult<Self> {
        self.request_timeout = parse_timeout(&secs.to_string())?;
        Ok(self)
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Full URL of the endpoint serving the given operation
    pub fn endpoint_url(&self, kind: OperationKind) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}{}", self.base_url.path().trim_end_matches('/'), kind.endpoint());
        url.set_path(&path);
        url
    }
}

fn parse_base_url(raw: &str) -> CalculatorResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| CalculatorError::Config {
        message: format!("Invalid API URL '{}': {}", raw, e),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CalculatorError::Config {
            message: format!("Unsupported API URL scheme '{}'", other),
        }),
    }
}

fn parse_timeout(raw: &str) -> CalculatorResult<Duration> {
    let secs: u64 = raw.trim().parse().map_err(|_| CalculatorError::Config {
        message: format!("Invalid timeout '{}'", raw),
    })?;

    if secs == 0 {
        return Err(CalculatorError::Config {
            message: "Timeout must be at least one second".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}
