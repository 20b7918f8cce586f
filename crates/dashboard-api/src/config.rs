//! Environment-driven configuration.
//!
//! Responsibilities:
//! - Read the dashboard API version and logging options from environment
//!   variables, optionally after loading a `.env` file.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Invalid values return `ApiError::InvalidConfig` naming the variable.

use crate::api_version::ApiVersion;
use crate::error::{ApiError, Result};

pub const ENV_API_VERSION: &str = "DASHBOARD_API_VERSION";
pub const ENV_LOG_FILTER: &str = "DASHBOARD_LOG_FILTER";
pub const ENV_LOG_JSON: &str = "DASHBOARD_LOG_JSON";

const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration for the dashboard API crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_version: ApiVersion,
    pub log_filter: String,
    pub log_json: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_version: ApiVersion::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_json: false,
        }
    }
}

impl ApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_json(mut self, json: bool) -> Self {
        self.log_json = json;
        self
    }

    /// Build configuration from defaults overridden by environment variables.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Load `.env` from the working directory (if present), then read the environment.
    ///
    /// A missing `.env` file is not an error.
    pub fn load_dotenv() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(ApiError::InvalidConfig {
                    var: ".env".to_string(),
                    message: e.to_string(),
                });
            }
        }
        Self::from_env()
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Some(version) = env_var_or_none(ENV_API_VERSION) {
            self.api_version = version.parse().map_err(|_| ApiError::InvalidConfig {
                var: ENV_API_VERSION.to_string(),
                message: "must be one of legacy, v1, v2".to_string(),
            })?;
        }
        if let Some(filter) = env_var_or_none(ENV_LOG_FILTER) {
            self.log_filter = filter;
        }
        if let Some(json) = env_var_or_none(ENV_LOG_JSON) {
            self.log_json = json.parse().map_err(|_| ApiError::InvalidConfig {
                var: ENV_LOG_JSON.to_string(),
                message: "must be true or false".to_string(),
            })?;
        }
        tracing::debug!(
            api_version = %self.api_version,
            log_filter = %self.log_filter,
            log_json = self.log_json,
            "resolved dashboard API configuration"
        );
        Ok(())
    }
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
