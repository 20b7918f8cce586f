//! Logging initialization.
//!
//! Installs a global `tracing-subscriber` registry with an `EnvFilter` and
//! a plain or JSON `fmt` layer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dashboard_api::logging::LoggingConfig;
//!
//! LoggingConfig::new()
//!     .with_filter("dashboard_api=trace")
//!     .try_init()?;
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};

/// Configuration for the global logging subscriber.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives used when `RUST_LOG` is unset
    pub filter: String,
    /// Emit one JSON object per event instead of human-readable lines
    pub json: bool,
    /// Whether to attach a formatting layer at all
    pub enable_stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
            enable_stdout: true,
        }
    }
}

impl From<&ApiConfig> for LoggingConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            filter: config.log_filter.clone(),
            json: config.log_json,
            enable_stdout: true,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn with_stdout(mut self, enable: bool) -> Self {
        self.enable_stdout = enable;
        self
    }

    /// Build the filter, preferring `RUST_LOG` over the configured directives.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_from_default_env().or_else(|_| {
            EnvFilter::try_new(&self.filter)
                .map_err(|e| ApiError::LoggingInit(format!("invalid filter '{}': {e}", self.filter)))
        })
    }

    /// Install the global subscriber.
    ///
    /// # Errors
    /// Returns [`ApiError::LoggingInit`] if the filter is invalid or a
    /// global subscriber is already installed.
    pub fn try_init(&self) -> Result<()> {
        let env_filter = self.env_filter()?;
        let registry = tracing_subscriber::registry().with(env_filter);

        let result = match (self.enable_stdout, self.json) {
            (true, true) => registry.with(fmt::layer().json()).try_init(),
            (true, false) => registry.with(fmt::layer()).try_init(),
            (false, _) => registry.try_init(),
        };
        result.map_err(|e| ApiError::LoggingInit(e.to_string()))
    }
}
