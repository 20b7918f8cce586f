//! Error types for the dashboard API crate.
//!
//! Deep copies never fail; these errors cover the surfaces around them
//! (typed handle recovery, version and kind parsing, configuration and
//! logging setup).

use thiserror::Error;

use crate::resource::ResourceKind;

/// Result type alias for dashboard API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur when working with dashboard API resources.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A resource handle held a different kind than the caller asked for.
    #[error("Resource kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        expected: ResourceKind,
        found: ResourceKind,
    },

    /// Unknown dashboard API version string.
    #[error("Unknown Dashboard API version: {0}")]
    UnknownApiVersion(String),

    /// Unknown resource kind string.
    #[error("Unknown resource kind: {0}")]
    UnknownResourceKind(String),

    /// Invalid configuration value.
    #[error("Invalid value for {var}: {message}")]
    InvalidConfig { var: String, message: String },

    /// Logging subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),
}

impl ApiError {
    /// Check if this error came from configuration or environment input.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownApiVersion(_) | Self::InvalidConfig { .. }
        )
    }
}
