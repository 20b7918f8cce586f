//! Dashboard API version selection.
//!
//! A deployment serves dashboards through one of three API generations.
//! Callers that can consume v2 payloads directly may ask for them; every
//! other caller on a v2 deployment receives payloads converted to v1.

use std::fmt;
use std::str::FromStr;

use crate::error::{ApiError, Result};

/// Dashboard API generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    /// Pre-resource HTTP API
    Legacy,
    #[default]
    V1,
    V2,
}

impl ApiVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }

    /// Pick the client for a request against a deployment running `self`.
    pub fn select(self, request_v2_response: bool) -> ClientSelection {
        match self {
            Self::V2 => ClientSelection {
                version: Self::V2,
                convert_to_v1: !request_v2_response,
            },
            version => ClientSelection {
                version,
                convert_to_v1: false,
            },
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            _ => Err(ApiError::UnknownApiVersion(s.to_string())),
        }
    }
}

/// Which client serves a request, and whether v2 payloads are downgraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientSelection {
    pub version: ApiVersion,
    pub convert_to_v1: bool,
}
