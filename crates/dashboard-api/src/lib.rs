//! Dashboard API resource types.
//!
//! This crate provides the versioned dashboard resources (dashboards,
//! library panels, version history, access-info wrappers) exchanged by value
//! across API boundaries. Every resource deep-copies through `Clone`:
//! `clone` produces an independent value and `clone_from` copies into an
//! existing destination, keeping absent fields absent and nil lists nil.
//! Top-level resources are also reachable through the type-erased
//! [`ResourceHandle`].

pub mod api_version;
pub mod config;
pub mod copy;
pub mod error;
pub mod logging;
pub mod models;
pub mod resource;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use api_version::{ApiVersion, ClientSelection};
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use logging::LoggingConfig;
pub use models::{
    AnnotationActions, AnnotationPermission, ConversionStatus, Dashboard, DashboardAccess,
    DashboardList, DashboardSpec, DashboardStatus, DashboardVersionInfo, DashboardVersionList,
    DashboardWithAccessInfo, DataQuery, DataSourceRef, LibraryPanel, LibraryPanelList,
    LibraryPanelSpec, LibraryPanelStatus, ListMeta, ObjectMeta, TypeMeta, VersionsQueryOptions,
};
pub use resource::{
    Resource, ResourceHandle, ResourceKind, ResourceType, clone_as_resource_handle,
};
