//! Data models for dashboard API resources.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access. Every composite implements `Clone` by hand so
//! that `clone_from` reuses the destination's storage field by field.

pub mod access;
pub mod dashboard;
pub mod data;
pub mod library_panel;
pub mod meta;
pub mod versions;

pub use access::{AnnotationActions, AnnotationPermission, DashboardAccess, DashboardWithAccessInfo};
pub use dashboard::{ConversionStatus, Dashboard, DashboardList, DashboardSpec, DashboardStatus};
pub use data::{DataQuery, DataSourceRef};
pub use library_panel::{LibraryPanel, LibraryPanelList, LibraryPanelSpec, LibraryPanelStatus};
pub use meta::{ListMeta, ObjectMeta, TypeMeta, Unstructured};
pub use versions::{DashboardVersionInfo, DashboardVersionList, VersionsQueryOptions};
