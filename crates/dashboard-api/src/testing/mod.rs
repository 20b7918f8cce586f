//! Testing utilities for dashboard API tests.
//!
//! This module provides fixture builders for fully populated resources and
//! bulk generators for larger lists. Available when running tests or when
//! the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use dashboard_api::testing::{sample_dashboard, generators::DashboardListGenerator};
//!
//! let dashboard = sample_dashboard("home");
//! let list = DashboardListGenerator::new().with_item_count(100).generate();
//! ```

pub mod generators;

use serde_json::json;

use crate::models::{
    AnnotationActions, AnnotationPermission, ConversionStatus, Dashboard, DashboardAccess,
    DashboardSpec, DashboardStatus, DashboardVersionInfo, DashboardWithAccessInfo, DataQuery,
    DataSourceRef, LibraryPanel, LibraryPanelSpec, LibraryPanelStatus, ObjectMeta, TypeMeta,
    Unstructured,
};

pub const API_VERSION: &str = "dashboard.grafana.app/v2alpha1";

fn object(value: serde_json::Value) -> Unstructured {
    match value {
        serde_json::Value::Object(map) => map,
        _ => Unstructured::new(),
    }
}

/// Object metadata with labels, annotations and finalizers populated.
pub fn sample_meta(name: &str) -> ObjectMeta {
    let mut meta = ObjectMeta::named(name, "default");
    meta.uid = format!("uid-{name}");
    meta.resource_version = "1".to_string();
    meta.generation = 1;
    meta.creation_timestamp = Some("2024-05-01T12:00:00Z".to_string());
    meta.labels.insert("team".to_string(), "platform".to_string());
    meta.annotations
        .insert("grafana.app/folder".to_string(), "ops".to_string());
    meta.finalizers = Some(vec!["dashboard.grafana.app/cleanup".to_string()]);
    meta
}

/// Conversion status recording a failed downgrade.
pub fn sample_conversion() -> ConversionStatus {
    ConversionStatus {
        failed: true,
        stored_version: "v1alpha1".to_string(),
        error: "row panels cannot be converted".to_string(),
    }
}

/// Dashboard with every optional block present.
pub fn sample_dashboard(name: &str) -> Dashboard {
    Dashboard {
        type_meta: TypeMeta::new(API_VERSION, "Dashboard"),
        metadata: sample_meta(name),
        spec: DashboardSpec {
            title: format!("{name} overview"),
            description: Some("Service health".to_string()),
            tags: Some(vec!["ops".to_string(), "prod".to_string()]),
            editable: true,
            elements: object(json!({
                "panel-1": {"kind": "Panel", "spec": {"title": "Requests"}}
            })),
            layout: object(json!({"kind": "GridLayout", "spec": {"items": []}})),
        },
        status: Some(DashboardStatus {
            message: Some("stored as v1alpha1".to_string()),
            conversion: Some(sample_conversion()),
        }),
    }
}

/// Dashboard with no status block.
pub fn bare_dashboard(name: &str) -> Dashboard {
    Dashboard {
        type_meta: TypeMeta::new(API_VERSION, "Dashboard"),
        metadata: ObjectMeta::named(name, "default"),
        spec: DashboardSpec {
            title: name.to_string(),
            ..DashboardSpec::default()
        },
        status: None,
    }
}

/// Access block for a user who can edit and annotate.
pub fn sample_access() -> DashboardAccess {
    DashboardAccess {
        slug: Some("home".to_string()),
        url: Some("/d/home/home".to_string()),
        is_public: false,
        can_save: true,
        can_edit: true,
        can_admin: false,
        can_star: true,
        can_delete: false,
        annotations_permissions: Some(AnnotationPermission {
            dashboard: AnnotationActions {
                can_add: true,
                can_edit: true,
                can_delete: true,
            },
            organization: AnnotationActions {
                can_add: true,
                can_edit: false,
                can_delete: false,
            },
        }),
    }
}

pub fn sample_dashboard_with_access(name: &str) -> DashboardWithAccessInfo {
    DashboardWithAccessInfo {
        dashboard: sample_dashboard(name),
        access: sample_access(),
    }
}

/// Query target against the given data source uid.
pub fn sample_query(ref_id: &str, uid: &str) -> DataQuery {
    DataQuery {
        ref_id: ref_id.to_string(),
        query_type: "range".to_string(),
        datasource: Some(DataSourceRef::new("prometheus", uid)),
        hide: false,
        max_data_points: Some(500),
        interval_ms: Some(15_000.0),
        additional: object(json!({"expr": "rate(http_requests_total[5m])"})),
    }
}

/// Library panel with a data source, two targets and a status.
pub fn sample_library_panel(name: &str) -> LibraryPanel {
    LibraryPanel {
        type_meta: TypeMeta::new(API_VERSION, "LibraryPanel"),
        metadata: sample_meta(name),
        spec: LibraryPanelSpec {
            panel_type: "timeseries".to_string(),
            plugin_version: "11.0.0".to_string(),
            title: format!("{name} latency"),
            description: "p95 latency".to_string(),
            options: object(json!({"legend": {"showLegend": true}})),
            field_config: object(json!({"defaults": {"unit": "ms"}})),
            datasource: Some(DataSourceRef::new("prometheus", "prom-1")),
            targets: Some(vec![
                sample_query("A", "prom-1"),
                sample_query("B", "prom-1"),
            ]),
        },
        status: Some(LibraryPanelStatus {
            warnings: Some(vec!["angular panel migrated".to_string()]),
            missing: object(json!({"type": "graph"})),
        }),
    }
}

pub fn sample_version(version: i64) -> DashboardVersionInfo {
    DashboardVersionInfo {
        version,
        parent_version: version - 1,
        created: 1_714_564_800_000 + version * 60_000,
        created_by: "admin".to_string(),
        message: format!("save #{version}"),
    }
}
