//! Library panel models.
//!
//! A library panel is a reusable panel definition shared between
//! dashboards. Its spec carries an optional data source reference and an
//! ordered list of query targets.

use serde::{Deserialize, Serialize};

use crate::copy::{copy_optional, copy_sequence};
use crate::models::data::{DataQuery, DataSourceRef};
use crate::models::meta::{ListMeta, ObjectMeta, TypeMeta, Unstructured};

/// Library panel definition.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LibraryPanelSpec {
    /// Panel plugin id (e.g. `timeseries`)
    #[serde(rename = "type", default)]
    pub panel_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub plugin_version: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub options: Unstructured,
    #[serde(default)]
    pub field_config: Unstructured,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasource: Option<DataSourceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<DataQuery>>,
}

impl Clone for LibraryPanelSpec {
    fn clone(&self) -> Self {
        Self {
            panel_type: self.panel_type.clone(),
            plugin_version: self.plugin_version.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            options: self.options.clone(),
            field_config: self.field_config.clone(),
            datasource: self.datasource.clone(),
            targets: self.targets.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.panel_type.clone_from(&source.panel_type);
        self.plugin_version.clone_from(&source.plugin_version);
        self.title.clone_from(&source.title);
        self.description.clone_from(&source.description);
        self.options.clone_from(&source.options);
        self.field_config.clone_from(&source.field_config);
        copy_optional(&mut self.datasource, &source.datasource);
        copy_sequence(&mut self.targets, &source.targets);
    }
}

/// Library panel status: conversion warnings and unresolved references.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct LibraryPanelStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    /// Raw element that could not be converted
    #[serde(default)]
    pub missing: Unstructured,
}

impl Clone for LibraryPanelStatus {
    fn clone(&self) -> Self {
        Self {
            warnings: self.warnings.clone(),
            missing: self.missing.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        copy_sequence(&mut self.warnings, &source.warnings);
        self.missing.clone_from(&source.missing);
    }
}

/// Library panel resource.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct LibraryPanel {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: LibraryPanelSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<LibraryPanelStatus>,
}

impl Clone for LibraryPanel {
    fn clone(&self) -> Self {
        Self {
            type_meta: self.type_meta.clone(),
            metadata: self.metadata.clone(),
            spec: self.spec.clone(),
            status: self.status.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.type_meta.clone_from(&source.type_meta);
        self.metadata.clone_from(&source.metadata);
        self.spec.clone_from(&source.spec);
        copy_optional(&mut self.status, &source.status);
    }
}

/// Library panel list response.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct LibraryPanelList {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    #[serde(rename = "metadata", default)]
    pub list_meta: ListMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<LibraryPanel>>,
}

impl Clone for LibraryPanelList {
    fn clone(&self) -> Self {
        Self {
            type_meta: self.type_meta.clone(),
            list_meta: self.list_meta.clone(),
            items: self.items.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.type_meta.clone_from(&source.type_meta);
        self.list_meta.clone_from(&source.list_meta);
        copy_sequence(&mut self.items, &source.items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(ref_id: &str) -> DataQuery {
        DataQuery {
            ref_id: ref_id.to_string(),
            ..DataQuery::default()
        }
    }

    #[test]
    fn test_spec_empty_targets_stay_allocated() {
        let spec = LibraryPanelSpec {
            targets: Some(Vec::new()),
            ..LibraryPanelSpec::default()
        };
        let copy = spec.clone();
        assert_eq!(copy.targets.as_ref().map(Vec::len), Some(0));
    }

    #[test]
    fn test_spec_nil_targets_stay_nil() {
        let spec = LibraryPanelSpec::default();
        assert!(spec.clone().targets.is_none());
    }

    #[test]
    fn test_spec_targets_keep_order() {
        let spec = LibraryPanelSpec {
            targets: Some(vec![query("A"), query("B"), query("C")]),
            ..LibraryPanelSpec::default()
        };
        let ids: Vec<String> = spec
            .clone()
            .targets
            .unwrap()
            .into_iter()
            .map(|q| q.ref_id)
            .collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_spec_datasource_independent() {
        let spec = LibraryPanelSpec {
            datasource: Some(DataSourceRef::new("prometheus", "prom-1")),
            ..LibraryPanelSpec::default()
        };
        let mut copy = spec.clone();
        copy.datasource.as_mut().unwrap().uid = "prom-2".to_string();
        assert_eq!(spec.datasource.unwrap().uid, "prom-1");
    }

    #[test]
    fn test_status_warnings_independent() {
        let status = LibraryPanelStatus {
            warnings: Some(vec!["legacy graph panel".to_string()]),
            missing: Unstructured::new(),
        };
        let mut copy = status.clone();
        copy.warnings.as_mut().unwrap().push("extra".to_string());
        assert_eq!(status.warnings.unwrap().len(), 1);
    }

    #[test]
    fn test_panel_clone_from_reuses_targets() {
        let source = LibraryPanel {
            spec: LibraryPanelSpec {
                targets: Some(vec![query("A")]),
                ..LibraryPanelSpec::default()
            },
            ..LibraryPanel::default()
        };
        let mut target = LibraryPanel {
            spec: LibraryPanelSpec {
                targets: Some(vec![query("X"), query("Y")]),
                ..LibraryPanelSpec::default()
            },
            status: Some(LibraryPanelStatus::default()),
            ..LibraryPanel::default()
        };
        target.clone_from(&source);
        assert_eq!(target, source);
        assert!(target.status.is_none());
    }

    #[test]
    fn test_panel_spec_wire_names() {
        let json = r#"{
            "type": "timeseries",
            "pluginVersion": "11.0.0",
            "title": "CPU",
            "fieldConfig": {"defaults": {}},
            "targets": []
        }"#;
        let spec: LibraryPanelSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.panel_type, "timeseries");
        assert_eq!(spec.plugin_version, "11.0.0");
        assert!(spec.field_config.contains_key("defaults"));
        assert_eq!(spec.targets, Some(Vec::new()));
    }
}
