//! Data source references and query targets used by panels.

use serde::{Deserialize, Serialize};

use crate::copy::copy_optional;
use crate::models::meta::Unstructured;

/// Reference to a configured data source.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct DataSourceRef {
    #[serde(rename = "type", default)]
    pub datasource_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uid: String,
}

impl DataSourceRef {
    pub fn new(datasource_type: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            datasource_type: datasource_type.into(),
            uid: uid.into(),
        }
    }
}

/// A single query target attached to a panel.
///
/// Plugin-specific query fields that have no typed counterpart are kept
/// in `additional`.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataQuery {
    #[serde(default)]
    pub ref_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasource: Option<DataSourceRef>,
    #[serde(default)]
    pub hide: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_data_points: Option<i64>,
    #[serde(rename = "intervalMs", default, skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<f64>,
    #[serde(flatten)]
    pub additional: Unstructured,
}

impl Clone for DataQuery {
    fn clone(&self) -> Self {
        Self {
            ref_id: self.ref_id.clone(),
            query_type: self.query_type.clone(),
            datasource: self.datasource.clone(),
            hide: self.hide,
            max_data_points: self.max_data_points,
            interval_ms: self.interval_ms,
            additional: self.additional.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.ref_id.clone_from(&source.ref_id);
        self.query_type.clone_from(&source.query_type);
        copy_optional(&mut self.datasource, &source.datasource);
        self.hide = source.hide;
        self.max_data_points = source.max_data_points;
        self.interval_ms = source.interval_ms;
        self.additional.clone_from(&source.additional);
    }
}
