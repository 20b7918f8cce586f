//! Dashboard version history models.
//!
//! Version records are flat, so the list copy is an element-wise clone of
//! plain records.

use serde::{Deserialize, Serialize};

use crate::copy::copy_sequence;
use crate::models::meta::{ListMeta, TypeMeta};

/// One saved version of a dashboard.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardVersionInfo {
    #[serde(default)]
    pub version: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub parent_version: i64,
    /// Unix milliseconds
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub created_by: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// Version history list.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DashboardVersionList {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    #[serde(rename = "metadata", default)]
    pub list_meta: ListMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<DashboardVersionInfo>>,
}

impl Clone for DashboardVersionList {
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

/// Query options for the versions subresource.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VersionsQueryOptions {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub start: i64,
    #[serde(rename = "continue", default, skip_serializing_if = "String::is_empty")]
    pub continue_token: String,
}
