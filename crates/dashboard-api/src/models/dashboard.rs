//! Dashboard resource models.
//!
//! This module contains the dashboard resource, its spec and status blocks,
//! and the dashboard list container.
//!
//! # What this module handles:
//! - Dashboard spec and status types
//! - Deep copies that keep absent status/conversion blocks absent
//!
//! # What this module does NOT handle:
//! - Access-info wrappers (see [`crate::models::access`])
//! - Generic handle dispatch (see [`crate::resource`])

use serde::{Deserialize, Serialize};

use crate::copy::{copy_optional, copy_sequence};
use crate::models::meta::{ListMeta, ObjectMeta, TypeMeta, Unstructured};

/// Outcome of converting a stored dashboard to the requested version.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionStatus {
    #[serde(default)]
    pub failed: bool,
    #[serde(default)]
    pub stored_version: String,
    #[serde(default)]
    pub error: String,
}

/// Status block of a dashboard.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DashboardStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion: Option<ConversionStatus>,
}

impl Clone for DashboardStatus {
    fn clone(&self) -> Self {
        Self {
            message: self.message.clone(),
            conversion: self.conversion.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        copy_optional(&mut self.message, &source.message);
        copy_optional(&mut self.conversion, &source.conversion);
    }
}

/// Dashboard body: title, tags and the panel/layout documents.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct DashboardSpec {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub editable: bool,
    /// Panel and library-panel elements keyed by element name
    #[serde(default)]
    pub elements: Unstructured,
    #[serde(default)]
    pub layout: Unstructured,
}

impl Clone for DashboardSpec {
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            description: self.description.clone(),
            tags: self.tags.clone(),
            editable: self.editable,
            elements: self.elements.clone(),
            layout: self.layout.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.title.clone_from(&source.title);
        copy_optional(&mut self.description, &source.description);
        copy_sequence(&mut self.tags, &source.tags);
        self.editable = source.editable;
        self.elements.clone_from(&source.elements);
        self.layout.clone_from(&source.layout);
    }
}

/// Dashboard resource.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Dashboard {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: DashboardSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DashboardStatus>,
}

impl Clone for Dashboard {
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

/// Dashboard list response.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct DashboardList {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    #[serde(rename = "metadata", default)]
    pub list_meta: ListMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Dashboard>>,
}

impl Clone for DashboardList {
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
