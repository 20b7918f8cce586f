//! Identity and metadata blocks shared across resource models.
//!
//! This module contains the type/object/list metadata every resource
//! carries. It does NOT contain resource-specific models.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::copy::{copy_optional, copy_sequence};

/// Free-form JSON object carried verbatim inside resource specs.
pub type Unstructured = serde_json::Map<String, serde_json::Value>;

/// API group version and kind of a serialized resource.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
}

impl TypeMeta {
    pub fn new(api_version: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            api_version: api_version.into(),
            kind: kind.into(),
        }
    }
}

/// Metadata attached to every stored object.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uid: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_version: String,
    #[serde(default)]
    pub generation: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finalizers: Option<Vec<String>>,
}

impl ObjectMeta {
    /// Metadata with only a name and namespace set.
    pub fn named(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Self::default()
        }
    }
}

impl Clone for ObjectMeta {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            namespace: self.namespace.clone(),
            uid: self.uid.clone(),
            resource_version: self.resource_version.clone(),
            generation: self.generation,
            creation_timestamp: self.creation_timestamp.clone(),
            deletion_timestamp: self.deletion_timestamp.clone(),
            labels: self.labels.clone(),
            annotations: self.annotations.clone(),
            finalizers: self.finalizers.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.name.clone_from(&source.name);
        self.namespace.clone_from(&source.namespace);
        self.uid.clone_from(&source.uid);
        self.resource_version.clone_from(&source.resource_version);
        self.generation = source.generation;
        copy_optional(&mut self.creation_timestamp, &source.creation_timestamp);
        copy_optional(&mut self.deletion_timestamp, &source.deletion_timestamp);
        self.labels.clone_from(&source.labels);
        self.annotations.clone_from(&source.annotations);
        copy_sequence(&mut self.finalizers, &source.finalizers);
    }
}

/// Metadata attached to list responses.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource_version: String,
    #[serde(default, rename = "continue", skip_serializing_if = "String::is_empty")]
    pub continue_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_item_count: Option<i64>,
}

impl Clone for ListMeta {
    fn clone(&self) -> Self {
        Self {
            resource_version: self.resource_version.clone(),
            continue_token: self.continue_token.clone(),
            remaining_item_count: self.remaining_item_count,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.resource_version.clone_from(&source.resource_version);
        self.continue_token.clone_from(&source.continue_token);
        self.remaining_item_count = source.remaining_item_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_meta_clone_from_overwrites_everything() {
        let mut source = ObjectMeta::named("home", "default");
        source.labels.insert("team".to_string(), "infra".to_string());
        source.finalizers = Some(vec!["orphan".to_string()]);

        let mut target = ObjectMeta::named("stale", "other");
        target.uid = "uid-stale".to_string();
        target.creation_timestamp = Some("2024-01-01T00:00:00Z".to_string());
        target.clone_from(&source);

        assert_eq!(target, source);
        assert!(target.creation_timestamp.is_none());
    }

    #[test]
    fn test_object_meta_labels_are_independent() {
        let mut source = ObjectMeta::named("home", "default");
        source.labels.insert("team".to_string(), "infra".to_string());

        let mut copy = source.clone();
        copy.labels.insert("team".to_string(), "web".to_string());

        assert_eq!(source.labels["team"], "infra");
    }

    #[test]
    fn test_object_meta_empty_finalizers_not_collapsed() {
        let mut source = ObjectMeta::named("home", "default");
        source.finalizers = Some(Vec::new());
        assert_eq!(source.clone().finalizers, Some(Vec::new()));
    }

    #[test]
    fn test_list_meta_continue_rename() {
        let meta = ListMeta {
            continue_token: "abc".to_string(),
            ..ListMeta::default()
        };
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["continue"], "abc");
    }

    #[test]
    fn test_type_meta_deserialize_camel_case() {
        let json = r#"{"apiVersion": "dashboard.grafana.app/v2alpha1", "kind": "Dashboard"}"#;
        let meta: TypeMeta = serde_json::from_str(json).unwrap();
        assert_eq!(meta, TypeMeta::new("dashboard.grafana.app/v2alpha1", "Dashboard"));
    }
}
