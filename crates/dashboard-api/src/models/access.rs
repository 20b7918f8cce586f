//! Access-info models returned alongside a dashboard.

use serde::{Deserialize, Serialize};

use crate::copy::{copy_optional, copy_optional_value};
use crate::models::dashboard::Dashboard;

/// Annotation actions a user may perform at one scope.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationActions {
    #[serde(default)]
    pub can_add: bool,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub can_delete: bool,
}

/// Annotation permissions for the dashboard and organization scopes.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationPermission {
    #[serde(default)]
    pub dashboard: AnnotationActions,
    #[serde(default)]
    pub organization: AnnotationActions,
}

/// What the requesting user may do with a dashboard.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAccess {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub can_save: bool,
    #[serde(default)]
    pub can_edit: bool,
    #[serde(default)]
    pub can_admin: bool,
    #[serde(default)]
    pub can_star: bool,
    #[serde(default)]
    pub can_delete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations_permissions: Option<AnnotationPermission>,
}

impl Clone for DashboardAccess {
    fn clone(&self) -> Self {
        Self {
            slug: self.slug.clone(),
            url: self.url.clone(),
            is_public: self.is_public,
            can_save: self.can_save,
            can_edit: self.can_edit,
            can_admin: self.can_admin,
            can_star: self.can_star,
            can_delete: self.can_delete,
            annotations_permissions: self.annotations_permissions,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        copy_optional(&mut self.slug, &source.slug);
        copy_optional(&mut self.url, &source.url);
        self.is_public = source.is_public;
        self.can_save = source.can_save;
        self.can_edit = source.can_edit;
        self.can_admin = source.can_admin;
        self.can_star = source.can_star;
        self.can_delete = source.can_delete;
        copy_optional_value(
            &mut self.annotations_permissions,
            &source.annotations_permissions,
        );
    }
}

/// A dashboard together with the caller's access to it.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct DashboardWithAccessInfo {
    #[serde(flatten)]
    pub dashboard: Dashboard,
    #[serde(default)]
    pub access: DashboardAccess,
}

impl Clone for DashboardWithAccessInfo {
    fn clone(&self) -> Self {
        Self {
            dashboard: self.dashboard.clone(),
            access: self.access.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.dashboard.clone_from(&source.dashboard);
        self.access.clone_from(&source.access);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::meta::ObjectMeta;

    fn editor_access() -> DashboardAccess {
        DashboardAccess {
            slug: Some("home".to_string()),
            url: Some("/d/home/home".to_string()),
            can_save: true,
            can_edit: true,
            annotations_permissions: Some(AnnotationPermission {
                dashboard: AnnotationActions {
                    can_add: true,
                    can_edit: true,
                    can_delete: false,
                },
                organization: AnnotationActions::default(),
            }),
            ..DashboardAccess::default()
        }
    }

    #[test]
    fn test_access_clone_permissions_independent() {
        let source = editor_access();
        let mut copy = source.clone();
        copy.annotations_permissions
            .as_mut()
            .unwrap()
            .dashboard
            .can_delete = true;

        assert!(
            !source
                .annotations_permissions
                .unwrap()
                .dashboard
                .can_delete
        );
    }

    #[test]
    fn test_access_clone_from_absent_permissions() {
        let mut target = editor_access();
        target.clone_from(&DashboardAccess::default());
        assert_eq!(target, DashboardAccess::default());
        assert!(target.annotations_permissions.is_none());
    }

    #[test]
    fn test_with_access_info_delegates_to_parts() {
        let source = DashboardWithAccessInfo {
            dashboard: Dashboard {
                metadata: ObjectMeta::named("home", "default"),
                ..Dashboard::default()
            },
            access: editor_access(),
        };

        let mut copy = source.clone();
        assert_eq!(copy, source);

        copy.dashboard.metadata.name = "renamed".to_string();
        copy.access.slug = None;
        assert_eq!(source.dashboard.metadata.name, "home");
        assert_eq!(source.access.slug.as_deref(), Some("home"));
    }

    #[test]
    fn test_with_access_info_wire_shape() {
        let json = r#"{
            "kind": "DashboardWithAccessInfo",
            "metadata": {"name": "home"},
            "spec": {"title": "Home"},
            "access": {
                "canSave": true,
                "annotationsPermissions": {
                    "dashboard": {"canAdd": true},
                    "organization": {}
                }
            }
        }"#;
        let info: DashboardWithAccessInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.dashboard.spec.title, "Home");
        assert!(info.access.can_save);
        assert!(
            info.access
                .annotations_permissions
                .unwrap()
                .dashboard
                .can_add
        );
    }
}
