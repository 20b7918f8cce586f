//! Integration tests for type-erased resource handles.
//!
//! Exercises the handle the way generic list/storage code does: a
//! heterogeneous collection of handles copied without knowing their types.

use dashboard_api::models::{Dashboard, DashboardList, LibraryPanel, VersionsQueryOptions};
use dashboard_api::testing::generators::{DashboardListGenerator, library_panel_list, version_list};
use dashboard_api::testing::{sample_dashboard, sample_dashboard_with_access, sample_library_panel};
use dashboard_api::{ApiError, Resource, ResourceHandle, ResourceKind, clone_as_resource_handle};

fn all_kinds() -> Vec<ResourceHandle> {
    vec![
        ResourceHandle::new(sample_dashboard("home")),
        ResourceHandle::new(DashboardListGenerator::new().with_item_count(3).generate()),
        ResourceHandle::new(version_list(2)),
        ResourceHandle::new(sample_dashboard_with_access("home")),
        ResourceHandle::new(sample_library_panel("latency")),
        ResourceHandle::new(library_panel_list(2)),
        ResourceHandle::new(VersionsQueryOptions::default()),
    ]
}

#[test]
fn test_every_kind_is_covered() {
    let kinds: Vec<ResourceKind> = all_kinds().iter().map(ResourceHandle::kind).collect();
    assert_eq!(kinds, ResourceKind::ALL.to_vec());
}

#[test]
fn test_generic_copy_without_type_switch() {
    let handles = all_kinds();
    let copies: Vec<ResourceHandle> = handles
        .iter()
        .map(|h| h.resource().deep_copy_object())
        .collect();

    for (original, copy) in handles.iter().zip(&copies) {
        assert_eq!(original.kind(), copy.kind());
        assert_eq!(format!("{original:?}"), format!("{copy:?}"));
    }
}

#[test]
fn test_handle_copy_is_independent_of_source() {
    let source = sample_library_panel("latency");
    let mut handle = clone_as_resource_handle(Some(&source)).unwrap();

    let panel = handle.downcast_mut::<LibraryPanel>().unwrap();
    panel.spec.targets.as_mut().unwrap().clear();
    panel.status = None;

    assert_eq!(source.spec.targets.as_ref().unwrap().len(), 2);
    assert!(source.status.is_some());
}

#[test]
fn test_cloned_handles_are_independent() {
    let original = ResourceHandle::new(DashboardListGenerator::new().with_item_count(2).generate());
    let mut copy = original.clone();
    copy.downcast_mut::<DashboardList>().unwrap().items = None;

    let items = original.downcast_ref::<DashboardList>().unwrap().items.as_ref();
    assert_eq!(items.map(Vec::len), Some(2));
}

#[test]
fn test_absent_receiver_returns_none() {
    let absent: Option<&DashboardList> = None;
    assert!(clone_as_resource_handle(absent).is_none());

    let maybe_dyn: Option<&dyn Resource> = None;
    assert!(clone_as_resource_handle(maybe_dyn).is_none());
}

#[test]
fn test_dyn_receiver_copies() {
    let dashboard = sample_dashboard("home");
    let as_dyn: &dyn Resource = &dashboard;
    let handle = clone_as_resource_handle(Some(as_dyn)).unwrap();
    assert_eq!(handle.into_typed::<Dashboard>().unwrap(), dashboard);
}

#[test]
fn test_downcast_to_wrong_type() {
    let handle = ResourceHandle::new(sample_dashboard("home"));
    assert!(handle.downcast_ref::<LibraryPanel>().is_none());

    let err = handle.into_typed::<VersionsQueryOptions>().unwrap_err();
    assert_eq!(
        err,
        ApiError::KindMismatch {
            expected: ResourceKind::VersionsQueryOptions,
            found: ResourceKind::Dashboard,
        }
    );
}

#[test]
fn test_handle_type_meta_matches_payload() {
    for handle in all_kinds() {
        if handle.kind() == ResourceKind::VersionsQueryOptions {
            assert!(handle.type_meta().kind.is_empty());
            continue;
        }
        assert!(!handle.type_meta().api_version.is_empty());
    }
}

#[test]
fn test_handles_move_across_threads() {
    let handle = ResourceHandle::new(sample_dashboard("home"));
    let copy = handle.clone();
    let kind = std::thread::spawn(move || copy.kind()).join().unwrap();
    assert_eq!(kind, handle.kind());
}
