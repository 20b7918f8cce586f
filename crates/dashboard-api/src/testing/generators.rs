//! Deterministic generators for large resource lists.
//!
//! Used by integration tests and benchmarks that need many items with a
//! controllable mix of present and absent optional blocks.

use crate::models::{
    DashboardList, DashboardVersionList, LibraryPanelList, ListMeta, TypeMeta,
};
use crate::testing::{
    API_VERSION, bare_dashboard, sample_dashboard, sample_library_panel, sample_version,
};

/// Generates dashboard lists where every `status_every`-th item has a status.
#[derive(Debug, Clone)]
pub struct DashboardListGenerator {
    item_count: usize,
    status_every: usize,
}

impl Default for DashboardListGenerator {
    fn default() -> Self {
        Self {
            item_count: 10,
            status_every: 2,
        }
    }
}

impl DashboardListGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item_count(mut self, count: usize) -> Self {
        self.item_count = count;
        self
    }

    /// Give a status block to items whose index is a multiple of `every`.
    /// Zero means no item has a status.
    pub fn with_status_every(mut self, every: usize) -> Self {
        self.status_every = every;
        self
    }

    pub fn generate(&self) -> DashboardList {
        let items = (0..self.item_count)
            .map(|i| {
                let name = format!("dash-{i}");
                if self.status_every != 0 && i % self.status_every == 0 {
                    sample_dashboard(&name)
                } else {
                    bare_dashboard(&name)
                }
            })
            .collect();
        DashboardList {
            type_meta: TypeMeta::new(API_VERSION, "DashboardList"),
            list_meta: list_meta(self.item_count),
            items: Some(items),
        }
    }
}

/// Library panel list with `count` fully populated panels.
pub fn library_panel_list(count: usize) -> LibraryPanelList {
    LibraryPanelList {
        type_meta: TypeMeta::new(API_VERSION, "LibraryPanelList"),
        list_meta: list_meta(count),
        items: Some(
            (0..count)
                .map(|i| sample_library_panel(&format!("panel-{i}")))
                .collect(),
        ),
    }
}

/// Version history with versions `1..=count`.
pub fn version_list(count: usize) -> DashboardVersionList {
    DashboardVersionList {
        type_meta: TypeMeta::new(API_VERSION, "DashboardVersionList"),
        list_meta: list_meta(count),
        items: Some((1..=count as i64).map(sample_version).collect()),
    }
}

fn list_meta(count: usize) -> ListMeta {
    ListMeta {
        resource_version: count.to_string(),
        continue_token: String::new(),
        remaining_item_count: None,
    }
}
