//! Type-erased resource handles.
//!
//! Responsibilities:
//! - Expose every top-level resource through the [`Resource`] capability so
//!   generic code can deep-copy it without knowing the concrete type.
//! - Recover the concrete type from a [`ResourceHandle`].
//!
//! Does NOT handle:
//! - Field-level copying (each model's `Clone` impl).
//! - Registration of kinds with a scheme or serializer.
//!
//! Invariants:
//! - A handle owns its resource; cloning a handle deep-copies the resource.
//! - An absent receiver yields an absent handle, never a handle to a default value.

use std::any::Any;
use std::fmt;
use std::str::FromStr;

use crate::error::{ApiError, Result};
use crate::models::{
    Dashboard, DashboardList, DashboardVersionList, DashboardWithAccessInfo, LibraryPanel,
    LibraryPanelList, TypeMeta, VersionsQueryOptions,
};

/// Kinds of resources that can travel behind a [`ResourceHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Dashboard,
    DashboardList,
    DashboardVersionList,
    DashboardWithAccessInfo,
    LibraryPanel,
    LibraryPanelList,
    VersionsQueryOptions,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 7] = [
        Self::Dashboard,
        Self::DashboardList,
        Self::DashboardVersionList,
        Self::DashboardWithAccessInfo,
        Self::LibraryPanel,
        Self::LibraryPanelList,
        Self::VersionsQueryOptions,
    ];

    /// The `kind` string used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::DashboardList => "DashboardList",
            Self::DashboardVersionList => "DashboardVersionList",
            Self::DashboardWithAccessInfo => "DashboardWithAccessInfo",
            Self::LibraryPanel => "LibraryPanel",
            Self::LibraryPanelList => "LibraryPanelList",
            Self::VersionsQueryOptions => "VersionsQueryOptions",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ApiError::UnknownResourceKind(s.to_string()))
    }
}

/// Capability shared by every resource that generic infrastructure stores.
pub trait Resource: Any + fmt::Debug + Send + Sync + 'static {
    fn kind(&self) -> ResourceKind;

    fn type_meta(&self) -> &TypeMeta;

    /// Produce a handle owning an independent deep copy of this resource.
    fn deep_copy_object(&self) -> ResourceHandle;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// A concrete resource type with a statically known kind.
pub trait ResourceType: Resource + Clone {
    const KIND: ResourceKind;
}

macro_rules! impl_resource {
    ($($ty:ident => $($field:ident).+),+ $(,)?) => {$(
        impl ResourceType for $ty {
            const KIND: ResourceKind = ResourceKind::$ty;
        }

        impl Resource for $ty {
            fn kind(&self) -> ResourceKind {
                ResourceKind::$ty
            }

            fn type_meta(&self) -> &TypeMeta {
                &self.$($field).+
            }

            fn deep_copy_object(&self) -> ResourceHandle {
                tracing::trace!(kind = %ResourceKind::$ty, "deep-copying resource");
                ResourceHandle::new(self.clone())
            }

            fn as_any(&self) -> &dyn Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn Any {
                self
            }

            fn into_any(self: Box<Self>) -> Box<dyn Any> {
                self
            }
        }
    )+};
}

impl_resource! {
    Dashboard => type_meta,
    DashboardList => type_meta,
    DashboardVersionList => type_meta,
    DashboardWithAccessInfo => dashboard.type_meta,
    LibraryPanel => type_meta,
    LibraryPanelList => type_meta,
    VersionsQueryOptions => type_meta,
}

/// Deep-copy an optional receiver into a handle.
///
/// Returns `None` when the receiver is absent.
pub fn clone_as_resource_handle<T: Resource + ?Sized>(
    src: Option<&T>,
) -> Option<ResourceHandle> {
    src.map(|resource| resource.deep_copy_object())
}

/// Owned, type-erased resource.
#[derive(Debug)]
pub struct ResourceHandle {
    inner: Box<dyn Resource>,
}

impl ResourceHandle {
    /// Wrap a resource, taking ownership of it.
    pub fn new<T: Resource>(resource: T) -> Self {
        Self {
            inner: Box::new(resource),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.inner.kind()
    }

    pub fn type_meta(&self) -> &TypeMeta {
        self.inner.type_meta()
    }

    /// Borrow the resource through its shared capability.
    pub fn resource(&self) -> &dyn Resource {
        self.inner.as_ref()
    }

    pub fn downcast_ref<T: ResourceType>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: ResourceType>(&mut self) -> Option<&mut T> {
        self.inner.as_any_mut().downcast_mut::<T>()
    }

    /// Unwrap the handle into its concrete type.
    ///
    /// # Errors
    /// Returns [`ApiError::KindMismatch`] if the handle holds another kind.
    pub fn into_typed<T: ResourceType>(self) -> Result<T> {
        let found = self.kind();
        self.inner
            .into_any()
            .downcast::<T>()
            .map(|resource| *resource)
            .map_err(|_| ApiError::KindMismatch {
                expected: T::KIND,
                found,
            })
    }
}

impl Clone for ResourceHandle {
    fn clone(&self) -> Self {
        self.inner.deep_copy_object()
    }
}

impl<T: ResourceType> From<T> for ResourceHandle {
    fn from(resource: T) -> Self {
        Self::new(resource)
    }
}
