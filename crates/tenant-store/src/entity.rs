//! # TenantEntity Trait
//!
//! The `TenantEntity` trait is the contract every stored resource (Runtime, Application, …)
//! implements so the generic [`InMemoryRepository`](crate::InMemoryRepository) and
//! [`StoreActor`](crate::StoreActor) can manage it.
//!
//! A resource exposes its identifier and owning tenant through read-only accessors. There are
//! no setters: both values are stamped once when the resource is built from its input payload
//! (see [`ResourceInput`]) and never change afterwards.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Identifier of the tenant that owns a resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TenantId(pub String);

impl TenantId {
    pub fn new(tenant: impl Into<String>) -> Self {
        Self(tenant.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TenantId {
    fn from(tenant: &str) -> Self {
        Self(tenant.to_string())
    }
}

impl From<String> for TenantId {
    fn from(tenant: String) -> Self {
        Self(tenant)
    }
}

impl Display for TenantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trait that any resource must implement to be kept in a tenant-scoped store.
///
/// # Associated Types
/// `Id` is ordered so listings come back in a stable order, and displayable so it can be
/// recorded in logs and error messages.
pub trait TenantEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this resource.
    type Id: Ord + Hash + Clone + Send + Sync + Display + Debug;

    /// Human-readable resource kind, e.g. `"runtime"`.
    const KIND: &'static str;

    fn id(&self) -> &Self::Id;

    fn tenant(&self) -> &TenantId;
}

/// An input payload that becomes a resource once an ID and tenant are stamped onto it.
///
/// Every field other than the ID and tenant is carried over verbatim.
///
/// An absent payload converts to an absent resource:
///
/// ```rust
/// use tenant_store::{ResourceInput, TenantId};
///
/// #[derive(Debug, PartialEq)]
/// struct Widget { id: String, tenant: TenantId, name: String }
/// struct WidgetInput { name: String }
///
/// impl ResourceInput for WidgetInput {
///     type Id = String;
///     type Resource = Widget;
///     fn to_resource(self, id: String, tenant: TenantId) -> Widget {
///         Widget { id, tenant, name: self.name }
///     }
/// }
///
/// let missing: Option<WidgetInput> = None;
/// assert_eq!(missing.to_resource("w1".into(), TenantId::from("acme")), None);
/// ```
pub trait ResourceInput {
    type Id;
    type Resource;

    fn to_resource(self, id: Self::Id, tenant: TenantId) -> Self::Resource;
}

impl<I: ResourceInput> ResourceInput for Option<I> {
    type Id = I::Id;
    type Resource = Option<I::Resource>;

    fn to_resource(self, id: Self::Id, tenant: TenantId) -> Self::Resource {
        self.map(|input| input.to_resource(id, tenant))
    }
}
