use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tenant_store::{Annotations, Labels, TenantId};

/// Type-safe identifier for Runtimes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RuntimeId(pub String);

impl From<&str> for RuntimeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RuntimeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for RuntimeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A runtime registered by a tenant.
///
/// # Tenant Store
/// This struct implements [`TenantEntity`](tenant_store::TenantEntity) and
/// [`Metadata`](tenant_store::Metadata), so it can be kept in a
/// [`StoreActor`](tenant_store::StoreActor) and its labels and annotations mutated with the
/// shared rules.
///
/// The ID and tenant are stamped by [`RuntimeInput::to_runtime`] and are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Runtime {
    pub(crate) id: RuntimeId,
    pub(crate) tenant: TenantId,
    pub name: String,
    pub description: Option<String>,
    pub labels: Labels,
    pub annotations: Annotations,
}

/// Payload for registering a runtime.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RuntimeInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub annotations: Annotations,
}

impl RuntimeInput {
    /// Builds a [`Runtime`] owned by `tenant` under `id`, copying every other field.
    pub fn to_runtime(self, id: RuntimeId, tenant: TenantId) -> Runtime {
        Runtime {
            id,
            tenant,
            name: self.name,
            description: self.description,
            labels: self.labels,
            annotations: self.annotations,
        }
    }
}
