use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tenant_store::{Annotations, Labels, TenantId};

/// Type-safe identifier for Applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl From<&str> for ApplicationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ApplicationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An application registered by a tenant.
///
/// Like [`Runtime`](crate::model::Runtime), the ID and tenant are stamped once by
/// [`ApplicationInput::to_application`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Application {
    pub(crate) id: ApplicationId,
    pub(crate) tenant: TenantId,
    pub name: String,
    pub description: Option<String>,
    pub labels: Labels,
    pub annotations: Annotations,
    pub health_check_url: Option<String>,
}

/// Payload for registering an application.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApplicationInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub labels: Labels,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub health_check_url: Option<String>,
}

impl ApplicationInput {
    /// Builds an [`Application`] owned by `tenant` under `id`, copying every other field.
    pub fn to_application(self, id: ApplicationId, tenant: TenantId) -> Application {
        Application {
            id,
            tenant,
            name: self.name,
            description: self.description,
            labels: self.labels,
            annotations: self.annotations,
            health_check_url: self.health_check_url,
        }
    }
}
