//! Tenant store trait implementations for the Runtime domain type.

use crate::model::{Runtime, RuntimeId, RuntimeInput};
use tenant_store::{Annotations, Labels, Metadata, ResourceInput, TenantEntity, TenantId};

impl TenantEntity for Runtime {
    type Id = RuntimeId;
    const KIND: &'static str = "runtime";

    fn id(&self) -> &RuntimeId {
        &self.id
    }

    fn tenant(&self) -> &TenantId {
        &self.tenant
    }
}

impl Metadata for Runtime {
    fn labels(&self) -> &Labels {
        &self.labels
    }

    fn labels_mut(&mut self) -> &mut Labels {
        &mut self.labels
    }

    fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    fn annotations_mut(&mut self) -> &mut Annotations {
        &mut self.annotations
    }
}

impl ResourceInput for RuntimeInput {
    type Id = RuntimeId;
    type Resource = Runtime;

    fn to_resource(self, id: RuntimeId, tenant: TenantId) -> Runtime {
        self.to_runtime(id, tenant)
    }
}
