//! Tenant store trait implementations for the Application domain type.

use crate::model::{Application, ApplicationId, ApplicationInput};
use tenant_store::{Annotations, Labels, Metadata, ResourceInput, TenantEntity, TenantId};

impl TenantEntity for Application {
    type Id = ApplicationId;
    const KIND: &'static str = "application";

    fn id(&self) -> &ApplicationId {
        &self.id
    }

    fn tenant(&self) -> &TenantId {
        &self.tenant
    }
}

impl Metadata for Application {
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

impl ResourceInput for ApplicationInput {
    type Id = ApplicationId;
    type Resource = Application;

    fn to_resource(self, id: ApplicationId, tenant: TenantId) -> Application {
        self.to_application(id, tenant)
    }
}
