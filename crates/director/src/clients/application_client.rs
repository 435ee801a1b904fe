//! # Application Client
//!
//! High-level API for the Application store. Wraps a `StoreClient<Application>`; the read, delete and
//! metadata operations come from [`TenantClient`].
use crate::model::{Application, ApplicationId, ApplicationInput};
use crate::application_store::ApplicationError;
use async_trait::async_trait;
use tenant_store::{StoreClient, StoreError, TenantClient, TenantId};
use tracing::{debug, instrument};

/// Client for interacting with the Application store.
#[derive(Clone)]
pub struct ApplicationClient {
    inner: StoreClient<Application>,
}

impl ApplicationClient {
    pub fn new(inner: StoreClient<Application>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl TenantClient<Application> for ApplicationClient {
    type Error = ApplicationError;

    fn inner(&self) -> &StoreClient<Application> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        ApplicationError::from(e)
    }
}

impl ApplicationClient {
    /// Stamps `input` with `id` and `tenant` and stores the result.
    #[instrument(skip(self, input))]
    pub async fn create_application(
        &self,
        id: ApplicationId,
        tenant: TenantId,
        input: ApplicationInput,
    ) -> Result<Application, ApplicationError> {
        debug!(?input, "create_application called");
        let application = input.to_application(id, tenant);
        self.inner.create(application.clone()).await?;
        Ok(application)
    }

    /// Replaces every field of the tenant's application `id` with the ones from `input`.
    #[instrument(skip(self, input))]
    pub async fn update_application(
        &self,
        tenant: TenantId,
        id: ApplicationId,
        input: ApplicationInput,
    ) -> Result<Application, ApplicationError> {
        debug!(?input, "update_application called");
        self.modify(tenant, id, move |application: &mut Application| {
            *application = input.to_application(application.id.clone(), application.tenant.clone());
            Ok(())
        })
        .await
    }

    /// Removes the tenant's application `id` and returns it.
    #[instrument(skip(self))]
    pub async fn delete_application(
        &self,
        tenant: TenantId,
        id: ApplicationId,
    ) -> Result<Application, ApplicationError> {
        let application = self.get_by_id(tenant, id).await?;
        self.delete(application.clone()).await?;
        Ok(application)
    }
}
