//! # Runtime Client
//!
//! High-level API for the Runtime store. Wraps a `StoreClient<Runtime>`; the read, delete and
//! metadata operations come from [`TenantClient`].
use crate::model::{Runtime, RuntimeId, RuntimeInput};
use crate::runtime_store::RuntimeError;
use async_trait::async_trait;
use tenant_store::{StoreClient, StoreError, TenantClient, TenantId};
use tracing::{debug, instrument};

/// Client for interacting with the Runtime store.
#[derive(Clone)]
pub struct RuntimeClient {
    inner: StoreClient<Runtime>,
}

impl RuntimeClient {
    pub fn new(inner: StoreClient<Runtime>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl TenantClient<Runtime> for RuntimeClient {
    type Error = RuntimeError;

    fn inner(&self) -> &StoreClient<Runtime> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        RuntimeError::from(e)
    }
}

impl RuntimeClient {
    /// Stamps `input` with `id` and `tenant` and stores the result.
    #[instrument(skip(self, input))]
    pub async fn create_runtime(
        &self,
        id: RuntimeId,
        tenant: TenantId,
        input: RuntimeInput,
    ) -> Result<Runtime, RuntimeError> {
        debug!(?input, "create_runtime called");
        let runtime = input.to_runtime(id, tenant);
        self.inner.create(runtime.clone()).await?;
        Ok(runtime)
    }

    /// Replaces every field of the tenant's runtime `id` with the ones from `input`.
    #[instrument(skip(self, input))]
    pub async fn update_runtime(
        &self,
        tenant: TenantId,
        id: RuntimeId,
        input: RuntimeInput,
    ) -> Result<Runtime, RuntimeError> {
        debug!(?input, "update_runtime called");
        self.modify(tenant, id, move |runtime: &mut Runtime| {
            *runtime = input.to_runtime(runtime.id.clone(), runtime.tenant.clone());
            Ok(())
        })
        .await
    }

    /// Removes the tenant's runtime `id` and returns it.
    #[instrument(skip(self))]
    pub async fn delete_runtime(
        &self,
        tenant: TenantId,
        id: RuntimeId,
    ) -> Result<Runtime, RuntimeError> {
        let runtime = self.get_by_id(tenant, id).await?;
        self.delete(runtime.clone()).await?;
        Ok(runtime)
    }
}
