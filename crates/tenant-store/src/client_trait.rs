//! # TenantClient Trait
//!
//! Common interface for resource-specific clients. Implementors only provide access to their
//! inner [`StoreClient`] and an error mapping; the trait supplies the read/delete operations
//! and the label/annotation operations on top of it.
//!
//! A metadata operation is a read-modify-write that the store actor runs as one request (see
//! [`TenantClient::modify`]): the mutation is applied to a copy of the stored resource and the
//! copy is written back only if the mutation succeeds. Concurrent metadata calls on the same
//! resource therefore never lose each other's changes.
use crate::entity::{TenantEntity, TenantId};
use crate::error::StoreError;
use crate::metadata::{Metadata, MetadataError};
use crate::page::{ListQuery, Page};
use crate::StoreClient;
use async_trait::async_trait;

#[async_trait]
pub trait TenantClient<T: TenantEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<MetadataError> + Send + Sync;

    /// Access the inner generic StoreClient.
    fn inner(&self) -> &StoreClient<T>;

    /// Map store errors to the resource-specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a resource owned by `tenant`.
    #[tracing::instrument(skip(self), fields(kind = T::KIND))]
    async fn get_by_id(&self, tenant: TenantId, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get_by_id(tenant, id).await.map_err(Self::map_error)
    }

    /// List every resource owned by `tenant`.
    #[tracing::instrument(skip(self), fields(kind = T::KIND))]
    async fn list(&self, tenant: TenantId, query: ListQuery) -> Result<Page<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(tenant, query).await.map_err(Self::map_error)
    }

    /// Remove `item` from the store. Unknown items are ignored.
    #[tracing::instrument(skip(self, item), fields(kind = T::KIND))]
    async fn delete(&self, item: T) -> Result<(), Self::Error> {
        tracing::debug!(id = %item.id(), "Sending request");
        self.inner().delete(item).await.map_err(Self::map_error)
    }

    /// Apply `apply` to the tenant's resource `id` inside the store and return the stored copy.
    ///
    /// The read, the change and the write happen as one store operation. A rejected change
    /// comes back as the resource error's metadata variant and nothing is written.
    #[tracing::instrument(skip(self, apply), fields(kind = T::KIND))]
    async fn modify<F>(&self, tenant: TenantId, id: T::Id, apply: F) -> Result<T, Self::Error>
    where
        F: FnOnce(&mut T) -> Result<(), MetadataError> + Send + 'static,
    {
        tracing::debug!("Sending request");
        self.inner()
            .modify(tenant, id, apply)
            .await
            .map_err(|e| match e {
                StoreError::Metadata(e) => <Self::Error as From<MetadataError>>::from(e),
                other => Self::map_error(other),
            })
    }

    #[tracing::instrument(skip(self), fields(kind = T::KIND))]
    async fn add_label(
        &self,
        tenant: TenantId,
        id: T::Id,
        key: String,
        values: Vec<String>,
    ) -> Result<T, Self::Error>
    where
        T: Metadata,
    {
        let item = self
            .modify(tenant, id, move |item: &mut T| {
                item.add_label(key, values);
                Ok(())
            })
            .await?;
        log_metadata(&item);
        Ok(item)
    }

    #[tracing::instrument(skip(self), fields(kind = T::KIND))]
    async fn delete_label(
        &self,
        tenant: TenantId,
        id: T::Id,
        key: String,
        values: Vec<String>,
    ) -> Result<T, Self::Error>
    where
        T: Metadata,
    {
        let item = self
            .modify(tenant, id, move |item: &mut T| item.delete_label(&key, values))
            .await?;
        log_metadata(&item);
        Ok(item)
    }

    #[tracing::instrument(skip(self, value), fields(kind = T::KIND))]
    async fn add_annotation(
        &self,
        tenant: TenantId,
        id: T::Id,
        key: String,
        value: serde_json::Value,
    ) -> Result<T, Self::Error>
    where
        T: Metadata,
    {
        let item = self
            .modify(tenant, id, move |item: &mut T| item.add_annotation(key, value))
            .await?;
        log_metadata(&item);
        Ok(item)
    }

    #[tracing::instrument(skip(self), fields(kind = T::KIND))]
    async fn delete_annotation(
        &self,
        tenant: TenantId,
        id: T::Id,
        key: String,
    ) -> Result<T, Self::Error>
    where
        T: Metadata,
    {
        let item = self
            .modify(tenant, id, move |item: &mut T| item.delete_annotation(&key))
            .await?;
        log_metadata(&item);
        Ok(item)
    }
}

fn log_metadata<T: TenantEntity + Metadata>(item: &T) {
    tracing::debug!(
        id = %item.id(),
        labels = item.labels().len(),
        annotations = item.annotations().len(),
        "Metadata updated"
    );
}
