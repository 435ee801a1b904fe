//! # Store Client
//!
//! The cloneable, async handle callers use to reach a [`StoreActor`](crate::StoreActor).

use crate::entity::{TenantEntity, TenantId};
use crate::error::StoreError;
use crate::message::{Mutation, StoreRequest};
use crate::metadata::MetadataError;
use crate::page::{ListQuery, Page};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for a `StoreActor`.
///
/// Holds only a channel sender, so cloning is cheap and clones can be moved into other tasks.
/// Every method sends one request and waits for the actor's answer; `ActorClosed` and
/// `ActorDropped` report a stopped actor.
pub struct StoreClient<T: TenantEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: TenantEntity> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: TenantEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn get_by_id(&self, tenant: TenantId, id: T::Id) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::GetById {
            tenant,
            id,
            respond_to,
        })
        .await
    }

    pub async fn list(&self, tenant: TenantId, query: ListQuery) -> Result<Page<T>, StoreError> {
        self.request(|respond_to| StoreRequest::List {
            tenant,
            query,
            respond_to,
        })
        .await
    }

    pub async fn create(&self, item: impl Into<Option<T>>) -> Result<(), StoreError> {
        let item = item.into();
        self.request(|respond_to| StoreRequest::Create { item, respond_to })
            .await
    }

    pub async fn update(&self, item: impl Into<Option<T>>) -> Result<(), StoreError> {
        let item = item.into();
        self.request(|respond_to| StoreRequest::Update { item, respond_to })
            .await
    }

    pub async fn delete(&self, item: impl Into<Option<T>>) -> Result<(), StoreError> {
        let item = item.into();
        self.request(|respond_to| StoreRequest::Delete { item, respond_to })
            .await
    }

    /// Has the actor apply `apply` to the tenant's record `id` and store the result.
    ///
    /// Returns the stored copy. If `apply` fails the record is left as it was and the error is
    /// returned as [`StoreError::Metadata`].
    pub async fn modify<F>(&self, tenant: TenantId, id: T::Id, apply: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut T) -> Result<(), MetadataError> + Send + 'static,
    {
        let apply: Mutation<T> = Box::new(apply);
        self.request(|respond_to| StoreRequest::Modify {
            tenant,
            id,
            apply,
            respond_to,
        })
        .await
    }
}
