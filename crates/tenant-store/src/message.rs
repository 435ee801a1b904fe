//! # Store Messages
//!
//! Requests sent from a [`StoreClient`](crate::StoreClient) to a
//! [`StoreActor`](crate::StoreActor). There is one variant per store operation; each carries a
//! one-shot channel the actor answers on.

use crate::entity::{TenantEntity, TenantId};
use crate::error::StoreError;
use crate::metadata::MetadataError;
use crate::page::{ListQuery, Page};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// A change applied to a stored record by the actor itself.
pub type Mutation<T> = Box<dyn FnOnce(&mut T) -> Result<(), MetadataError> + Send>;

pub enum StoreRequest<T: TenantEntity> {
    GetById {
        tenant: TenantId,
        id: T::Id,
        respond_to: Response<T>,
    },
    List {
        tenant: TenantId,
        query: ListQuery,
        respond_to: Response<Page<T>>,
    },
    Create {
        item: Option<T>,
        respond_to: Response<()>,
    },
    Update {
        item: Option<T>,
        respond_to: Response<()>,
    },
    Delete {
        item: Option<T>,
        respond_to: Response<()>,
    },
    /// Read-modify-write of one record, answered with the stored copy.
    Modify {
        tenant: TenantId,
        id: T::Id,
        apply: Mutation<T>,
        respond_to: Response<T>,
    },
}
