//! # Store Actor
//!
//! The [`StoreActor`] makes an [`InMemoryRepository`] safe to share between concurrent
//! callers. It owns the repository and the receiving end of a channel and applies requests one
//! at a time on its own Tokio task, so every operation sees the repository exclusively.
//! A `Modify` request reads, changes and writes back one record within a single step of that
//! loop, so concurrent modifications of the same record cannot overwrite each other.

use crate::client::StoreClient;
use crate::entity::TenantEntity;
use crate::message::StoreRequest;
use crate::repository::InMemoryRepository;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The server half of a store: owns the repository and processes requests sequentially.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StoreActor::new()` to get the `actor` and its `client`.
/// 2.  **Run**: Spawn `actor.run()` on a background task.
/// 3.  **Use**: Clone the client into every caller. Dropping all clients stops the actor.
///
/// ```rust
/// use tenant_store::{StoreActor, TenantEntity, TenantId};
///
/// #[derive(Clone, Debug)]
/// struct Widget { id: u32, tenant: TenantId }
///
/// impl TenantEntity for Widget {
///     type Id = u32;
///     const KIND: &'static str = "widget";
///     fn id(&self) -> &u32 { &self.id }
///     fn tenant(&self) -> &TenantId { &self.tenant }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Widget>::new(10);
///     tokio::spawn(actor.run());
///
///     let tenant = TenantId::from("acme");
///     client.create(Widget { id: 1, tenant: tenant.clone() }).await.unwrap();
///     let widget = client.get_by_id(tenant, 1).await.unwrap();
///     assert_eq!(widget.id, 1);
/// }
/// ```
pub struct StoreActor<T: TenantEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    repository: InMemoryRepository<T>,
}

impl<T: TenantEntity> StoreActor<T> {
    /// Creates a new `StoreActor` with an empty repository and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; clients wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        Self::with_repository(buffer_size, InMemoryRepository::new())
    }

    /// Same as [`new`](Self::new) but starts from an existing repository.
    pub fn with_repository(
        buffer_size: usize,
        repository: InMemoryRepository<T>,
    ) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            repository,
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the request loop until every client has been dropped.
    pub async fn run(mut self) {
        let kind = T::KIND;
        info!(kind, size = self.repository.len(), "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::GetById {
                    tenant,
                    id,
                    respond_to,
                } => {
                    let result = self.repository.get_by_id(&tenant, &id);
                    debug!(kind, %tenant, %id, found = result.is_ok(), "GetById");
                    let _ = respond_to.send(result);
                }
                StoreRequest::List {
                    tenant,
                    query,
                    respond_to,
                } => {
                    let result = self.repository.list(&tenant, &query);
                    if let Ok(page) = &result {
                        debug!(kind, %tenant, total = page.total_count, "List");
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Create { item, respond_to } => {
                    let id = item.as_ref().map(|i| i.id().to_string());
                    let result = self.repository.create(item);
                    match &result {
                        Ok(()) => info!(kind, id = ?id, size = self.repository.len(), "Created"),
                        Err(e) => warn!(kind, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Update { item, respond_to } => {
                    let id = item.as_ref().map(|i| i.id().to_string());
                    let result = self.repository.update(item);
                    match &result {
                        Ok(()) => info!(kind, id = ?id, "Updated"),
                        Err(e) => warn!(kind, id = ?id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Delete { item, respond_to } => {
                    let id = item.as_ref().map(|i| i.id().to_string());
                    self.repository.delete(item);
                    info!(kind, id = ?id, size = self.repository.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::Modify {
                    tenant,
                    id,
                    apply,
                    respond_to,
                } => {
                    let result = self.repository.modify(&tenant, &id, apply);
                    match &result {
                        Ok(_) => info!(kind, %tenant, %id, "Modified"),
                        Err(e) => warn!(kind, %tenant, %id, error = %e, "Modify failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(kind, size = self.repository.len(), "Shutdown");
    }
}
