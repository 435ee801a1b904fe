//! # Tenant Store
//!
//! Building blocks for keeping resources (runtimes, applications, …) in memory, isolated per
//! tenant, together with the label and annotation rules every resource shares.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`TenantEntity`], [`ResourceInput`], [`Metadata`]) - what a stored
//!    resource looks like, how it is built from an input payload, and how its metadata maps
//!    are mutated.
//! 2. **Storage Layer** ([`InMemoryRepository`]) - the owned table of resources with
//!    tenant-isolated reads.
//! 3. **Runtime Layer** ([`StoreActor`]) - serializes access to a repository for concurrent
//!    callers.
//! 4. **Interface Layer** ([`StoreClient`], [`TenantClient`]) - the async API callers use.
//!
//! ## Tenant Isolation
//!
//! `get_by_id` and `list` never return a resource owned by another tenant. A resource that
//! exists under a different tenant is reported as not found, exactly like a missing one.
//!
//! ## Control Flow
//!
//! The store never mutates metadata on its own. A caller fetches a copy, applies
//! [`Metadata`] operations to it, and writes it back with `update`. [`TenantClient`] packages
//! that read-modify-write for each metadata operation and sends it as one `modify` request,
//! so the actor runs all three steps without another request in between.
//!
//! ```rust
//! use tenant_store::{Annotations, Labels, Metadata, StoreActor, TenantEntity, TenantId};
//!
//! #[derive(Clone, Debug)]
//! struct Widget { id: String, tenant: TenantId, labels: Labels, annotations: Annotations }
//!
//! impl TenantEntity for Widget {
//!     type Id = String;
//!     const KIND: &'static str = "widget";
//!     fn id(&self) -> &String { &self.id }
//!     fn tenant(&self) -> &TenantId { &self.tenant }
//! }
//!
//! impl Metadata for Widget {
//!     fn labels(&self) -> &Labels { &self.labels }
//!     fn labels_mut(&mut self) -> &mut Labels { &mut self.labels }
//!     fn annotations(&self) -> &Annotations { &self.annotations }
//!     fn annotations_mut(&mut self) -> &mut Annotations { &mut self.annotations }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StoreActor::<Widget>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let tenant = TenantId::from("acme");
//!     let widget = Widget {
//!         id: "w1".into(),
//!         tenant: tenant.clone(),
//!         labels: Labels::new(),
//!         annotations: Annotations::new(),
//!     };
//!     client.create(widget).await.unwrap();
//!
//!     let mut copy = client.get_by_id(tenant.clone(), "w1".into()).await.unwrap();
//!     copy.add_label("env", ["prod"]);
//!     client.update(copy).await.unwrap();
//!
//!     let stored = client.get_by_id(tenant, "w1".into()).await.unwrap();
//!     assert!(stored.labels["env"].contains("prod"));
//! }
//! ```
//!
//! ## Testing
//!
//! See the [`mock`] module for a scripted `StoreClient` that needs no running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod metadata;
pub mod mock;
pub mod page;
pub mod repository;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::TenantClient;
pub use entity::{ResourceInput, TenantEntity, TenantId};
pub use error::{ErrorKind, StoreError};
pub use message::{Mutation, Response, StoreRequest};
pub use metadata::{Annotations, Labels, Metadata, MetadataError};
pub use page::{FilterOperator, LabelFilter, ListQuery, Page, PageInfo};
pub use repository::InMemoryRepository;
