//! # Runtime Store
//!
//! Keeps the runtimes registered by each tenant.
//!
//! ## Structure
//!
//! - [`entity`] - [`TenantEntity`](tenant_store::TenantEntity) and
//!   [`Metadata`](tenant_store::Metadata) implementations for [`Runtime`]
//! - [`error`] - [`RuntimeError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the store actor and client
//!
//! ## Usage
//!
//! ```rust
//! use director::runtime_store;
//! use director::model::RuntimeInput;
//! use tenant_store::TenantId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = runtime_store::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let input = RuntimeInput { name: "edge-eu".into(), ..Default::default() };
//!     let runtime = client
//!         .create_runtime("rt-1".into(), TenantId::from("acme"), input)
//!         .await?;
//!     assert_eq!(runtime.name, "edge-eu");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::RuntimeClient;
use crate::model::Runtime;
use tenant_store::StoreActor;

/// Creates a new Runtime store actor and its client.
pub fn new(buffer_size: usize) -> (StoreActor<Runtime>, RuntimeClient) {
    let (actor, generic_client) = StoreActor::new(buffer_size);
    (actor, RuntimeClient::new(generic_client))
}
