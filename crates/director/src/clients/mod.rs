//! Type-safe wrappers around [`StoreClient`](tenant_store::StoreClient).

pub mod application_client;
pub mod runtime_client;

pub use application_client::*;
pub use runtime_client::*;
