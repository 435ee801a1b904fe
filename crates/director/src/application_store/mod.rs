//! # Application Store
//!
//! Keeps the applications registered by each tenant. Structured like the
//! [`runtime_store`](crate::runtime_store): trait implementations in [`entity`], the
//! [`ApplicationError`] type in [`error`], and a [`new()`] factory.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ApplicationClient;
use crate::model::Application;
use tenant_store::StoreActor;

/// Creates a new Application store actor and its client.
pub fn new(buffer_size: usize) -> (StoreActor<Application>, ApplicationClient) {
    let (actor, generic_client) = StoreActor::new(buffer_size);
    (actor, ApplicationClient::new(generic_client))
}
