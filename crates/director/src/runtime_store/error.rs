//! Error types for the Runtime store.

use tenant_store::{ErrorKind, MetadataError, StoreError};
use thiserror::Error;

/// Errors that can occur during runtime operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RuntimeError {
    /// The requested runtime does not exist for this tenant.
    #[error("Runtime not found: {0}")]
    NotFound(String),

    /// No runtime payload was supplied.
    #[error("Runtime can not be empty")]
    EmptyItem,

    /// A label or annotation change was rejected.
    #[error("Runtime metadata error: {0}")]
    Metadata(#[from] MetadataError),

    /// An error occurred while communicating with the store actor.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}

impl RuntimeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RuntimeError::NotFound(_) => ErrorKind::NotFound,
            RuntimeError::EmptyItem => ErrorKind::InvalidArgument,
            RuntimeError::Metadata(e) => e.kind(),
            RuntimeError::StoreCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}

impl From<StoreError> for RuntimeError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { id, .. } => RuntimeError::NotFound(id),
            StoreError::EmptyItem => RuntimeError::EmptyItem,
            StoreError::Metadata(e) => RuntimeError::Metadata(e),
            StoreError::ActorClosed | StoreError::ActorDropped => {
                RuntimeError::StoreCommunicationError(e.to_string())
            }
        }
    }
}
