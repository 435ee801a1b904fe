//! Error types for the Application store.

use tenant_store::{ErrorKind, MetadataError, StoreError};
use thiserror::Error;

/// Errors that can occur during application operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApplicationError {
    /// The requested application does not exist for this tenant.
    #[error("Application not found: {0}")]
    NotFound(String),

    /// No application payload was supplied.
    #[error("Application can not be empty")]
    EmptyItem,

    /// A label or annotation change was rejected.
    #[error("Application metadata error: {0}")]
    Metadata(#[from] MetadataError),

    /// An error occurred while communicating with the store actor.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}

impl ApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::NotFound(_) => ErrorKind::NotFound,
            ApplicationError::EmptyItem => ErrorKind::InvalidArgument,
            ApplicationError::Metadata(e) => e.kind(),
            ApplicationError::StoreCommunicationError(_) => ErrorKind::Unavailable,
        }
    }
}

impl From<StoreError> for ApplicationError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { id, .. } => ApplicationError::NotFound(id),
            StoreError::EmptyItem => ApplicationError::EmptyItem,
            StoreError::Metadata(e) => ApplicationError::Metadata(e),
            StoreError::ActorClosed | StoreError::ActorDropped => {
                ApplicationError::StoreCommunicationError(e.to_string())
            }
        }
    }
}
