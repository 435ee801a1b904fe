//! # Store Errors
//!
//! Common error types shared by the repository, the store actor and its clients.
//! [`ErrorKind`] groups them into the coarse categories an outer transport layer maps onto
//! protocol responses (not found → 404 and so on).

use crate::metadata::MetadataError;

/// Coarse error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    Conflict,
    Unavailable,
}

/// Errors returned by store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No record under `id`, or the record belongs to a different tenant.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("item can not be empty")]
    EmptyItem,
    /// A modification ran inside the store and rejected the record; nothing was written.
    #[error(transparent)]
    Metadata(#[from] MetadataError),
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        StoreError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::NotFound { .. } => ErrorKind::NotFound,
            StoreError::EmptyItem => ErrorKind::InvalidArgument,
            StoreError::Metadata(e) => e.kind(),
            StoreError::ActorClosed | StoreError::ActorDropped => ErrorKind::Unavailable,
        }
    }
}
