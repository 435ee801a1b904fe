//! # Director
//!
//! Tenant-scoped registry of runtimes and applications.
//!
//! - **[model]**: [`Runtime`](model::Runtime), [`Application`](model::Application) and the
//!   input payloads they are stamped from.
//! - **[runtime_store] / [application_store]**: store trait implementations, error types and
//!   factories.
//! - **[clients]**: typed clients (e.g. [`RuntimeClient`](clients::RuntimeClient)).
//! - **[lifecycle]**: the [`DirectorSystem`](lifecycle::DirectorSystem) orchestrator.

pub mod application_store;
pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod runtime_store;
