//! Resource types managed by the director and the input payloads they are built from.

pub mod application;
pub mod runtime;

pub use application::*;
pub use runtime::*;
