//! # System Lifecycle
//!
//! Starts, wires and stops the store actors.
//!
//! - [`DirectorSystem`] - spawns a store per resource kind and hands out their clients
//! - [`SystemConfig`] - channel sizing, from defaults or the environment
//! - [`setup_tracing`] - initializes `tracing-subscriber` from `RUST_LOG`
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for every actor task to finish

pub mod config;
pub mod director_system;
pub mod tracing;

pub use self::config::*;
pub use self::director_system::*;
pub use self::tracing::*;
