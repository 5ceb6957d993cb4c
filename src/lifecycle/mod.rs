//! Runtime orchestration and lifecycle management.
//!
//! - [`AllocationSystem`] - starts the actors, wires their dependencies, and shuts them down
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod allocation_system;
pub mod tracing;

pub use allocation_system::*;
pub use tracing::*;
