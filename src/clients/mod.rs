//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod allocation_client;
pub mod ledger_client;

pub use actor_client::*;
pub use allocation_client::*;
pub use ledger_client::*;
