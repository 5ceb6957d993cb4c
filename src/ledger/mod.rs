//! # Resource Ledger
//!
//! Authoritative capacity state for every bookable resource.
//!
//! ## Overview
//!
//! The ledger is a [`ResourceActor`] over [`Resource`] entities. Reads are
//! plain `Get` requests; every mutation goes through a [`LedgerAction`] whose
//! handler checks and applies the change inside one actor step, which makes the
//! compare-and-decrement linearizable without any lock held across a caller's
//! read-compute-write span.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Resource`]
//! - [`error`] - [`LedgerError`] type for type-safe error handling
//! - [`actions`] - [`LedgerAction`] and its outcomes
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use seat_allocator::{allocation_store, ledger};
//! use seat_allocator::ledger::DecrementOutcome;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (allocation_actor, allocations) = allocation_store::new(8);
//!     let (ledger_actor, ledger) = ledger::new(8);
//!     tokio::spawn(allocation_actor.run(()));
//!     tokio::spawn(ledger_actor.run(allocations));
//!
//!     let id = ledger.register(2).await?;
//!     let snapshot = ledger.read(id).await?;
//!     let outcome = ledger.try_decrement(id, snapshot.revision).await?;
//!     assert!(matches!(outcome, DecrementOutcome::Success { previous_available: 2, .. }));
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::LedgerClient;
use crate::framework::ResourceActor;
use crate::model::Resource;

/// Creates a new ledger actor and its client.
///
/// The actor must be run with an [`AllocationClient`](crate::clients::AllocationClient)
/// as its context so that commits can write allocation records.
pub fn new(buffer_size: usize) -> (ResourceActor<Resource>, LedgerClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, LedgerClient::new(generic_client))
}
