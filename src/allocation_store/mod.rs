//! Allocation records: one immutable row per granted seat.
//!
//! Records are only ever created by the ledger's commit step (see
//! [`LedgerAction::Commit`](crate::ledger::LedgerAction::Commit)); everything
//! else reads them through [`AllocationClient`].

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::AllocationClient;
use crate::framework::ResourceActor;
use crate::model::Allocation;

/// Creates a new allocation store actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Allocation>, AllocationClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, AllocationClient::new(generic_client))
}
