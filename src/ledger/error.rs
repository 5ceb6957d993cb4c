//! Error types for the ledger actor.

use crate::allocation_store::AllocationError;
use thiserror::Error;

/// Errors that can occur during ledger operations.
///
/// Conflicts and exhaustion are not errors here: they are ordinary
/// [`DecrementOutcome`](super::DecrementOutcome) values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LedgerError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Resources must be created with at least one unit of capacity.
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(u32),

    /// A commit carried a position that does not follow from the current state.
    #[error("Position mismatch: expected {expected}, proposed {proposed}")]
    PositionMismatch { expected: u32, proposed: u32 },

    /// A commit carried a draft for a different resource.
    #[error("Draft for {proposed} committed against {expected}")]
    ResourceMismatch { expected: String, proposed: String },

    /// Writing the allocation record failed; the decrement was not applied.
    #[error("Allocation record write failed: {0}")]
    Record(#[from] AllocationError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for LedgerError {
    fn from(msg: String) -> Self {
        LedgerError::ActorCommunicationError(msg)
    }
}
