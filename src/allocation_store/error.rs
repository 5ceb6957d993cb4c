//! Error types for the allocation store actor.

use thiserror::Error;

/// Errors that can occur during allocation record operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AllocationError {
    /// The requested allocation was not found.
    #[error("Allocation not found: {0}")]
    NotFound(String),

    /// Positions are 1-based.
    #[error("Invalid position: {0}")]
    InvalidPosition(u32),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for AllocationError {
    fn from(msg: String) -> Self {
        AllocationError::ActorCommunicationError(msg)
    }
}
