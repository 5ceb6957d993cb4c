//! Error types for the allocation coordinator.

use crate::ledger::LedgerError;
use crate::model::ResourceId;
use thiserror::Error;

/// Why an `allocate` call produced no allocation.
///
/// `NotFound` and `Exhausted` are final business outcomes. `TooManyConflicts`
/// means contention prevented a definitive answer; the whole call may be
/// retried later. `Ledger` carries infrastructure failures unchanged, including
/// a record write that failed inside the ledger's commit step.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AllocateError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("No capacity left on {0}")]
    Exhausted(ResourceId),

    #[error("Gave up on {resource_id} after {attempts} conflicting attempts")]
    TooManyConflicts { resource_id: ResourceId, attempts: u32 },

    #[error("Ledger failure: {0}")]
    Ledger(#[source] LedgerError),
}

impl AllocateError {
    /// True when retrying the whole call later could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AllocateError::TooManyConflicts { .. })
    }
}

impl From<LedgerError> for AllocateError {
    fn from(e: LedgerError) -> Self {
        match e {
            LedgerError::NotFound(id) => AllocateError::NotFound(id),
            other => AllocateError::Ledger(other),
        }
    }
}
