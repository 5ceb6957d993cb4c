//! # Allocation Coordinator
//!
//! Turns one allocation request into exactly one [`Allocation`] or a
//! definitive failure.
//!
//! ## Algorithm
//!
//! 1. Read a snapshot of the resource from the ledger.
//! 2. Derive the candidate position `total - available + 1` from that snapshot.
//! 3. Ask the ledger to commit a draft with that position, guarded on the
//!    snapshot's revision.
//! 4. On `Committed`, return the record the ledger stored in that same step.
//!    On `Exhausted`, fail. On `Conflict`, back off and start again from
//!    step 1, up to [`RetryPolicy::max_attempts`] attempts in total.
//!
//! The ledger's `read` and `commit` are the only requests `allocate` sends.
//!
//! Each success is gated on a distinct revision, and the position is computed
//! from the very state that revision identifies, so no two allocations on one
//! resource ever share a position.
//!
//! Conflicts never escape this module; callers only see the resolution.

pub mod error;
pub mod retry;

pub use error::*;
pub use retry::*;

use crate::clients::LedgerClient;
use crate::ledger::CommitOutcome;
use crate::model::{Allocation, AllocationDraft, RequesterId, ResourceId, ResourceSnapshot};
use tracing::{debug, info, instrument, warn};

/// Orchestrates allocation attempts against the ledger.
///
/// Cheap to clone; every clone talks to the same ledger.
#[derive(Clone)]
pub struct AllocationCoordinator {
    ledger: LedgerClient,
    policy: RetryPolicy,
}

impl AllocationCoordinator {
    pub fn new(ledger: LedgerClient, policy: RetryPolicy) -> Self {
        Self { ledger, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Allocates one unit of `resource_id` to `requester`.
    ///
    /// # Errors
    /// - [`AllocateError::NotFound`] if the resource does not exist
    /// - [`AllocateError::Exhausted`] if no capacity is left
    /// - [`AllocateError::TooManyConflicts`] if every attempt lost a race
    /// - [`AllocateError::Ledger`] on actor failures, including a failed record write
    #[instrument(skip(self), fields(%resource_id, %requester))]
    pub async fn allocate(
        &self,
        resource_id: ResourceId,
        requester: RequesterId,
    ) -> Result<Allocation, AllocateError> {
        let max_attempts = self.policy.max_attempts();

        for attempt in 1..=max_attempts {
            let snapshot = self.ledger.read(resource_id).await?;

            // Capacity only ever goes down, so even a stale zero is final.
            if snapshot.is_exhausted() {
                info!(attempt, "Exhausted");
                return Err(AllocateError::Exhausted(resource_id));
            }

            let draft = AllocationDraft {
                requester: requester.clone(),
                resource_id,
                position: snapshot.next_position(),
            };

            match self
                .ledger
                .commit(resource_id, snapshot.revision, draft)
                .await?
            {
                CommitOutcome::Committed {
                    allocation,
                    revision,
                    ..
                } => {
                    info!(
                        attempt,
                        allocation_id = %allocation.id,
                        position = allocation.position,
                        revision,
                        "Allocated"
                    );
                    return Ok(allocation);
                }
                CommitOutcome::Exhausted => {
                    info!(attempt, "Exhausted");
                    return Err(AllocateError::Exhausted(resource_id));
                }
                CommitOutcome::Conflict { current_revision } => {
                    debug!(
                        attempt,
                        expected_revision = snapshot.revision,
                        current_revision,
                        "Conflict"
                    );
                    if attempt < max_attempts {
                        self.policy.backoff(attempt).await;
                    }
                }
            }
        }

        warn!(attempts = max_attempts, "Too many conflicts");
        Err(AllocateError::TooManyConflicts {
            resource_id,
            attempts: max_attempts,
        })
    }

    /// Availability for a single resource, read-only.
    pub async fn read(&self, resource_id: ResourceId) -> Result<ResourceSnapshot, AllocateError> {
        Ok(self.ledger.read(resource_id).await?)
    }

    /// Every resource that still has capacity, ordered by id.
    pub async fn list_available(&self) -> Result<Vec<ResourceSnapshot>, AllocateError> {
        Ok(self.ledger.list_available().await?)
    }
}
