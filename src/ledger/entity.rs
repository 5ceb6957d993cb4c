//! ActorEntity trait implementation for the Resource domain type.
//!
//! The ledger actor owns every [`Resource`] and is the only place their
//! capacity or revision change. Because the actor applies one request at a
//! time, the guard evaluation and the decrement below form a single atomic
//! step with respect to every other caller.

use super::actions::{CommitOutcome, DecrementOutcome, LedgerAction, LedgerActionResult};
use super::error::LedgerError;
use crate::clients::AllocationClient;
use crate::framework::ActorEntity;
use crate::model::{AllocationDraft, Resource, ResourceCreate, ResourceId};
use async_trait::async_trait;
use tracing::debug;

/// Why a guarded decrement may not proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Exhausted,
    Conflict { current_revision: u64 },
}

impl From<Rejection> for DecrementOutcome {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::Exhausted => DecrementOutcome::Exhausted,
            Rejection::Conflict { current_revision } => {
                DecrementOutcome::Conflict { current_revision }
            }
        }
    }
}

impl From<Rejection> for CommitOutcome {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::Exhausted => CommitOutcome::Exhausted,
            Rejection::Conflict { current_revision } => CommitOutcome::Conflict { current_revision },
        }
    }
}

impl Resource {
    /// Exhaustion is checked before the revision: a full resource reports
    /// `Exhausted` even to a caller holding a stale revision.
    fn guard(&self, expected_revision: u64) -> Result<(), Rejection> {
        if self.available_capacity == 0 {
            return Err(Rejection::Exhausted);
        }
        if self.revision != expected_revision {
            return Err(Rejection::Conflict {
                current_revision: self.revision,
            });
        }
        Ok(())
    }

    /// Takes one unit. Callers must have passed `guard` in the same step.
    fn apply_decrement(&mut self) -> (u32, u64) {
        let previous_available = self.available_capacity;
        self.available_capacity -= 1;
        self.revision += 1;
        (previous_available, self.revision)
    }

    fn try_decrement(&mut self, expected_revision: u64) -> DecrementOutcome {
        match self.guard(expected_revision) {
            Ok(()) => {
                let (previous_available, revision) = self.apply_decrement();
                DecrementOutcome::Success {
                    previous_available,
                    revision,
                }
            }
            Err(rejection) => rejection.into(),
        }
    }

    /// Guard, record, then decrement. A failed record write leaves the
    /// resource untouched, so no compensation is ever needed.
    async fn commit(
        &mut self,
        expected_revision: u64,
        draft: AllocationDraft,
        allocations: &AllocationClient,
    ) -> Result<CommitOutcome, LedgerError> {
        if let Err(rejection) = self.guard(expected_revision) {
            return Ok(rejection.into());
        }

        if draft.resource_id != self.id {
            return Err(LedgerError::ResourceMismatch {
                expected: self.id.to_string(),
                proposed: draft.resource_id.to_string(),
            });
        }
        let expected_position = self.total_capacity - self.available_capacity + 1;
        if draft.position != expected_position {
            return Err(LedgerError::PositionMismatch {
                expected: expected_position,
                proposed: draft.position,
            });
        }

        let allocation = allocations.record(draft).await?;
        let (previous_available, revision) = self.apply_decrement();
        debug!(resource_id = %self.id, allocation_id = %allocation.id, revision, "Committed");

        Ok(CommitOutcome::Committed {
            allocation,
            previous_available,
            revision,
        })
    }
}

#[async_trait]
impl ActorEntity for Resource {
    type Id = ResourceId;
    type Create = ResourceCreate;
    type Action = LedgerAction;
    type ActionResult = LedgerActionResult;
    type Context = AllocationClient;
    type Error = LedgerError;

    /// Creates a new Resource with all capacity available. Zero capacity is rejected.
    fn from_create_params(id: ResourceId, params: ResourceCreate) -> Result<Self, Self::Error> {
        if params.total_capacity == 0 {
            return Err(LedgerError::InvalidCapacity(params.total_capacity));
        }
        Ok(Self::new(id, params.total_capacity))
    }

    /// Handles custom actions for the Resource entity.
    ///
    /// # Actions
    /// - `TryDecrement`: compare-and-decrement on `revision`
    /// - `Commit`: the same, with the allocation record written before the decrement
    async fn handle_action(
        &mut self,
        action: LedgerAction,
        allocations: &AllocationClient,
    ) -> Result<LedgerActionResult, Self::Error> {
        match action {
            LedgerAction::TryDecrement { expected_revision } => Ok(
                LedgerActionResult::TryDecrement(self.try_decrement(expected_revision)),
            ),
            LedgerAction::Commit {
                expected_revision,
                draft,
            } => self
                .commit(expected_revision, draft, allocations)
                .await
                .map(LedgerActionResult::Commit),
        }
    }
}
