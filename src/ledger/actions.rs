//! Custom actions for the ledger actor.
//!
//! This module defines the operations that can be performed on a
//! [`Resource`](crate::model::Resource) beyond create and read: the conditional
//! decrement, and its transactional form that also writes the allocation record.
//! These actions are handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::model::{Allocation, AllocationDraft};

/// Custom actions for Resource entities.
#[derive(Debug, Clone)]
pub enum LedgerAction {
    /// Decrement available capacity by one if the resource is not exhausted and
    /// its revision still equals `expected_revision`.
    TryDecrement { expected_revision: u64 },
    /// Same guard as `TryDecrement`; when it passes, persist `draft` through the
    /// allocation store and only then apply the decrement.
    Commit {
        expected_revision: u64,
        draft: AllocationDraft,
    },
}

/// Results from LedgerActions - variants match 1:1 with LedgerAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerActionResult {
    TryDecrement(DecrementOutcome),
    Commit(CommitOutcome),
}

/// Outcome of a conditional decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecrementOutcome {
    /// One unit was taken. `previous_available` is the count before the decrement.
    Success {
        previous_available: u32,
        revision: u64,
    },
    /// Someone else mutated the resource since the caller's read.
    Conflict { current_revision: u64 },
    /// No capacity left.
    Exhausted,
}

/// Outcome of a transactional commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The stored record, as written inside the commit step.
    Committed {
        allocation: Allocation,
        previous_available: u32,
        revision: u64,
    },
    Conflict { current_revision: u64 },
    Exhausted,
}
