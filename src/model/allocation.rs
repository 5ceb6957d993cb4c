use crate::model::ResourceId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AllocationId(pub u32);

impl From<u32> for AllocationId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for AllocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "allocation_{}", self.0)
    }
}

/// Opaque identity of whoever owns an allocation.
///
/// Supplied already verified by the identity layer; the allocator never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequesterId(pub String);

impl From<&str> for RequesterId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RequesterId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for RequesterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A committed grant of one seat to one requester.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// Records are created from an [`AllocationDraft`] inside the ledger's commit
/// step and are never updated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub id: AllocationId,
    pub requester: RequesterId,
    pub resource_id: ResourceId,
    pub position: u32,
    pub created_at: DateTime<Utc>,
}

impl Allocation {
    /// Creates a new Allocation instance stamped with the current time.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (set by the actor system)
    /// * `draft` - Requester, resource and position chosen by the coordinator
    pub fn new(id: AllocationId, draft: AllocationDraft) -> Self {
        Self::stamped(id, draft, Utc::now())
    }

    /// Creates an Allocation with an explicit creation time.
    pub fn stamped(id: AllocationId, draft: AllocationDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            requester: draft.requester,
            resource_id: draft.resource_id,
            position: draft.position,
            created_at,
        }
    }
}

/// What the coordinator proposes to commit: who gets which seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationDraft {
    pub requester: RequesterId,
    pub resource_id: ResourceId,
    pub position: u32,
}

/// Payload for storing an allocation record.
///
/// The timestamp travels with the draft so the writer can rebuild the stored
/// record without reading it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationCreate {
    pub draft: AllocationDraft,
    pub created_at: DateTime<Utc>,
}
