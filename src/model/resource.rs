use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub u32);

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "resource_{}", self.0)
    }
}

/// A bookable seat pool (for example, the seats on one train).
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// See [`impl ActorEntity for Resource`](#impl-ActorEntity-for-Resource) for details on:
/// - Creation parameters ([`ResourceCreate`])
/// - Custom actions ([`LedgerAction`](crate::ledger::LedgerAction))
///
/// Fields are crate-private: only the ledger's action handler mutates them, and it
/// keeps `available_capacity <= total_capacity` and bumps `revision` exactly
/// once per committed decrement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub(crate) id: ResourceId,
    pub(crate) total_capacity: u32,
    pub(crate) available_capacity: u32,
    pub(crate) revision: u64,
}

impl Resource {
    /// Creates a fresh resource with every unit available and revision 0.
    pub fn new(id: ResourceId, total_capacity: u32) -> Self {
        Self {
            id,
            total_capacity,
            available_capacity: total_capacity,
            revision: 0,
        }
    }

    pub fn id(&self) -> ResourceId {
        self.id
    }

    pub fn total_capacity(&self) -> u32 {
        self.total_capacity
    }

    pub fn available_capacity(&self) -> u32 {
        self.available_capacity
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Point-in-time copy of the capacity fields.
    pub fn snapshot(&self) -> ResourceSnapshot {
        ResourceSnapshot {
            resource_id: self.id,
            total_capacity: self.total_capacity,
            available_capacity: self.available_capacity,
            revision: self.revision,
        }
    }
}

/// Payload for registering a new resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceCreate {
    pub total_capacity: u32,
}

/// What a `read` returns. May already be stale by the time the caller acts on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    pub resource_id: ResourceId,
    pub total_capacity: u32,
    pub available_capacity: u32,
    pub revision: u64,
}

impl ResourceSnapshot {
    pub fn is_exhausted(&self) -> bool {
        self.available_capacity == 0
    }

    /// Seat position the next successful allocation against this snapshot receives.
    ///
    /// Only meaningful while `available_capacity > 0`.
    pub fn next_position(&self) -> u32 {
        self.total_capacity - self.available_capacity + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_resource_starts_full_at_revision_zero() {
        let resource = Resource::new(ResourceId(7), 3);
        let snapshot = resource.snapshot();
        assert_eq!(snapshot.total_capacity, 3);
        assert_eq!(snapshot.available_capacity, 3);
        assert_eq!(snapshot.revision, 0);
        assert!(!snapshot.is_exhausted());
    }

    #[test]
    fn test_next_position_counts_from_one() {
        let mut snapshot = Resource::new(ResourceId(1), 4).snapshot();
        assert_eq!(snapshot.next_position(), 1);

        snapshot.available_capacity = 1;
        assert_eq!(snapshot.next_position(), 4);
    }

    #[test]
    fn test_display_prefix() {
        assert_eq!(ResourceId(12).to_string(), "resource_12");
    }
}
