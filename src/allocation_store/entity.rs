//! ActorEntity trait implementation for the Allocation domain type.
//!
//! Allocation records are write-once: there are no custom actions, and the
//! framework offers no update or delete.

use super::error::AllocationError;
use crate::framework::ActorEntity;
use crate::model::{Allocation, AllocationCreate, AllocationId};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Allocation {
    type Id = AllocationId;
    type Create = AllocationCreate;
    type Action = (); // Records are immutable
    type ActionResult = ();
    type Context = ();
    type Error = AllocationError;

    /// Creates a new Allocation from a coordinator-built draft.
    fn from_create_params(id: AllocationId, params: AllocationCreate) -> Result<Self, Self::Error> {
        if params.draft.position == 0 {
            return Err(AllocationError::InvalidPosition(params.draft.position));
        }
        Ok(Self::stamped(id, params.draft, params.created_at))
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AllocationDraft, RequesterId, ResourceId};
    use chrono::Utc;

    fn draft(position: u32) -> AllocationCreate {
        AllocationCreate {
            draft: AllocationDraft {
                requester: RequesterId::from("alice"),
                resource_id: ResourceId(1),
                position,
            },
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_from_create_params_copies_draft() {
        let params = draft(2);
        let created_at = params.created_at;
        let allocation = Allocation::from_create_params(AllocationId(3), params).unwrap();
        assert_eq!(allocation.created_at, created_at);
        assert_eq!(allocation.id, AllocationId(3));
        assert_eq!(allocation.requester, RequesterId::from("alice"));
        assert_eq!(allocation.resource_id, ResourceId(1));
        assert_eq!(allocation.position, 2);
    }

    #[test]
    fn test_position_zero_is_rejected() {
        let result = Allocation::from_create_params(AllocationId(1), draft(0));
        assert_eq!(result, Err(AllocationError::InvalidPosition(0)));
    }
}
