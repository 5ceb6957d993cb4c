//! # Allocation Client
//!
//! Read access to committed allocation records, plus the `record` write used
//! by the ledger's commit step.
use crate::allocation_store::AllocationError;
use crate::clients::actor_client::{downcast_entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Allocation, AllocationCreate, AllocationDraft, AllocationId, RequesterId, ResourceId};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, instrument};

/// Client for interacting with the allocation store actor.
#[derive(Clone)]
pub struct AllocationClient {
    inner: ResourceClient<Allocation>,
}

impl AllocationClient {
    pub fn new(inner: ResourceClient<Allocation>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Allocation> for AllocationClient {
    type Error = AllocationError;

    fn inner(&self) -> &ResourceClient<Allocation> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => AllocationError::NotFound(id),
            other => downcast_entity_error(other),
        }
    }
}

impl AllocationClient {
    /// Persists a draft and returns the record exactly as stored.
    ///
    /// Only the ledger calls this, from inside its commit step.
    #[instrument(skip(self))]
    pub(crate) async fn record(&self, draft: AllocationDraft) -> Result<Allocation, AllocationError> {
        debug!("Sending request");
        let created_at = Utc::now();
        let id = self
            .inner
            .create(AllocationCreate {
                draft: draft.clone(),
                created_at,
            })
            .await
            .map_err(Self::map_error)?;
        Ok(Allocation::stamped(id, draft, created_at))
    }

    /// Looks an allocation up on behalf of `requester`.
    ///
    /// Returns `None` both when the id is unknown and when it belongs to
    /// someone else, so callers cannot probe other requesters' records.
    #[instrument(skip(self))]
    pub async fn find_for_requester(
        &self,
        id: AllocationId,
        requester: &RequesterId,
    ) -> Result<Option<Allocation>, AllocationError> {
        Ok(self
            .get(id)
            .await?
            .filter(|allocation| &allocation.requester == requester))
    }

    /// Every allocation owned by `requester`, oldest first.
    #[instrument(skip(self))]
    pub async fn list_for_requester(
        &self,
        requester: &RequesterId,
    ) -> Result<Vec<Allocation>, AllocationError> {
        let owner = requester.clone();
        let mut allocations = self
            .inner
            .list(move |allocation: &Allocation| allocation.requester == owner)
            .await
            .map_err(Self::map_error)?;
        allocations.sort_by_key(|allocation| allocation.id);
        Ok(allocations)
    }

    /// Every allocation against `resource_id`, ordered by position.
    #[instrument(skip(self))]
    pub async fn list_for_resource(
        &self,
        resource_id: ResourceId,
    ) -> Result<Vec<Allocation>, AllocationError> {
        let mut allocations = self
            .inner
            .list(move |allocation: &Allocation| allocation.resource_id == resource_id)
            .await
            .map_err(Self::map_error)?;
        allocations.sort_by_key(|allocation| allocation.position);
        Ok(allocations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_create, MockClient};

    fn allocation(id: u32, requester: &str, position: u32) -> Allocation {
        Allocation::new(
            AllocationId(id),
            AllocationDraft {
                requester: RequesterId::from(requester),
                resource_id: ResourceId(1),
                position,
            },
        )
    }

    #[tokio::test]
    async fn test_find_for_requester_hides_foreign_records() {
        let mut mock = MockClient::<Allocation>::new();
        mock.expect_get(AllocationId(1))
            .return_ok(Some(allocation(1, "alice", 1)));
        mock.expect_get(AllocationId(1))
            .return_ok(Some(allocation(1, "alice", 1)));

        let client = AllocationClient::new(mock.client());

        let own = client
            .find_for_requester(AllocationId(1), &RequesterId::from("alice"))
            .await
            .unwrap();
        assert_eq!(own.map(|a| a.position), Some(1));

        let foreign = client
            .find_for_requester(AllocationId(1), &RequesterId::from("mallory"))
            .await
            .unwrap();
        assert!(foreign.is_none());

        mock.verify();
    }

    #[tokio::test]
    async fn test_list_for_resource_orders_by_position() {
        let mut mock = MockClient::<Allocation>::new();
        mock.expect_list().return_ok(vec![
            allocation(2, "bob", 3),
            allocation(1, "alice", 1),
            allocation(3, "carol", 2),
        ]);

        let client = AllocationClient::new(mock.client());
        let positions: Vec<u32> = client
            .list_for_resource(ResourceId(1))
            .await
            .unwrap()
            .iter()
            .map(|a| a.position)
            .collect();

        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_record_surfaces_closed_store() {
        let mut mock = MockClient::<Allocation>::new();
        mock.expect_create().return_err(FrameworkError::ActorClosed);

        let client = AllocationClient::new(mock.client());
        let result = client
            .record(AllocationDraft {
                requester: "alice".into(),
                resource_id: ResourceId(1),
                position: 1,
            })
            .await;

        assert_eq!(
            result,
            Err(AllocationError::ActorCommunicationError("Actor closed".to_string()))
        );
    }

    #[tokio::test]
    async fn test_record_returns_what_the_store_was_sent() {
        let (inner, mut receiver) = create_mock_client::<Allocation>(4);
        let client = AllocationClient::new(inner);

        let task = tokio::spawn(async move {
            client
                .record(AllocationDraft {
                    requester: "alice".into(),
                    resource_id: ResourceId(1),
                    position: 2,
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        let sent_at = params.created_at;
        responder.send(Ok(AllocationId(5))).unwrap();

        let allocation = task.await.unwrap().unwrap();
        assert_eq!(allocation.id, AllocationId(5));
        assert_eq!(allocation.position, 2);
        assert_eq!(allocation.requester, RequesterId::from("alice"));
        assert_eq!(allocation.created_at, sent_at);
    }
}
