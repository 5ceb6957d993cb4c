//! # Ledger Client
//!
//! High-level API for the ledger actor. Wraps a `ResourceClient<Resource>` and
//! exposes the ledger operations with typed outcomes.
use crate::clients::actor_client::{downcast_entity_error, ActorClient};
use crate::framework::{FrameworkError, ResourceClient};
use crate::ledger::{CommitOutcome, DecrementOutcome, LedgerAction, LedgerActionResult, LedgerError};
use crate::model::{AllocationDraft, Resource, ResourceCreate, ResourceId, ResourceSnapshot};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the ledger actor.
#[derive(Clone)]
pub struct LedgerClient {
    inner: ResourceClient<Resource>,
}

impl LedgerClient {
    pub fn new(inner: ResourceClient<Resource>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Resource> for LedgerClient {
    type Error = LedgerError;

    fn inner(&self) -> &ResourceClient<Resource> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => LedgerError::NotFound(id),
            other => downcast_entity_error(other),
        }
    }
}

fn unexpected(result: LedgerActionResult) -> LedgerError {
    LedgerError::ActorCommunicationError(format!("unexpected ledger response: {result:?}"))
}

impl LedgerClient {
    /// Registers a resource with `total_capacity` units, all available.
    #[instrument(skip(self))]
    pub async fn register(&self, total_capacity: u32) -> Result<ResourceId, LedgerError> {
        debug!("Sending request");
        self.inner
            .create(ResourceCreate { total_capacity })
            .await
            .map_err(Self::map_error)
    }

    /// Current capacity state. Fails with `NotFound` for unknown ids.
    ///
    /// The snapshot may be superseded as soon as it is returned.
    #[instrument(skip(self))]
    pub async fn read(&self, id: ResourceId) -> Result<ResourceSnapshot, LedgerError> {
        self.get(id)
            .await?
            .map(|resource| resource.snapshot())
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))
    }

    /// Conditional decrement guarded on `expected_revision`.
    #[instrument(skip(self))]
    pub async fn try_decrement(
        &self,
        id: ResourceId,
        expected_revision: u64,
    ) -> Result<DecrementOutcome, LedgerError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, LedgerAction::TryDecrement { expected_revision })
            .await
            .map_err(Self::map_error)?
        {
            LedgerActionResult::TryDecrement(outcome) => Ok(outcome),
            other => Err(unexpected(other)),
        }
    }

    /// Conditional decrement that also persists `draft` as an allocation record.
    ///
    /// Either both the record and the decrement happen, or neither does.
    #[instrument(skip(self, draft), fields(position = draft.position))]
    pub async fn commit(
        &self,
        id: ResourceId,
        expected_revision: u64,
        draft: AllocationDraft,
    ) -> Result<CommitOutcome, LedgerError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(
                id,
                LedgerAction::Commit {
                    expected_revision,
                    draft,
                },
            )
            .await
            .map_err(Self::map_error)?
        {
            LedgerActionResult::Commit(outcome) => Ok(outcome),
            other => Err(unexpected(other)),
        }
    }

    /// Snapshots of every resource with capacity left, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_available(&self) -> Result<Vec<ResourceSnapshot>, LedgerError> {
        let mut snapshots: Vec<ResourceSnapshot> = self
            .inner
            .list(|resource: &Resource| resource.available_capacity() > 0)
            .await
            .map_err(Self::map_error)?
            .iter()
            .map(Resource::snapshot)
            .collect();
        snapshots.sort_by_key(|snapshot| snapshot.resource_id);
        Ok(snapshots)
    }
}
