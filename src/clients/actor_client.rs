use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read operations.
///
/// Implementors supply the inner generic client and an error mapping; `get`
/// comes for free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }
}

/// Recovers the entity's own error type from a boxed framework error.
///
/// Entity errors cross the actor boundary as `Box<dyn Error>`; typed clients
/// use this to hand callers the concrete enum back. Anything else becomes a
/// communication error via `From<String>`.
pub(crate) fn downcast_entity_error<E>(e: FrameworkError) -> E
where
    E: std::error::Error + From<String> + 'static,
{
    match e {
        FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
            Ok(typed) => *typed,
            Err(other) => E::from(other.to_string()),
        },
        other => E::from(other.to_string()),
    }
}
