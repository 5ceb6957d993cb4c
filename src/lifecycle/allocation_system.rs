use crate::clients::{AllocationClient, LedgerClient};
use crate::config::{AllocatorConfig, ConfigError};
use crate::coordinator::{AllocationCoordinator, RetryPolicy};
use tracing::{error, info};

/// The runtime orchestrator for seat allocation.
///
/// `AllocationSystem` owns:
/// - **Allocation store actor**: immutable allocation records (`Context = ()`)
/// - **Ledger actor**: per-resource capacity, with the allocation client as its
///   context so a commit can write the record and the decrement in one step
/// - **Coordinator**: the retrying `allocate` entry point
///
/// # Example
///
/// ```rust
/// use seat_allocator::config::AllocatorConfig;
/// use seat_allocator::lifecycle::AllocationSystem;
/// use seat_allocator::model::RequesterId;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = AllocationSystem::new(&AllocatorConfig::default())?;
///
///     let train = system.ledger.register(2).await?;
///     let allocation = system
///         .coordinator
///         .allocate(train, RequesterId::from("alice"))
///         .await?;
///     assert_eq!(allocation.position, 1);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct AllocationSystem {
    /// Entry point for allocation requests
    pub coordinator: AllocationCoordinator,

    /// Client for the ledger actor (registration, availability reads)
    pub ledger: LedgerClient,

    /// Client for the allocation store actor (record lookups)
    pub allocations: AllocationClient,

    /// Actor tasks, in shutdown order
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl AllocationSystem {
    /// Validates `config`, then spawns both actors and builds the coordinator.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if `config` fails validation; nothing is spawned.
    pub fn new(config: &AllocatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let (allocation_actor, allocations) = crate::allocation_store::new(config.mailbox_capacity);
        let (ledger_actor, ledger) = crate::ledger::new(config.mailbox_capacity);

        let allocation_handle = tokio::spawn(allocation_actor.run(()));
        let ledger_handle = tokio::spawn(ledger_actor.run(allocations.clone()));

        let coordinator = AllocationCoordinator::new(ledger.clone(), RetryPolicy::from(config));

        info!(
            max_attempts = config.max_attempts,
            mailbox_capacity = config.mailbox_capacity,
            "Allocation system started"
        );

        Ok(Self {
            coordinator,
            ledger,
            allocations,
            // The ledger holds an allocation client, so it must stop first.
            handles: vec![ledger_handle, allocation_handle],
        })
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the clients held here, then waits for each actor to drain its
    /// queue and exit. Clones of the clients held elsewhere keep their actor
    /// alive, so drop them before calling this.
    ///
    /// # Errors
    /// Returns `Err` if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down allocation system...");

        drop(self.coordinator);
        drop(self.ledger);
        drop(self.allocations);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Allocation system shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let config = AllocatorConfig {
            mailbox_capacity: 0,
            ..AllocatorConfig::default()
        };
        assert!(matches!(
            AllocationSystem::new(&config),
            Err(ConfigError::ZeroMailbox)
        ));
    }

    #[tokio::test]
    async fn test_shutdown_completes() {
        let system = AllocationSystem::new(&AllocatorConfig::default()).unwrap();
        system.ledger.register(1).await.unwrap();
        system.shutdown().await.unwrap();
    }
}
