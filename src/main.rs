//! Demo: three requesters race for a two-seat train.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use seat_allocator::config::AllocatorConfig;
use seat_allocator::lifecycle::{setup_tracing, AllocationSystem};
use seat_allocator::model::RequesterId;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AllocatorConfig::from_env();
    info!(?config, "Starting seat allocator demo");

    let system = AllocationSystem::new(&config).map_err(|e| e.to_string())?;

    let train = system.ledger.register(2).await.map_err(|e| e.to_string())?;
    info!(resource_id = %train, "Registered train with 2 seats");

    let mut tasks = Vec::new();
    for name in ["alice", "bob", "carol"] {
        let coordinator = system.coordinator.clone();
        let span = tracing::info_span!("booking", requester = name);
        tasks.push(tokio::spawn(
            async move {
                coordinator
                    .allocate(train, RequesterId::from(name))
                    .await
            }
            .instrument(span),
        ));
    }

    for task in tasks {
        match task.await.map_err(|e| e.to_string())? {
            Ok(allocation) => info!(
                requester = %allocation.requester,
                position = allocation.position,
                allocation_id = %allocation.id,
                "Seat booked"
            ),
            Err(e) => warn!(error = %e, retryable = e.is_retryable(), "Booking failed"),
        }
    }

    let snapshot = system.ledger.read(train).await.map_err(|e| e.to_string())?;
    info!(
        available = snapshot.available_capacity,
        revision = snapshot.revision,
        "Final state"
    );

    // Spawned tasks held coordinator clones; they are gone by now.
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
