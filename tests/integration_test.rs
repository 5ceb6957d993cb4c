use seat_allocator::clients::actor_client::ActorClient;
use seat_allocator::config::AllocatorConfig;
use seat_allocator::coordinator::AllocateError;
use seat_allocator::ledger::{DecrementOutcome, LedgerError};
use seat_allocator::lifecycle::AllocationSystem;
use seat_allocator::model::{RequesterId, ResourceId};

fn system() -> AllocationSystem {
    AllocationSystem::new(&AllocatorConfig::default()).expect("default config is valid")
}

/// Two requesters race for a two-seat train; both get a seat, positions 1 and 2.
#[tokio::test]
async fn test_two_concurrent_allocations_fill_two_seats() {
    let system = system();
    let train = system.ledger.register(2).await.expect("Failed to register");

    let (a, b) = tokio::join!(
        system.coordinator.allocate(train, RequesterId::from("userA")),
        system.coordinator.allocate(train, RequesterId::from("userB")),
    );
    let a = a.expect("userA should get a seat");
    let b = b.expect("userB should get a seat");

    let mut positions = vec![a.position, b.position];
    positions.sort_unstable();
    assert_eq!(positions, vec![1, 2]);

    let snapshot = system.ledger.read(train).await.expect("Failed to read");
    assert_eq!(snapshot.available_capacity, 0);
    assert_eq!(snapshot.revision, 2);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_full_resource_is_exhausted_and_unchanged() {
    let system = system();
    let train = system.ledger.register(2).await.expect("Failed to register");
    for name in ["userA", "userB"] {
        system
            .coordinator
            .allocate(train, RequesterId::from(name))
            .await
            .expect("seat should be available");
    }

    let result = system
        .coordinator
        .allocate(train, RequesterId::from("userC"))
        .await;
    assert_eq!(result, Err(AllocateError::Exhausted(train)));
    assert!(!result.unwrap_err().is_retryable());

    let snapshot = system.ledger.read(train).await.expect("Failed to read");
    assert_eq!(snapshot.available_capacity, 0);
    assert_eq!(snapshot.revision, 2);

    let records = system
        .allocations
        .list_for_resource(train)
        .await
        .expect("Failed to list");
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.requester != RequesterId::from("userC")));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_missing_resource_is_not_found_and_creates_nothing() {
    let system = system();

    let result = system
        .coordinator
        .allocate(ResourceId(404), RequesterId::from("userA"))
        .await;
    assert_eq!(result, Err(AllocateError::NotFound("resource_404".to_string())));

    let records = system
        .allocations
        .list_for_requester(&RequesterId::from("userA"))
        .await
        .expect("Failed to list");
    assert!(records.is_empty());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_allocation_record_is_persisted() {
    let system = system();
    let train = system.ledger.register(3).await.expect("Failed to register");

    let allocation = system
        .coordinator
        .allocate(train, RequesterId::from("alice"))
        .await
        .expect("Failed to allocate");

    let stored = system
        .allocations
        .get(allocation.id)
        .await
        .expect("Failed to get")
        .expect("Allocation not found");
    assert_eq!(stored, allocation);
    assert_eq!(stored.resource_id, train);
    assert_eq!(stored.position, 1);

    let mine = system
        .allocations
        .find_for_requester(allocation.id, &RequesterId::from("alice"))
        .await
        .expect("Failed to find");
    assert_eq!(mine, Some(allocation.clone()));

    let theirs = system
        .allocations
        .find_for_requester(allocation.id, &RequesterId::from("mallory"))
        .await
        .expect("Failed to find");
    assert_eq!(theirs, None);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_list_for_requester_spans_resources() {
    let system = system();
    let first = system.ledger.register(1).await.expect("Failed to register");
    let second = system.ledger.register(1).await.expect("Failed to register");

    let alice = RequesterId::from("alice");
    system
        .coordinator
        .allocate(first, alice.clone())
        .await
        .expect("Failed to allocate");
    system
        .coordinator
        .allocate(second, alice.clone())
        .await
        .expect("Failed to allocate");
    system
        .coordinator
        .allocate(first, RequesterId::from("bob"))
        .await
        .expect_err("first train has one seat");

    let records = system
        .allocations
        .list_for_requester(&alice)
        .await
        .expect("Failed to list");
    let resources: Vec<ResourceId> = records.iter().map(|r| r.resource_id).collect();
    assert_eq!(resources, vec![first, second]);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_list_available_skips_full_resources() {
    let system = system();
    let full = system.ledger.register(1).await.expect("Failed to register");
    let open = system.ledger.register(5).await.expect("Failed to register");
    system
        .coordinator
        .allocate(full, RequesterId::from("alice"))
        .await
        .expect("Failed to allocate");

    let available = system
        .coordinator
        .list_available()
        .await
        .expect("Failed to list");
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].resource_id, open);
    assert_eq!(available[0].available_capacity, 5);

    let snapshot = system.coordinator.read(full).await.expect("Failed to read");
    assert!(snapshot.is_exhausted());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_zero_capacity_registration_is_rejected() {
    let system = system();

    let result = system.ledger.register(0).await;
    assert_eq!(result, Err(LedgerError::InvalidCapacity(0)));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_try_decrement_on_live_ledger() {
    let system = system();
    let train = system.ledger.register(1).await.expect("Failed to register");

    let stale = system
        .ledger
        .try_decrement(train, 7)
        .await
        .expect("Failed to decrement");
    assert_eq!(stale, DecrementOutcome::Conflict { current_revision: 0 });

    let taken = system
        .ledger
        .try_decrement(train, 0)
        .await
        .expect("Failed to decrement");
    assert_eq!(
        taken,
        DecrementOutcome::Success {
            previous_available: 1,
            revision: 1
        }
    );

    // Exhaustion wins over a stale revision.
    let full = system
        .ledger
        .try_decrement(train, 0)
        .await
        .expect("Failed to decrement");
    assert_eq!(full, DecrementOutcome::Exhausted);

    let missing = system.ledger.try_decrement(ResourceId(99), 0).await;
    assert_eq!(missing, Err(LedgerError::NotFound("resource_99".to_string())));

    system.shutdown().await.expect("Shutdown failed");
}
