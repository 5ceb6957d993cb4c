//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`. Module paths are hidden (`with_target(false)`); actors tag
//! their events with `entity_type` instead.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: start, and shutdown with the final store size
//! - **Requests**: every Create/Get/List/Action with the entity id
//! - **Allocation attempts**: one span per `allocate` call carrying
//!   `resource_id` and `requester`; conflicts at `debug`, outcomes at `info`,
//!   an exhausted retry budget at `warn`
//!
//! ## Usage
//!
//! ```bash
//! # Outcomes only
//! RUST_LOG=info cargo run
//!
//! # Every request and conflict
//! RUST_LOG=debug cargo run
//!
//! # Just the coordinator
//! RUST_LOG=seat_allocator::coordinator=debug cargo run
//! ```
//!
//! ## Example Output
//!
//! Two requesters racing for a two-seat train, with `RUST_LOG=debug`, abridged
//! to the coordinator's own events and the ledger's commits. Event fields come
//! first, then the fields of the enclosing `allocate` span. Actor events run
//! in the actor's task and carry no caller span.
//!
//! ```text
//! INFO Created entity_type="Resource" id=resource_1 size=1
//! INFO Created entity_type="Allocation" id=allocation_1 size=1
//! DEBUG Committed resource_id=resource_1 allocation_id=allocation_1 revision=1
//! INFO allocate: Allocated attempt=1 allocation_id=allocation_1 position=1 revision=1 resource_id=resource_1 requester=alice
//! DEBUG allocate: Conflict attempt=1 expected_revision=0 current_revision=1 resource_id=resource_1 requester=bob
//! INFO Created entity_type="Allocation" id=allocation_2 size=2
//! DEBUG Committed resource_id=resource_1 allocation_id=allocation_2 revision=2
//! INFO allocate: Allocated attempt=2 allocation_id=allocation_2 position=2 revision=2 resource_id=resource_1 requester=bob
//! ```

/// Initializes the global tracing subscriber.
///
/// Call once, at program start. A second call panics inside `tracing-subscriber`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the actor instead
        .compact()
        .init();
}
