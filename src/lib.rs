//! # Seat Allocator
//!
//! > **Never oversell, never hand out the same seat twice.**
//!
//! This crate allocates a strictly limited, countable resource (the seats on a
//! train) to many concurrently competing requesters. Each successful allocation
//! gets a unique, deterministic position, and capacity never goes negative.
//!
//! ## 🏗️ Design
//!
//! ### Resource actors
//! Every entity type lives in its own [`ResourceActor`](framework::ResourceActor):
//! a Tokio task that owns a `HashMap` store and handles requests one at a time.
//! No lock is held across a caller's read-compute-write span. The actor's
//! sequential loop is the single point where concurrent decrements on one
//! resource are ordered.
//!
//! ### Optimistic concurrency
//! Each resource carries a `revision` that increases by one on every committed
//! decrement. A caller reads a snapshot, derives the seat position from it, and
//! asks the ledger to commit *only if the revision is still the one it read*.
//! A stale snapshot yields `Conflict`, and the coordinator re-reads and tries
//! again under a bounded [`RetryPolicy`](coordinator::RetryPolicy).
//!
//! ### Transactional commit
//! The ledger's context is the [`AllocationClient`](clients::AllocationClient).
//! A commit checks the guard, writes the allocation record, and only then
//! applies the decrement, all inside one actor step. A failed record write
//! leaves the resource untouched. A caller that gives up mid-flight cannot
//! split the pair.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Generic `ResourceActor<T>`, `ResourceClient<T>`, and the [`framework::mock`] test tooling.
//!
//! ### 2. The Components ([`ledger`], [`allocation_store`], [`coordinator`])
//! - **Ledger**: capacity state, `read`, `try_decrement`, `commit`.
//! - **Allocation store**: immutable allocation records.
//! - **Coordinator**: `allocate` with bounded retry.
//!
//! ### 3. The Interface ([`clients`])
//! Typed wrappers ([`LedgerClient`](clients::LedgerClient),
//! [`AllocationClient`](clients::AllocationClient)) over the generic client.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`])
//! [`AllocationSystem`](lifecycle::AllocationSystem) spins up and wires the
//! actors from an [`AllocatorConfig`](config::AllocatorConfig).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod allocation_store;
pub mod clients;
pub mod config;
pub mod coordinator;
pub mod framework;
pub mod ledger;
pub mod lifecycle;
pub mod model;
