//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod allocation;
pub mod resource;

pub use allocation::*;
pub use resource::*;
