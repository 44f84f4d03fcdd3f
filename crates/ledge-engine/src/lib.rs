pub mod api;
pub mod components;
pub mod core;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::WorldConfig;
pub use api::types::{CollisionSide, EntityId, PhysicsEvent};
pub use api::world::PhysicsWorld;
pub use components::entity::{Contact, Entity, WorldBounds};
pub use components::platform::{
    Axis, BouncyState, BreakPhase, BreakingState, MovingState, PlatformBehavior,
};
pub use crate::core::store::EntityStore;
pub use crate::core::time::FixedTimestep;
pub use systems::collision::{detect, CollisionRecord};
pub use systems::resolve::resolve;
pub use systems::spatial::SpatialIndex;
