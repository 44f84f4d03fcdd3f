use glam::Vec2;

/// Unique identifier for an entity in the store.
/// Assigned by [`crate::core::store::EntityStore`] on spawn and stable for
/// the entity's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u32);

/// Which face of the moving entity was involved in a collision.
/// `Bottom` means the entity landed on something; `Top` means it bumped
/// its head. Sides are always relative to the entity that moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl CollisionSide {
    /// The same contact seen from the other entity's perspective.
    pub fn mirror(self) -> Self {
        match self {
            CollisionSide::Top => CollisionSide::Bottom,
            CollisionSide::Bottom => CollisionSide::Top,
            CollisionSide::Left => CollisionSide::Right,
            CollisionSide::Right => CollisionSide::Left,
        }
    }

    /// Whether this side resolves along the Y axis.
    pub fn is_vertical(self) -> bool {
        matches!(self, CollisionSide::Top | CollisionSide::Bottom)
    }
}

/// An event produced by the physics world.
/// Events accumulate in tick order: force/jump/impulse events are pushed
/// when the corresponding call is made (before the tick), collision and
/// fell-off-world events during the tick. The caller drains the list after
/// consuming it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhysicsEvent {
    /// Two entities collided; `side` is relative to `entity_a`.
    Collision {
        entity_a: EntityId,
        entity_b: EntityId,
        side: CollisionSide,
    },
    /// An entity jumped.
    Jump { entity: EntityId },
    /// A continuous force was applied.
    ForceApplied { entity: EntityId, force: Vec2 },
    /// An impulse overwrote an entity's velocity.
    ImpulseApplied { entity: EntityId, velocity: Vec2 },
    /// An entity crossed the kill plane.
    FellOffWorld { entity: EntityId },
}
