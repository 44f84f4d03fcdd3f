use glam::Vec2;

use crate::api::types::{CollisionSide, EntityId};
use crate::components::platform::PlatformBehavior;

/// One entry in an entity's per-tick contact list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub other: EntityId,
    /// Side relative to the entity owning the list.
    pub side: CollisionSide,
}

/// Axis-aligned world limits for one entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub min: Vec2,
    pub max: Vec2,
}

/// Fat entity struct with optional components.
/// Designed for simplicity over ECS purity: players, enemies, platforms
/// and collectibles are all the same struct with different flags.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier, assigned by the store on spawn.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Inactive entities are skipped by every system.
    pub active: bool,
    /// Top-left corner of the AABB, in world units (Y down).
    pub pos: Vec2,
    /// AABB extent; both components must be positive.
    pub size: Vec2,
    /// Velocity in world units per tick.
    pub vel: Vec2,
    /// Position recorded before this tick's integration. Used by the
    /// detector to classify which side a collision happened on.
    pub prev_pos: Vec2,
    /// Static entities are never moved by integration or resolution.
    pub is_static: bool,
    /// Whether gravity accelerates this entity.
    pub gravity: bool,
    /// Whether horizontal friction damping applies.
    pub friction: bool,
    /// Mass for force scaling and momentum exchange. Always positive.
    pub mass: f32,
    /// Velocity retained after a collision, as a fraction. Zero kills all
    /// rebound.
    pub bounciness: f32,
    /// True while resting on something from above.
    pub grounded: bool,
    /// True if any collision was resolved for this entity this tick.
    pub colliding: bool,
    /// Ordered list of contacts resolved this tick.
    pub contacts: Vec<Contact>,
    /// Optional per-entity world limits enforced after resolution.
    pub bounds: Option<WorldBounds>,
    /// Platform behavior component. Present only on platforms.
    pub platform: Option<PlatformBehavior>,
    /// One-way platforms are only solid when landed on from above.
    pub one_way: bool,
}

impl Entity {
    /// Create a dynamic entity at the origin. The id is a placeholder
    /// until the store assigns the real one on spawn.
    pub fn new() -> Self {
        Self {
            id: EntityId(0),
            tag: String::new(),
            active: true,
            pos: Vec2::ZERO,
            size: Vec2::ONE,
            vel: Vec2::ZERO,
            prev_pos: Vec2::ZERO,
            is_static: false,
            gravity: true,
            friction: true,
            mass: 1.0,
            bounciness: 0.0,
            grounded: false,
            colliding: false,
            contacts: Vec::new(),
            bounds: None,
            platform: None,
            one_way: false,
        }
    }

    /// Create a static platform covering the given AABB.
    /// Platforms have no gravity or friction and default to the fixed
    /// behavior; chain [`with_platform`](Self::with_platform) to change it.
    pub fn platform(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            prev_pos: pos,
            size,
            is_static: true,
            gravity: false,
            friction: false,
            platform: Some(PlatformBehavior::Fixed),
            ..Self::new()
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self.prev_pos = pos;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_gravity(mut self, gravity: bool) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_friction(mut self, friction: bool) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_bounciness(mut self, bounciness: f32) -> Self {
        self.bounciness = bounciness;
        self
    }

    pub fn with_bounds(mut self, min: Vec2, max: Vec2) -> Self {
        self.bounds = Some(WorldBounds { min, max });
        self
    }

    pub fn with_platform(mut self, behavior: PlatformBehavior) -> Self {
        self.platform = Some(behavior);
        self
    }

    pub fn with_one_way(mut self, one_way: bool) -> Self {
        self.one_way = one_way;
        self
    }

    // -- AABB edges (Y down: top is min Y, bottom is max Y) --

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict AABB overlap test. Touching edges do not count.
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Whether this entity currently blocks new collisions.
    pub fn solid(&self) -> bool {
        match &self.platform {
            Some(behavior) => behavior.solid(),
            None => true,
        }
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new()
    }
}
