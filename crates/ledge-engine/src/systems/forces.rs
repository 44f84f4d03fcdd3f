//! External force primitives, invoked by the input-translation layer
//! before a tick. All three are no-ops on static entities; none of them
//! is an error path.

use glam::Vec2;

use crate::components::entity::Entity;

/// Start a jump: set an upward velocity of `force` magnitude.
/// Succeeds only while grounded; jump spamming in the air is a silent
/// no-op, reported by the `false` return.
pub fn apply_jump(entity: &mut Entity, force: f32) -> bool {
    if entity.is_static || !entity.active || !entity.grounded {
        return false;
    }
    entity.vel.y = -force.abs();
    entity.grounded = false;
    true
}

/// Apply an acceleration impulse scaled by inverse mass.
pub fn apply_force(entity: &mut Entity, force: Vec2) {
    if entity.is_static || !entity.active {
        return;
    }
    let mass = if entity.mass > 0.0 { entity.mass } else { 1.0 };
    entity.vel += force / mass;
}

/// Overwrite velocity outright. Used for knockback and bounce-off-enemy.
pub fn apply_impulse(entity: &mut Entity, velocity: Vec2) {
    if entity.is_static || !entity.active {
        return;
    }
    entity.vel = velocity;
}
