use glam::Vec2;

use crate::api::types::CollisionSide;
use crate::components::entity::Entity;

/// Result of a narrow-phase test. Tick-scoped; produced and consumed
/// within one tick, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionRecord {
    /// Side of the collision, relative to the first entity.
    pub side: CollisionSide,
    /// Overlap depth on each axis.
    pub overlap: Vec2,
}

/// Narrow-phase AABB test plus side classification.
///
/// Side priority uses `a`'s pre-integration position: an entity fully
/// above/below/beside the other before this tick unambiguously hit with
/// that face. When `a` already overlapped `b` at tick start (spawned
/// inside, or fast diagonal motion skipped the disjoint state) the
/// classification falls back to the shallower overlap axis, signed by
/// `a`'s velocity.
///
/// This is a single-step lookback heuristic, not a swept solver; very fast
/// small entities can still pass a thin platform entirely between two
/// ticks (see `fast_mover_can_tunnel_a_thin_platform` below).
pub fn detect(a: &Entity, b: &Entity) -> Option<CollisionRecord> {
    if !a.overlaps(b) {
        return None;
    }

    let overlap = Vec2::new(
        a.right().min(b.right()) - a.left().max(b.left()),
        a.bottom().min(b.bottom()) - a.top().max(b.top()),
    );

    let side = if a.prev_pos.y + a.size.y <= b.top() {
        // a was fully above b before this tick
        CollisionSide::Bottom
    } else if a.prev_pos.y >= b.bottom() {
        CollisionSide::Top
    } else if a.prev_pos.x + a.size.x <= b.left() {
        CollisionSide::Right
    } else if a.prev_pos.x >= b.right() {
        CollisionSide::Left
    } else if overlap.x < overlap.y {
        if a.vel.x < 0.0 {
            CollisionSide::Left
        } else {
            CollisionSide::Right
        }
    } else if a.vel.y < 0.0 {
        CollisionSide::Top
    } else {
        CollisionSide::Bottom
    };

    Some(CollisionRecord { side, overlap })
}
