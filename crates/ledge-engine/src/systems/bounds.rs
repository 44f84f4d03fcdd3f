use crate::api::types::PhysicsEvent;
use crate::core::store::EntityStore;

/// Clamp entities with declared world bounds back into range, zeroing the
/// clamped velocity component. Runs after collision resolution. A floor
/// clamp (lower Y limit, which is max Y in Y-down coordinates) also
/// grounds the entity.
///
/// Entities whose top edge crosses below `kill_plane_y` emit a
/// `FellOffWorld` event, once per fall; the entity is left where it is,
/// death and respawn policy belong to the game-loop owner.
pub fn enforce(store: &mut EntityStore, kill_plane_y: Option<f32>, events: &mut Vec<PhysicsEvent>) {
    for entity in store.iter_mut() {
        if !entity.active || entity.is_static {
            continue;
        }

        if let Some(kill_y) = kill_plane_y {
            if entity.pos.y > kill_y && entity.prev_pos.y <= kill_y {
                events.push(PhysicsEvent::FellOffWorld { entity: entity.id });
            }
        }

        let Some(bounds) = entity.bounds else {
            continue;
        };
        if entity.pos.x < bounds.min.x {
            entity.pos.x = bounds.min.x;
            entity.vel.x = 0.0;
        }
        if entity.pos.x + entity.size.x > bounds.max.x {
            entity.pos.x = bounds.max.x - entity.size.x;
            entity.vel.x = 0.0;
        }
        if entity.pos.y < bounds.min.y {
            entity.pos.y = bounds.min.y;
            entity.vel.y = 0.0;
        }
        if entity.pos.y + entity.size.y > bounds.max.y {
            entity.pos.y = bounds.max.y - entity.size.y;
            entity.vel.y = 0.0;
            entity.grounded = true;
        }
    }
}
