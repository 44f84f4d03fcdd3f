use glam::Vec2;

use crate::api::config::WorldConfig;
use crate::api::types::{EntityId, PhysicsEvent};
use crate::components::entity::Entity;
use crate::core::store::EntityStore;
use crate::systems::spatial::SpatialIndex;
use crate::systems::{bounds, collision, forces, platform, resolve};

/// The physics world: entity store, broad-phase index and the event list,
/// advanced by [`tick`](Self::tick).
///
/// Single-threaded and synchronous: one tick is a blocking pass of
/// (store, dt) to (updated store, events). The store must not be mutated
/// by outside collaborators while a tick runs; ownership transfers to
/// them only between ticks. The index and all collision records are
/// tick-scoped and never survive into the next tick.
pub struct PhysicsWorld {
    pub store: EntityStore,
    config: WorldConfig,
    index: SpatialIndex,
    events: Vec<PhysicsEvent>,
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    pub fn with_config(config: WorldConfig) -> Self {
        Self {
            store: EntityStore::new(),
            index: SpatialIndex::new(config.cell_size),
            events: Vec::with_capacity(32),
            config,
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Spawn an entity into the store.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        self.store.spawn(entity)
    }

    /// Despawn an entity; contact lists are purged in the same call.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        self.store.despawn(id)
    }

    /// Events accumulated since the last [`clear_events`](Self::clear_events):
    /// force calls first, then this tick's collisions and boundary events,
    /// in resolution order.
    pub fn events(&self) -> &[PhysicsEvent] {
        &self.events
    }

    /// Reset the event list. Call after consumers have read it.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    // -- Force application (call before a tick) --

    /// Jump with the given force, or the configured default. Returns
    /// whether the jump happened (the entity was grounded).
    pub fn apply_jump(&mut self, id: EntityId, force: Option<f32>) -> bool {
        let force = force.unwrap_or(self.config.jump_force);
        let Some(entity) = self.store.get_mut(id) else {
            return false;
        };
        if forces::apply_jump(entity, force) {
            self.events.push(PhysicsEvent::Jump { entity: id });
            true
        } else {
            false
        }
    }

    /// Apply an acceleration impulse scaled by inverse mass.
    pub fn apply_force(&mut self, id: EntityId, force: Vec2) {
        if let Some(entity) = self.store.get_mut(id) {
            if !entity.is_static && entity.active {
                forces::apply_force(entity, force);
                self.events.push(PhysicsEvent::ForceApplied { entity: id, force });
            }
        }
    }

    /// Overwrite an entity's velocity.
    pub fn apply_impulse(&mut self, id: EntityId, velocity: Vec2) {
        if let Some(entity) = self.store.get_mut(id) {
            if !entity.is_static && entity.active {
                forces::apply_impulse(entity, velocity);
                self.events
                    .push(PhysicsEvent::ImpulseApplied { entity: id, velocity });
            }
        }
    }

    // -- Tick --

    /// Advance the simulation by `dt` and return the event list.
    ///
    /// Pipeline: clamp dt, advance platform behaviors, integrate
    /// gravity/friction/position, rebuild the spatial index, then detect
    /// and resolve collisions per entity in id order, and finally enforce
    /// world boundaries.
    pub fn tick(&mut self, dt: f32) -> &[PhysicsEvent] {
        let dt = dt.clamp(0.0, self.config.max_dt);

        platform::advance_all(&mut self.store, dt);
        self.integrate(dt);
        self.index.rebuild(self.store.iter());

        for id in self.store.ids() {
            let candidates = {
                let Some(entity) = self.store.get(id) else {
                    continue;
                };
                if entity.is_static || !entity.active {
                    continue;
                }
                self.index.query(entity)
            };
            for other in candidates {
                // a candidate may have despawned or be a broken platform;
                // both are skipped, not errors
                let Some((a, b)) = self.store.get_pair_mut(id, other) else {
                    continue;
                };
                if !b.active || !b.solid() {
                    continue;
                }
                let Some(record) = collision::detect(a, b) else {
                    continue;
                };
                if resolve::resolve(a, b, &record) {
                    self.events.push(PhysicsEvent::Collision {
                        entity_a: id,
                        entity_b: other,
                        side: record.side,
                    });
                }
            }
        }

        bounds::enforce(&mut self.store, self.config.kill_plane_y, &mut self.events);
        &self.events
    }

    fn integrate(&mut self, dt: f32) {
        for entity in self.store.iter_mut() {
            if entity.is_static || !entity.active {
                continue;
            }
            entity.prev_pos = entity.pos;
            if entity.gravity {
                entity.vel.y += self.config.gravity * dt;
            }
            if entity.friction {
                entity.vel.x *= self.config.friction;
            }
            entity.pos += entity.vel * dt;
            // per-tick contact state starts fresh
            entity.grounded = false;
            entity.colliding = false;
            entity.contacts.clear();
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::CollisionSide;
    use crate::components::platform::{Axis, BreakingState, MovingState, PlatformBehavior};

    fn world() -> PhysicsWorld {
        // dt = 1 tick units, no friction surprises
        PhysicsWorld::with_config(WorldConfig {
            gravity: 0.5,
            friction: 1.0,
            ..WorldConfig::default()
        })
    }

    fn player(pos: Vec2) -> Entity {
        Entity::new().with_pos(pos).with_size(Vec2::splat(10.0))
    }

    #[test]
    fn falling_entity_lands_on_a_platform() {
        let mut w = world();
        let platform = w.spawn(Entity::platform(Vec2::new(0.0, 100.0), Vec2::new(100.0, 10.0)));
        let hero = w.spawn(player(Vec2::new(0.0, 80.0)));

        for _ in 0..10 {
            w.tick(1.0);
        }

        let e = w.store.get(hero).unwrap();
        assert_eq!(e.pos.y, 90.0);
        assert!(e.grounded);
        assert_eq!(e.vel.y, 0.0);
        assert!(w.events().iter().any(|ev| matches!(
            ev,
            PhysicsEvent::Collision { entity_a, entity_b, side: CollisionSide::Bottom }
                if *entity_a == hero && *entity_b == platform
        )));
    }

    #[test]
    fn jump_only_works_from_the_ground() {
        let mut w = world();
        w.spawn(Entity::platform(Vec2::new(0.0, 100.0), Vec2::new(100.0, 10.0)));
        let hero = w.spawn(player(Vec2::new(0.0, 85.0)));

        assert!(!w.apply_jump(hero, None));

        for _ in 0..10 {
            w.tick(1.0);
        }
        assert!(w.apply_jump(hero, Some(8.0)));
        assert_eq!(w.store.get(hero).unwrap().vel.y, -8.0);
        assert!(w
            .events()
            .iter()
            .any(|ev| matches!(ev, PhysicsEvent::Jump { entity } if *entity == hero)));
    }

    #[test]
    fn moving_platform_carries_its_rider() {
        let mut w = world();
        let pos = Vec2::new(0.0, 100.0);
        w.spawn(
            Entity::platform(pos, Vec2::new(50.0, 10.0)).with_platform(PlatformBehavior::Moving(
                MovingState::new(pos, Axis::X, 1.0, 100.0),
            )),
        );
        let rider = w.spawn(player(Vec2::new(10.0, 90.0)));

        for _ in 0..5 {
            w.tick(1.0);
        }

        let e = w.store.get(rider).unwrap();
        assert_eq!(e.pos.x, 15.0);
        assert_eq!(e.pos.y, 90.0);
        assert!(e.grounded);
    }

    #[test]
    fn breaking_platform_drops_its_occupant_when_broken() {
        let mut w = world();
        w.spawn(
            Entity::platform(Vec2::new(0.0, 100.0), Vec2::new(100.0, 10.0)).with_platform(
                PlatformBehavior::Breaking(BreakingState::new(3.0, 50.0)),
            ),
        );
        let hero = w.spawn(player(Vec2::new(0.0, 90.0)));

        // first tick lands and triggers the break
        w.tick(1.0);
        assert!(w.store.get(hero).unwrap().grounded);

        // platform breaks after its timer; the hero falls through
        for _ in 0..6 {
            w.tick(1.0);
        }
        let e = w.store.get(hero).unwrap();
        assert!(!e.grounded);
        assert!(e.pos.y > 90.0);
    }

    #[test]
    fn one_way_platform_lets_a_jumper_through_then_catches_it() {
        let mut w = world();
        w.spawn(
            Entity::platform(Vec2::new(0.0, 100.0), Vec2::new(100.0, 10.0)).with_one_way(true),
        );
        // launched upward from below the platform
        let hero = w.spawn(player(Vec2::new(0.0, 115.0)).with_vel(Vec2::new(0.0, -8.0)));

        let mut min_y = f32::MAX;
        for _ in 0..40 {
            w.tick(1.0);
            min_y = min_y.min(w.store.get(hero).unwrap().pos.y);
        }
        // made it above the platform on the way up, and landed on it after
        assert!(min_y < 90.0, "hero never passed through: min_y={}", min_y);
        let e = w.store.get(hero).unwrap();
        assert_eq!(e.pos.y, 90.0);
        assert!(e.grounded);
    }

    #[test]
    fn kill_plane_emits_fell_off_world() {
        let mut w = PhysicsWorld::with_config(WorldConfig {
            gravity: 0.5,
            friction: 1.0,
            kill_plane_y: Some(150.0),
            ..WorldConfig::default()
        });
        let hero = w.spawn(player(Vec2::new(0.0, 100.0)));

        for _ in 0..20 {
            w.tick(1.0);
        }
        let falls: Vec<_> = w
            .events()
            .iter()
            .filter(|ev| matches!(ev, PhysicsEvent::FellOffWorld { entity } if *entity == hero))
            .collect();
        assert_eq!(falls.len(), 1);
    }

    #[test]
    fn world_bounds_contain_the_entity() {
        let mut w = world();
        let hero = w.spawn(
            player(Vec2::new(5.0, 5.0))
                .with_vel(Vec2::new(-20.0, 0.0))
                .with_gravity(false)
                .with_bounds(Vec2::ZERO, Vec2::new(200.0, 200.0)),
        );
        w.tick(1.0);
        let e = w.store.get(hero).unwrap();
        assert_eq!(e.pos.x, 0.0);
        assert_eq!(e.vel.x, 0.0);
    }

    #[test]
    fn force_and_impulse_emit_events_in_call_order() {
        let mut w = world();
        let hero = w.spawn(player(Vec2::ZERO).with_gravity(false));
        w.apply_force(hero, Vec2::new(2.0, 0.0));
        w.apply_impulse(hero, Vec2::new(0.0, -5.0));
        assert_eq!(
            w.events(),
            &[
                PhysicsEvent::ForceApplied { entity: hero, force: Vec2::new(2.0, 0.0) },
                PhysicsEvent::ImpulseApplied { entity: hero, velocity: Vec2::new(0.0, -5.0) },
            ]
        );
        w.clear_events();
        assert!(w.events().is_empty());
    }

    #[test]
    fn dt_is_clamped_to_the_configured_maximum() {
        let mut w = world();
        let hero = w.spawn(player(Vec2::ZERO).with_vel(Vec2::new(1.0, 0.0)).with_gravity(false));
        // a 100-unit stall must not integrate 100 ticks worth of motion
        w.tick(100.0);
        let e = w.store.get(hero).unwrap();
        assert_eq!(e.pos.x, w.config().max_dt);
    }

    #[test]
    fn despawn_mid_frame_leaves_no_dangling_contacts() {
        let mut w = world();
        let platform = w.spawn(Entity::platform(Vec2::new(0.0, 100.0), Vec2::new(100.0, 10.0)));
        let hero = w.spawn(player(Vec2::new(0.0, 90.0)));
        w.tick(1.0);
        assert!(!w.store.get(hero).unwrap().contacts.is_empty());

        w.despawn(platform);
        assert!(w.store.get(hero).unwrap().contacts.is_empty());
    }

    #[test]
    fn friction_damps_horizontal_velocity() {
        let mut w = PhysicsWorld::with_config(WorldConfig {
            gravity: 0.0,
            friction: 0.5,
            ..WorldConfig::default()
        });
        let hero = w.spawn(player(Vec2::ZERO).with_vel(Vec2::new(8.0, 0.0)));
        w.tick(1.0);
        assert_eq!(w.store.get(hero).unwrap().vel.x, 4.0);
        w.tick(1.0);
        assert_eq!(w.store.get(hero).unwrap().vel.x, 2.0);
    }
}
