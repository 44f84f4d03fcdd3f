use glam::Vec2;

use crate::components::entity::Entity;
use crate::components::platform::{
    Axis, BouncyState, BreakPhase, BreakingState, MovingState, PlatformBehavior, COMPRESSION_DECAY,
};
use crate::core::store::EntityStore;

/// Advance every platform's behavior state by `dt`.
/// Runs once per tick, before collision resolution, so the resolver sees
/// this tick's platform positions and displacements. Timers accumulate
/// simulation time, not wall clock: pausing the loop pauses platforms.
pub fn advance_all(store: &mut EntityStore, dt: f32) {
    for entity in store.iter_mut() {
        if entity.active {
            advance(entity, dt);
        }
    }
}

/// Advance one entity's platform behavior, if it has one.
pub fn advance(entity: &mut Entity, dt: f32) {
    let Some(mut behavior) = entity.platform.take() else {
        return;
    };
    match &mut behavior {
        PlatformBehavior::Fixed => {}
        PlatformBehavior::Moving(state) => advance_moving(entity, state, dt),
        PlatformBehavior::Breaking(state) => advance_breaking(state, dt),
        PlatformBehavior::Bouncy(state) => advance_bouncy(state, dt),
    }
    entity.platform = Some(behavior);
}

fn advance_moving(entity: &mut Entity, state: &mut MovingState, dt: f32) {
    if state.pause_remaining > 0.0 {
        state.pause_remaining -= dt;
        state.delta = Vec2::ZERO;
        return;
    }

    let before = entity.pos;
    let step = state.speed * state.direction * dt;
    match state.axis {
        Axis::X => entity.pos.x += step,
        Axis::Y => entity.pos.y += step,
    }

    let travelled = match state.axis {
        Axis::X => entity.pos.x - state.origin.x,
        Axis::Y => entity.pos.y - state.origin.y,
    };
    if travelled.abs() >= state.distance {
        // clamp to the endpoint, flip, and start the pause
        let endpoint = state.distance * state.direction;
        match state.axis {
            Axis::X => entity.pos.x = state.origin.x + endpoint,
            Axis::Y => entity.pos.y = state.origin.y + endpoint,
        }
        state.direction = -state.direction;
        state.pause_remaining = state.pause_duration;
    }

    state.delta = entity.pos - before;
}

fn advance_breaking(state: &mut BreakingState, dt: f32) {
    match state.phase {
        BreakPhase::Stable => {}
        BreakPhase::Breaking => {
            state.break_timer += dt;
            if state.break_timer >= state.break_duration {
                state.phase = BreakPhase::Broken;
                state.respawn_timer = 0.0;
            }
        }
        BreakPhase::Broken => {
            state.respawn_timer += dt;
            if state.respawn_timer >= state.respawn_duration {
                *state = BreakingState::new(state.break_duration, state.respawn_duration);
            }
        }
    }
}

fn advance_bouncy(state: &mut BouncyState, dt: f32) {
    state.compression = (state.compression - COMPRESSION_DECAY * dt).max(0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moving_platform(speed: f32, distance: f32, pause: f32) -> Entity {
        let pos = Vec2::new(0.0, 100.0);
        Entity::platform(pos, Vec2::new(50.0, 10.0)).with_platform(PlatformBehavior::Moving(
            MovingState::new(pos, Axis::X, speed, distance).with_pause(pause),
        ))
    }

    fn moving_state(entity: &Entity) -> &MovingState {
        match entity.platform.as_ref().unwrap() {
            PlatformBehavior::Moving(state) => state,
            other => panic!("expected moving state, got {:?}", other),
        }
    }

    #[test]
    fn moving_platform_flips_at_the_endpoint_and_pauses() {
        // distance 100, speed 1, dt 1: at x=100 after 100
        // ticks, then held for the pause duration before moving again
        let mut platform = moving_platform(1.0, 100.0, 3.0);
        for _ in 0..100 {
            advance(&mut platform, 1.0);
        }
        assert_eq!(platform.pos.x, 100.0);
        assert_eq!(moving_state(&platform).direction, -1.0);

        // held in place for 3 ticks
        for _ in 0..3 {
            advance(&mut platform, 1.0);
            assert_eq!(platform.pos.x, 100.0);
        }
        // then moving back
        advance(&mut platform, 1.0);
        assert_eq!(platform.pos.x, 99.0);
    }

    #[test]
    fn moving_platform_overshoot_clamps_to_endpoint() {
        let mut platform = moving_platform(7.0, 10.0, 0.0);
        advance(&mut platform, 1.0); // x = 7
        advance(&mut platform, 1.0); // would be 14, clamps to 10
        assert_eq!(platform.pos.x, 10.0);
        assert_eq!(moving_state(&platform).direction, -1.0);
    }

    #[test]
    fn moving_platform_records_its_displacement() {
        let mut platform = moving_platform(2.0, 100.0, 0.0);
        advance(&mut platform, 1.0);
        assert_eq!(moving_state(&platform).delta, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn paused_platform_has_zero_displacement() {
        let mut platform = moving_platform(1.0, 2.0, 5.0);
        advance(&mut platform, 1.0);
        advance(&mut platform, 1.0); // reaches endpoint, pauses
        advance(&mut platform, 1.0);
        assert_eq!(moving_state(&platform).delta, Vec2::ZERO);
    }

    #[test]
    fn breaking_platform_full_lifecycle() {
        let mut state = BreakingState::new(3.0, 5.0);
        // stable until triggered
        advance_breaking(&mut state, 10.0);
        assert_eq!(state.phase, BreakPhase::Stable);

        state.phase = BreakPhase::Breaking;
        state.triggered = true;
        // still solid while the break timer runs
        advance_breaking(&mut state, 1.0);
        advance_breaking(&mut state, 1.0);
        assert_eq!(state.phase, BreakPhase::Breaking);
        assert!(PlatformBehavior::Breaking(state.clone()).solid());

        advance_breaking(&mut state, 1.0);
        assert_eq!(state.phase, BreakPhase::Broken);
        assert!(!PlatformBehavior::Breaking(state.clone()).solid());

        // respawns exactly respawn_duration after breaking
        for _ in 0..4 {
            advance_breaking(&mut state, 1.0);
            assert_eq!(state.phase, BreakPhase::Broken);
        }
        advance_breaking(&mut state, 1.0);
        assert_eq!(state.phase, BreakPhase::Stable);
        assert!(!state.triggered);
        assert_eq!(state.break_timer, 0.0);
    }

    #[test]
    fn bouncy_compression_decays_to_zero() {
        let mut state = BouncyState::new(1.5);
        state.compression = 1.0;
        advance_bouncy(&mut state, 1.0);
        assert_eq!(state.compression, 1.0 - COMPRESSION_DECAY);
        for _ in 0..20 {
            advance_bouncy(&mut state, 1.0);
        }
        assert_eq!(state.compression, 0.0);
    }

    #[test]
    fn vertical_axis_moves_y() {
        let pos = Vec2::new(0.0, 50.0);
        let mut platform = Entity::platform(pos, Vec2::new(50.0, 10.0)).with_platform(
            PlatformBehavior::Moving(MovingState::new(pos, Axis::Y, 2.0, 100.0)),
        );
        advance(&mut platform, 1.0);
        assert_eq!(platform.pos, Vec2::new(0.0, 52.0));
        assert_eq!(moving_state(&platform).delta, Vec2::new(0.0, 2.0));
    }
}
