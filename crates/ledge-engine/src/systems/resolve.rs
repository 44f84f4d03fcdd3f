use glam::Vec2;

use crate::api::types::CollisionSide;
use crate::components::entity::{Contact, Entity};
use crate::components::platform::{BreakPhase, PlatformBehavior};
use crate::systems::collision::CollisionRecord;

/// State restored when a one-way platform rejects a correction.
struct Snapshot {
    pos: Vec2,
    vel: Vec2,
    colliding: bool,
    contacts_len: usize,
}

/// Apply position and velocity correction for one detected collision.
///
/// `a` is moved flush against `b` on the resolved side, its velocity
/// component on that axis is zeroed (or reflected by its bounciness), and
/// its contact bookkeeping updated. Platform hooks run for `b`: breaking
/// platforms get triggered by a landing, bouncy platforms override the
/// rebound, moving platforms carry the rider by their last displacement.
/// Non-static `b` receives a mass-weighted share of the arrival velocity
/// along the resolved axis.
///
/// Returns `false` when nothing was resolved: `a` is static (caller
/// error, tolerated as a no-op) or `b` is a one-way platform approached
/// from anywhere but above, in which case the whole correction is undone
/// and `a` passes through.
pub fn resolve(a: &mut Entity, b: &mut Entity, record: &CollisionRecord) -> bool {
    if a.is_static {
        return false;
    }

    let arrival_vel = a.vel;
    let snapshot = Snapshot {
        pos: a.pos,
        vel: a.vel,
        colliding: a.colliding,
        contacts_len: a.contacts.len(),
    };

    // positional correction: flush against b on the resolved side
    match record.side {
        CollisionSide::Bottom => a.pos.y = b.top() - a.size.y,
        CollisionSide::Top => a.pos.y = b.bottom(),
        CollisionSide::Right => a.pos.x = b.left() - a.size.x,
        CollisionSide::Left => a.pos.x = b.right(),
    }

    // velocity response: stop, then rebound by bounciness if any
    if record.side.is_vertical() {
        a.vel.y = if a.bounciness > 0.0 {
            -arrival_vel.y * a.bounciness
        } else {
            0.0
        };
    } else {
        a.vel.x = if a.bounciness > 0.0 {
            -arrival_vel.x * a.bounciness
        } else {
            0.0
        };
    }

    a.colliding = true;
    a.contacts.push(Contact {
        other: b.id,
        side: record.side,
    });
    if record.side == CollisionSide::Bottom {
        a.grounded = true;
    }

    // one-way override: only honored when landed on from above while
    // falling; otherwise undo everything and let a pass through
    if b.one_way && !(record.side == CollisionSide::Bottom && arrival_vel.y >= 0.0) {
        a.pos = snapshot.pos;
        a.vel = snapshot.vel;
        a.colliding = snapshot.colliding;
        a.contacts.truncate(snapshot.contacts_len);
        a.grounded = a
            .contacts
            .iter()
            .any(|c| c.side == CollisionSide::Bottom);
        return false;
    }

    // platform hooks, all keyed on a landing
    if record.side == CollisionSide::Bottom {
        match &mut b.platform {
            Some(PlatformBehavior::Breaking(state))
                if state.phase == BreakPhase::Stable && !state.triggered =>
            {
                state.triggered = true;
                state.phase = BreakPhase::Breaking;
                state.break_timer = 0.0;
            }
            Some(PlatformBehavior::Bouncy(state)) if arrival_vel.y > 0.0 => {
                a.vel.y = -arrival_vel.y.abs() * state.bounce_factor;
                a.grounded = false;
                state.compression = 1.0;
            }
            Some(PlatformBehavior::Moving(state)) => {
                // carry-along: the snap above already placed the rider
                // flush against the platform's post-move position, so
                // only the off-axis part of the displacement is applied
                a.pos.x += state.delta.x;
            }
            _ => {}
        }
    }

    // momentum exchange along the resolved axis only
    if !b.is_static {
        let combined = a.mass + b.mass;
        let ratio = if combined > 0.0 {
            a.mass / combined
        } else {
            0.5
        };
        if record.side.is_vertical() {
            b.vel.y = (arrival_vel.y + b.vel.y) * ratio;
        } else {
            b.vel.x = (arrival_vel.x + b.vel.x) * ratio;
        }
    }

    true
}
