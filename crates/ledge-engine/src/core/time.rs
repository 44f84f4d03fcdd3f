use crate::api::world::PhysicsWorld;

/// Fixed timestep driver for hosts feeding the world variable frame
/// deltas. Collects frame time and runs [`PhysicsWorld::tick`] once per
/// elapsed fixed step, so game logic advances at a consistent rate
/// regardless of frame rate. Backlog beyond the catch-up cap is dropped
/// rather than replayed, which keeps a long stall from snowballing.
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
    max_steps: u32,
}

impl FixedTimestep {
    /// Create a driver ticking every `dt` seconds. A non-positive dt is a
    /// configuration defect: it is replaced with 1/60 and logged, never
    /// treated as fatal.
    pub fn new(dt: f32) -> Self {
        let dt = if dt > 0.0 {
            dt
        } else {
            log::warn!("fixed timestep created with dt {}; defaulting to 1/60", dt);
            1.0 / 60.0
        };
        Self {
            dt,
            accumulator: 0.0,
            max_steps: 10,
        }
    }

    /// Cap on catch-up ticks per frame (default 10). At least one step is
    /// always allowed.
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps.max(1);
        self
    }

    /// Add frame time and tick `world` once per elapsed fixed step.
    /// Returns the number of ticks run; the world's events accumulate
    /// across them until the host clears the list.
    pub fn advance(&mut self, world: &mut PhysicsWorld, frame_dt: f32) -> u32 {
        let steps = self.accumulate(frame_dt);
        for _ in 0..steps {
            world.tick(self.dt);
        }
        steps
    }

    /// Add frame time to the accumulator and return the number of fixed
    /// steps it covers, capped at `max_steps`.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        self.accumulator = self.accumulator.min(self.dt * self.max_steps as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Interpolation alpha for rendering between ticks (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    /// The fixed delta time per tick.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}
