use glam::Vec2;

/// How fast bouncy-platform compression relaxes, per tick.
pub const COMPRESSION_DECAY: f32 = 0.1;

/// Movement axis for a moving platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Platform behavior variants. Behavior-specific state is created at level
/// load and mutated only by the per-tick advance in
/// [`crate::systems::platform`] and the collision resolver's hooks.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformBehavior {
    /// Plain solid platform; no per-tick state.
    Fixed,
    /// Oscillates along one axis between `origin` and
    /// `origin + distance * direction`, pausing at each end.
    Moving(MovingState),
    /// Crumbles a fixed time after being stepped on, then respawns.
    Breaking(BreakingState),
    /// Launches entities that land on it.
    Bouncy(BouncyState),
}

impl PlatformBehavior {
    /// Whether this platform currently blocks new collisions.
    /// Only a fully broken platform is passable; a breaking one is still
    /// solid until its timer runs out.
    pub fn solid(&self) -> bool {
        match self {
            PlatformBehavior::Breaking(state) => state.phase != BreakPhase::Broken,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovingState {
    /// Anchor position the travel distance is measured from.
    pub origin: Vec2,
    pub axis: Axis,
    /// Distance travelled per tick at dt = 1.
    pub speed: f32,
    /// Maximum travel from the origin before flipping.
    pub distance: f32,
    /// +1.0 or -1.0 along the axis.
    pub direction: f32,
    /// Ticks of simulation time left to hold at an endpoint.
    pub pause_remaining: f32,
    /// Hold duration applied at each endpoint.
    pub pause_duration: f32,
    /// Displacement applied during the most recent advance. Read by the
    /// resolver to carry entities riding on top.
    pub delta: Vec2,
}

impl MovingState {
    pub fn new(origin: Vec2, axis: Axis, speed: f32, distance: f32) -> Self {
        Self {
            origin,
            axis,
            speed,
            distance,
            direction: 1.0,
            pause_remaining: 0.0,
            pause_duration: 0.0,
            delta: Vec2::ZERO,
        }
    }

    pub fn with_pause(mut self, duration: f32) -> Self {
        self.pause_duration = duration;
        self
    }

    pub fn with_direction(mut self, direction: f32) -> Self {
        self.direction = if direction < 0.0 { -1.0 } else { 1.0 };
        self
    }
}

/// Lifecycle phase of a breaking platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakPhase {
    Stable,
    Breaking,
    Broken,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakingState {
    pub phase: BreakPhase,
    /// Simulation time accumulated since the platform was triggered.
    pub break_timer: f32,
    /// How long the platform stays solid after being triggered.
    pub break_duration: f32,
    /// Simulation time accumulated since the platform broke.
    pub respawn_timer: f32,
    /// How long the platform stays broken before returning to stable.
    pub respawn_duration: f32,
    /// Set on the first landing; prevents re-triggering while breaking.
    pub triggered: bool,
}

impl BreakingState {
    pub fn new(break_duration: f32, respawn_duration: f32) -> Self {
        Self {
            phase: BreakPhase::Stable,
            break_timer: 0.0,
            break_duration,
            respawn_timer: 0.0,
            respawn_duration,
            triggered: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BouncyState {
    /// Multiplier applied to the arrival speed on launch.
    pub bounce_factor: f32,
    /// Render-only squash amount in [0, 1]. Set to 1 on a bounce, decays
    /// linearly back to 0. Never read by the physics logic.
    pub compression: f32,
}

impl BouncyState {
    pub fn new(bounce_factor: f32) -> Self {
        Self {
            bounce_factor,
            compression: 0.0,
        }
    }
}
