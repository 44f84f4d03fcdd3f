use serde::{Deserialize, Serialize};

/// Tuning constants for the physics world, provided by the game.
/// All fields have defaults so a partial JSON config is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Downward acceleration per tick squared (Y-down coordinates).
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    /// Per-tick multiplicative damping applied to horizontal velocity of
    /// entities with friction enabled. Not dt-scaled.
    #[serde(default = "default_friction")]
    pub friction: f32,
    /// Upper clamp on the delta time fed into one tick. Guards against
    /// runaway integration after a stall.
    #[serde(default = "default_max_dt")]
    pub max_dt: f32,
    /// Cell size of the broad-phase spatial hash, in world units.
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
    /// Default jump strength. Applied as a negative (upward) Y velocity.
    #[serde(default = "default_jump_force")]
    pub jump_force: f32,
    /// Entities whose top edge falls below this Y emit a
    /// [`FellOffWorld`](crate::api::types::PhysicsEvent::FellOffWorld)
    /// event. Disabled when `None`.
    #[serde(default)]
    pub kill_plane_y: Option<f32>,
}

fn default_gravity() -> f32 {
    0.5
}

fn default_friction() -> f32 {
    0.8
}

fn default_max_dt() -> f32 {
    2.0
}

fn default_cell_size() -> f32 {
    100.0
}

fn default_jump_force() -> f32 {
    12.0
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: default_gravity(),
            friction: default_friction(),
            max_dt: default_max_dt(),
            cell_size: default_cell_size(),
            jump_force: default_jump_force(),
            kill_plane_y: None,
        }
    }
}

impl WorldConfig {
    /// Parse a config from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_partial_config() {
        let config = WorldConfig::from_json(r#"{ "gravity": 1.0, "kill_plane_y": 600.0 }"#).unwrap();
        assert_eq!(config.gravity, 1.0);
        assert_eq!(config.kill_plane_y, Some(600.0));
        // untouched fields take defaults
        assert_eq!(config.cell_size, 100.0);
        assert_eq!(config.friction, 0.8);
    }

    #[test]
    fn parse_empty_config_is_default() {
        let config = WorldConfig::from_json("{}").unwrap();
        assert_eq!(config.gravity, WorldConfig::default().gravity);
        assert_eq!(config.kill_plane_y, None);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(WorldConfig::from_json("not json").is_err());
    }
}
