//! Injectable simulation tuning
//!
//! Every constant the sim depends on lives here so tests can shrink the
//! pitch or move the posts without touching the physics. Values are fixed
//! at startup; nothing reads them back mid-match.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts;

/// What happens to entities when the post-goal delay elapses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PostGoalPolicy {
    /// Drones and ball stay where the goal left them
    #[default]
    HoldPositions,
    /// Drones and ball return to their kickoff spots
    ResetPositions,
}

/// Simulation tuning, serializable so a match setup can be loaded from disk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub field_width: f32,
    pub field_height: f32,
    pub drone_radius: f32,
    pub ball_radius: f32,
    /// Speed assigned to a drone while its pad reports a direction
    pub drone_speed: f32,
    /// Match length in seconds
    pub match_duration: f32,
    /// Goal mouth distance from the field boundary
    pub goal_distance: f32,
    pub goal_width: f32,
    pub goal_height: f32,
    pub post_radius: f32,
    pub drone_damping: f32,
    pub ball_damping: f32,
    /// Restitution for body-body and body-post impacts
    pub restitution: f32,
    /// Fraction of speed kept after a wall bounce (kept separate from
    /// `restitution` on purpose - they are tuned independently)
    pub wall_elasticity: f32,
    /// Drone kickoff offset from field center on the x axis
    pub start_offset_x: f32,
    /// Seconds between a goal and the entry-slot reset
    pub entry_reset_delay: f32,
    pub post_goal_policy: PostGoalPolicy,
    /// Spawn a ball at field center in addition to the two drones
    pub ball_enabled: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            field_width: consts::FIELD_WIDTH,
            field_height: consts::FIELD_HEIGHT,
            drone_radius: consts::DRONE_RADIUS,
            ball_radius: consts::BALL_RADIUS,
            drone_speed: consts::DRONE_SPEED,
            match_duration: consts::MATCH_DURATION,
            goal_distance: consts::GOAL_DISTANCE,
            goal_width: consts::GOAL_WIDTH,
            goal_height: consts::GOAL_HEIGHT,
            post_radius: consts::POST_RADIUS,
            drone_damping: consts::DRONE_DAMPING,
            ball_damping: consts::BALL_DAMPING,
            restitution: consts::RESTITUTION,
            wall_elasticity: consts::WALL_ELASTICITY,
            start_offset_x: consts::START_OFFSET_X,
            entry_reset_delay: consts::ENTRY_RESET_DELAY,
            post_goal_policy: PostGoalPolicy::HoldPositions,
            ball_enabled: false,
        }
    }
}

impl SimConfig {
    /// Field center point (the ball's kickoff spot)
    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Load tuning from a JSON file, falling back to defaults on any failure
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded tuning from {path}");
                    config
                }
                Err(err) => {
                    log::warn!("Bad tuning file {path}: {err}; using defaults");
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Cannot read tuning file {path}: {err}; using defaults");
                Self::default()
            }
        }
    }
}
