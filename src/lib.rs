//! Drone Soccer - a two-player arcade game on a rectangular pitch
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, goal detection, match state)
//! - `config`: Injectable tuning constants
//! - `input`: Pad-state aggregation for the host input layer
//!
//! The simulation runs headless: the host shell feeds direction vectors in
//! through [`sim::TickInput`] and reads positions and scores back each frame.

pub mod config;
pub mod input;
pub mod sim;

pub use config::{PostGoalPolicy, SimConfig};

/// Default tuning constants
pub mod consts {
    /// Nominal frame delta at the 60 Hz target (the sim accepts variable dt)
    pub const NOMINAL_DT: f32 = 1.0 / 60.0;

    /// Pitch dimensions in pixels (a 20m x 10m field)
    pub const FIELD_WIDTH: f32 = 1000.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Drone radius (0.4m diameter)
    pub const DRONE_RADIUS: f32 = 15.0;
    /// Ball radius (0.4m diameter)
    pub const BALL_RADIUS: f32 = 15.0;
    /// Drone speed while a pad direction is held
    pub const DRONE_SPEED: f32 = 8.0;

    /// Match length in seconds
    pub const MATCH_DURATION: f32 = 180.0;

    /// Goal mouth geometry (2m in from the boundary)
    pub const GOAL_DISTANCE: f32 = 100.0;
    pub const GOAL_WIDTH: f32 = 10.0;
    pub const GOAL_HEIGHT: f32 = 50.0;
    /// Goal post radius (0.2m diameter posts)
    pub const POST_RADIUS: f32 = 5.0;

    /// Per-tick velocity damping for drones
    pub const DRONE_DAMPING: f32 = 0.98;
    /// Per-tick velocity damping for the ball
    pub const BALL_DAMPING: f32 = 0.99;
    /// Restitution for body-body and body-post impacts
    pub const RESTITUTION: f32 = 0.9;
    /// Fraction of speed retained after a wall bounce
    pub const WALL_ELASTICITY: f32 = 0.8;

    /// Drone kickoff offset from field center on the x axis
    pub const START_OFFSET_X: f32 = 250.0;
    /// Seconds between a goal and the entry-slot reset
    pub const ENTRY_RESET_DELAY: f32 = 1.0;
}
