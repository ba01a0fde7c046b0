//! Match state and core simulation types
//!
//! One authoritative struct holds everything the match needs; it is only
//! mutated inside `tick` and `reset`, and serializes cleanly so a match
//! can be snapshotted mid-flight.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::goal::{EntrySlots, GoalPost, GoalZone, goal_posts};
use crate::config::SimConfig;

/// Field side / team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left side, player 1
    Blue,
    /// Right side, player 2
    Red,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Blue => Side::Red,
            Side::Red => Side::Blue,
        }
    }

    /// Player/zone array index: blue is 0, red is 1
    pub fn index(self) -> usize {
        match self {
            Side::Blue => 0,
            Side::Red => 1,
        }
    }

    pub fn from_index(index: usize) -> Side {
        if index == 0 { Side::Blue } else { Side::Red }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Clock running, physics live
    Playing,
    /// Clock exhausted; integration short-circuits until a reset
    GameOver,
}

/// A movable circular body (drone or ball)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Body {
    pub fn at_rest(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }
}

/// Score tally per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub blue: u32,
    pub red: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Blue => self.blue += 1,
            Side::Red => self.red += 1,
        }
    }

    pub fn for_side(&self, side: Side) -> u32 {
        match side {
            Side::Blue => self.blue,
            Side::Red => self.red,
        }
    }
}

/// Events emitted by a tick for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A goal was counted. `own_goal` is set when the entering drone's own
    /// side defends the goal it entered.
    Goal { scored_by: Side, own_goal: bool },
    /// The clock ran out
    MatchOver,
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: SimConfig,
    /// Drones, indexed by [`Side::index`]
    pub players: [Body; 2],
    /// Optional free ball (enabled via [`SimConfig::ball_enabled`])
    pub ball: Option<Body>,
    pub score: Score,
    /// Seconds left on the match clock
    pub time_remaining: f32,
    pub phase: MatchPhase,
    /// Goal-entry slots for both drones against both goals
    pub entry: EntrySlots,
    /// Seconds until the post-goal entry reset fires; `None` when nothing
    /// is pending. Cancelled by a match reset.
    pub entry_reset_timer: Option<f32>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Goal mouths, indexed by [`Side::index`]
    pub zones: [GoalZone; 2],
    /// Posts in collision priority order
    pub posts: [GoalPost; 4],
}

impl GameState {
    /// Create a fresh match from the given tuning
    pub fn new(config: SimConfig) -> Self {
        Self {
            players: Self::kickoff_players(&config),
            ball: Self::kickoff_ball(&config),
            score: Score::default(),
            time_remaining: config.match_duration,
            phase: MatchPhase::Playing,
            entry: EntrySlots::default(),
            entry_reset_timer: None,
            time_ticks: 0,
            zones: GoalZone::pair(&config),
            posts: goal_posts(&config),
            config,
        }
    }

    fn kickoff_players(config: &SimConfig) -> [Body; 2] {
        let center = config.field_center();
        [
            Body::at_rest(center - Vec2::new(config.start_offset_x, 0.0), config.drone_radius),
            Body::at_rest(center + Vec2::new(config.start_offset_x, 0.0), config.drone_radius),
        ]
    }

    fn kickoff_ball(config: &SimConfig) -> Option<Body> {
        config
            .ball_enabled
            .then(|| Body::at_rest(config.field_center(), config.ball_radius))
    }

    /// Return every body to its kickoff spot with zero velocity
    pub(crate) fn respawn_bodies(&mut self) {
        self.players = Self::kickoff_players(&self.config);
        self.ball = Self::kickoff_ball(&self.config);
    }

    /// Full match reset: scores, clock, phase, positions, entry tracking.
    /// Also cancels a pending post-goal entry reset.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::GameOver
    }
}
