//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One authoritative state, advanced only by `tick`
//! - Variable host-measured dt, no hidden timers
//! - No rendering or platform dependencies

pub mod collision;
pub mod goal;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{
    resolve_body_collision, resolve_first_post_collision, resolve_post_collision,
    resolve_wall_collision,
};
pub use goal::{EntrySlots, GoalPost, GoalZone, check_ball_goal, goal_posts};
pub use state::{Body, GameEvent, GameState, MatchPhase, Score, Side};
pub use tick::{TickInput, tick};
