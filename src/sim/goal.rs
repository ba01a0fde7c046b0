//! Goal zones, posts, and the goal-entry state machine
//!
//! The trickiest invariant in the game lives here: a drone scores exactly
//! once per front entry into a goal mouth, never while it lingers inside,
//! and never when it backs in. Direction is judged from the drone's
//! x-movement over the tick; an exactly-zero movement never scores.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Side;
use crate::config::SimConfig;

/// A fixed circular goal post
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalPost {
    pub pos: Vec2,
    pub radius: f32,
}

/// Rectangular goal mouth for one side of the field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalZone {
    /// Which side owns (defends) this goal
    pub side: Side,
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl GoalZone {
    /// The blue (left) goal mouth
    pub fn blue(config: &SimConfig) -> Self {
        let center_y = config.field_height / 2.0;
        Self {
            side: Side::Blue,
            x_min: config.goal_distance,
            x_max: config.goal_distance + config.goal_width,
            y_min: center_y - config.goal_height / 2.0,
            y_max: center_y + config.goal_height / 2.0,
        }
    }

    /// The red (right) goal mouth
    pub fn red(config: &SimConfig) -> Self {
        let center_y = config.field_height / 2.0;
        Self {
            side: Side::Red,
            x_min: config.field_width - config.goal_distance - config.goal_width,
            x_max: config.field_width - config.goal_distance,
            y_min: center_y - config.goal_height / 2.0,
            y_max: center_y + config.goal_height / 2.0,
        }
    }

    /// Both zones, indexed by [`Side::index`]
    pub fn pair(config: &SimConfig) -> [GoalZone; 2] {
        [Self::blue(config), Self::red(config)]
    }

    /// Bounds are inclusive on all four edges
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= self.x_min && pos.x <= self.x_max && pos.y >= self.y_min && pos.y <= self.y_max
    }

    /// The side credited when something enters this goal
    pub fn awards(&self) -> Side {
        self.side.opponent()
    }

    /// Whether an x-movement of `dx` crosses this goal mouth from the front
    ///
    /// Strictly negative into the left goal, strictly positive into the
    /// right goal; zero movement is never an entry.
    pub fn entered_from_front(&self, dx: f32) -> bool {
        match self.side {
            Side::Blue => dx < 0.0,
            Side::Red => dx > 0.0,
        }
    }
}

/// The four goal posts in collision priority order: blue-top, blue-bottom,
/// red-top, red-bottom. Only the first overlapping post is resolved per
/// body per tick.
pub fn goal_posts(config: &SimConfig) -> [GoalPost; 4] {
    let center_y = config.field_height / 2.0;
    let half_mouth = config.goal_height / 2.0;
    let blue_x = config.goal_distance;
    let red_x = config.field_width - config.goal_distance;
    let radius = config.post_radius;
    [
        GoalPost {
            pos: Vec2::new(blue_x, center_y - half_mouth),
            radius,
        },
        GoalPost {
            pos: Vec2::new(blue_x, center_y + half_mouth),
            radius,
        },
        GoalPost {
            pos: Vec2::new(red_x, center_y - half_mouth),
            radius,
        },
        GoalPost {
            pos: Vec2::new(red_x, center_y + half_mouth),
            radius,
        },
    ]
}

/// Goal-entry tracking for both drones against both goals
///
/// Each slot is the truthful "currently inside this goal's rectangle"
/// state for one (drone, goal) pair; four slots total. A slot flips to
/// Inside on any entry, but only a front entry fires a score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySlots {
    inside: [[bool; 2]; 2],
}

impl EntrySlots {
    pub fn clear(&mut self) {
        self.inside = [[false; 2]; 2];
    }

    pub fn is_inside(&self, drone: usize, zone: usize) -> bool {
        self.inside[drone][zone]
    }

    /// Re-derive every slot from current drone positions.
    ///
    /// Used by the delayed post-goal reset: a drone still parked inside a
    /// goal keeps its Inside state, so it cannot score again without
    /// leaving the mouth first.
    pub fn resync(&mut self, positions: [Vec2; 2], zones: &[GoalZone; 2]) {
        for (drone, pos) in positions.iter().enumerate() {
            for (z, zone) in zones.iter().enumerate() {
                self.inside[drone][z] = zone.contains(*pos);
            }
        }
    }

    /// Advance one drone's entry state against one zone.
    ///
    /// `dx` is the drone's x-movement over the tick. Returns the side to
    /// credit when this tick is a scoring front entry.
    pub fn advance(
        &mut self,
        drone: usize,
        zone_idx: usize,
        zone: &GoalZone,
        pos: Vec2,
        dx: f32,
    ) -> Option<Side> {
        let slot = &mut self.inside[drone][zone_idx];
        let was_inside = *slot;
        let now_inside = zone.contains(pos);
        *slot = now_inside;

        if now_inside && !was_inside && zone.entered_from_front(dx) {
            return Some(zone.awards());
        }
        None
    }
}

/// Ball scoring: any entry into a goal mouth counts for the awardee, with
/// no directional gating. The caller resets the ball to the center spot.
pub fn check_ball_goal(zones: &[GoalZone; 2], pos: Vec2) -> Option<Side> {
    zones
        .iter()
        .find(|zone| zone.contains(pos))
        .map(GoalZone::awards)
}
