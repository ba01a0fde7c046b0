//! Per-frame simulation step
//!
//! One authoritative transition advances the whole match: clock, pending
//! post-goal reset, integration, collision resolution, goal detection.
//! The host calls [`tick`] once per display frame with the measured
//! elapsed seconds; nothing else mutates the state.

use glam::Vec2;

use super::collision::{
    resolve_body_collision, resolve_first_post_collision, resolve_wall_collision,
};
use super::goal::check_ball_goal;
use super::state::{Body, GameEvent, GameState, MatchPhase, Side};
use crate::config::PostGoalPolicy;
use crate::input::sanitize_direction;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pad direction observed this frame, per player. `None` leaves the
    /// drone coasting under damping; `Some(ZERO)` is an active stop.
    pub pads: [Option<Vec2>; 2],
    /// Start a fresh match (the play-again action)
    pub reset: bool,
}

/// Advance the match by one frame of `dt` elapsed seconds
///
/// Tolerates a variable frame delta. Returns the events the frame
/// produced, for the presentation layer to react to.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.reset {
        state.reset();
        return events;
    }
    if state.phase == MatchPhase::GameOver {
        return events;
    }

    // Countdown. The tick that exhausts the clock ends the match before
    // any further integration.
    state.time_remaining = (state.time_remaining - dt).max(0.0);
    if state.time_remaining <= 0.0 {
        state.time_remaining = 0.0;
        state.phase = MatchPhase::GameOver;
        events.push(GameEvent::MatchOver);
        return events;
    }

    // Pending post-goal entry reset. Slots re-derive from geometry rather
    // than blindly clearing: a drone still parked in a goal mouth stays
    // Inside and cannot score again without leaving first.
    if let Some(remaining) = state.entry_reset_timer {
        let remaining = remaining - dt;
        if remaining <= 0.0 {
            state.entry_reset_timer = None;
            if state.config.post_goal_policy == PostGoalPolicy::ResetPositions {
                state.respawn_bodies();
            }
            let positions = [state.players[0].pos, state.players[1].pos];
            state.entry.resync(positions, &state.zones);
        } else {
            state.entry_reset_timer = Some(remaining);
        }
    }

    // Pre-movement x positions anchor the goal-entry direction check for
    // this tick; both are captured before any integration.
    let prev_x = [state.players[0].pos.x, state.players[1].pos.x];

    // Integrate drones: pad command, damping, then movement
    for (drone, pad) in state.players.iter_mut().zip(input.pads) {
        if let Some(raw) = pad {
            drone.vel = sanitize_direction(raw) * state.config.drone_speed;
        }
        drone.vel *= state.config.drone_damping;
        drone.pos += drone.vel;
    }
    if let Some(ball) = state.ball.as_mut() {
        ball.vel *= state.config.ball_damping;
        ball.pos += ball.vel;
    }

    // Drone-drone impact
    let [p1, p2] = &mut state.players;
    resolve_body_collision(p1, p2, state.config.restitution);

    // Drone-ball impacts
    if let Some(ball) = state.ball.as_mut() {
        for drone in state.players.iter_mut() {
            resolve_body_collision(drone, ball, state.config.restitution);
        }
    }

    // Posts, first overlapping one wins per body, then walls
    for drone in state.players.iter_mut() {
        resolve_first_post_collision(drone, &state.posts, state.config.restitution);
        resolve_wall_collision(
            drone,
            state.config.field_width,
            state.config.field_height,
            state.config.wall_elasticity,
        );
    }
    if let Some(ball) = state.ball.as_mut() {
        resolve_first_post_collision(ball, &state.posts, state.config.restitution);
        resolve_wall_collision(
            ball,
            state.config.field_width,
            state.config.field_height,
            state.config.wall_elasticity,
        );
    }

    // Goal detection on post-collision positions. Scores are applied to
    // the live tally one by one, so two goals in the same tick both land.
    for i in 0..2 {
        let pos = state.players[i].pos;
        let dx = pos.x - prev_x[i];
        for z in 0..2 {
            let zone = state.zones[z];
            if let Some(scored_by) = state.entry.advance(i, z, &zone, pos, dx) {
                state.score.award(scored_by);
                state.entry_reset_timer = Some(state.config.entry_reset_delay);
                events.push(GameEvent::Goal {
                    scored_by,
                    own_goal: zone.side == Side::from_index(i),
                });
            }
        }
    }
    if let Some(ball) = state.ball.as_mut() {
        if let Some(scored_by) = check_ball_goal(&state.zones, ball.pos) {
            state.score.award(scored_by);
            state.entry_reset_timer = Some(state.config.entry_reset_delay);
            *ball = Body::at_rest(state.config.field_center(), state.config.ball_radius);
            events.push(GameEvent::Goal {
                scored_by,
                own_goal: false,
            });
        }
    }

    state.time_ticks += 1;
    events
}
