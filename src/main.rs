//! Drone Soccer entry point
//!
//! Runs a scripted headless match against the deterministic core: the blue
//! drone is driven toward the red goal, bulldozing the red drone on the
//! way, and every scoring event is logged as it happens.

use glam::Vec2;

use drone_soccer::SimConfig;
use drone_soccer::consts::NOMINAL_DT;
use drone_soccer::sim::{GameEvent, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load_or_default(&path),
        None => SimConfig::default(),
    };
    log::info!(
        "Drone Soccer (headless) on a {}x{} pitch, {}s match",
        config.field_width,
        config.field_height,
        config.match_duration
    );

    let mut state = GameState::new(config);
    let hold_right = TickInput {
        pads: [Some(Vec2::X), None],
        reset: false,
    };

    let mut first_goal_tick = None;
    for _ in 0..20_000 {
        for event in tick(&mut state, &hold_right, NOMINAL_DT) {
            match event {
                GameEvent::Goal {
                    scored_by,
                    own_goal,
                } => {
                    log::info!(
                        "goal for {scored_by:?}{} at t={:.1}s",
                        if own_goal { " (own goal)" } else { "" },
                        config.match_duration - state.time_remaining
                    );
                    first_goal_tick.get_or_insert(state.time_ticks);
                }
                GameEvent::MatchOver => log::info!("full time"),
            }
        }

        // One goal is demo enough
        if first_goal_tick.is_some() || state.is_over() {
            break;
        }
    }

    println!(
        "final score  blue {} : {} red",
        state.score.blue, state.score.red
    );
}
