//! Pad-state aggregation for the host input layer
//!
//! The shell owns raw key/touch/mouse events. This module turns held
//! directional buttons into the unit-or-zero direction vectors the sim
//! consumes, and sanitizes whatever the host hands over so a malformed
//! vector can never reach the physics.

use glam::Vec2;

/// One directional button on a player's pad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadButton {
    Up,
    Down,
    Left,
    Right,
}

/// Held-button state for one player's pad
///
/// Mirrors a pressed-key set: press and release events flip individual
/// buttons, and [`direction`](Self::direction) reads out the aggregate.
/// Releasing the last button yields the zero direction, which the tick
/// treats as an active stop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PadState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl PadState {
    pub fn press(&mut self, button: PadButton) {
        self.set(button, true);
    }

    pub fn release(&mut self, button: PadButton) {
        self.set(button, false);
    }

    fn set(&mut self, button: PadButton, held: bool) {
        match button {
            PadButton::Up => self.up = held,
            PadButton::Down => self.down = held,
            PadButton::Left => self.left = held,
            PadButton::Right => self.right = held,
        }
    }

    pub fn any_held(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Current direction, -1/0/1 per axis
    ///
    /// When opposing buttons are held together the later one in scan order
    /// wins: down over up, right over left.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y = -1.0;
        }
        if self.down {
            dir.y = 1.0;
        }
        if self.left {
            dir.x = -1.0;
        }
        if self.right {
            dir.x = 1.0;
        }
        dir
    }
}

/// Clamp a host-supplied direction vector to -1/0/1 per axis
///
/// Non-finite components are dropped to zero rather than propagated.
pub fn sanitize_direction(raw: Vec2) -> Vec2 {
    Vec2::new(snap_axis(raw.x), snap_axis(raw.y))
}

fn snap_axis(v: f32) -> f32 {
    if !v.is_finite() || v == 0.0 {
        0.0
    } else if v > 0.0 {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_aggregates_held_buttons() {
        let mut pad = PadState::default();
        pad.press(PadButton::Up);
        pad.press(PadButton::Right);
        assert_eq!(pad.direction(), Vec2::new(1.0, -1.0));

        pad.release(PadButton::Up);
        assert_eq!(pad.direction(), Vec2::new(1.0, 0.0));

        pad.release(PadButton::Right);
        assert!(!pad.any_held());
        assert_eq!(pad.direction(), Vec2::ZERO);
    }

    #[test]
    fn test_opposing_buttons_later_wins() {
        let mut pad = PadState::default();
        pad.press(PadButton::Up);
        pad.press(PadButton::Down);
        assert_eq!(pad.direction().y, 1.0);

        pad.press(PadButton::Left);
        pad.press(PadButton::Right);
        assert_eq!(pad.direction().x, 1.0);
    }

    #[test]
    fn test_sanitize_clamps_malformed_vectors() {
        assert_eq!(sanitize_direction(Vec2::new(3.7, -0.2)), Vec2::new(1.0, -1.0));
        assert_eq!(sanitize_direction(Vec2::new(f32::NAN, f32::INFINITY)), Vec2::ZERO);
        assert_eq!(sanitize_direction(Vec2::ZERO), Vec2::ZERO);
        assert_eq!(sanitize_direction(Vec2::new(-0.0, 0.0)), Vec2::ZERO);
    }
}
