//! Pure physics helpers shared by the collision engine

use glam::Vec2;

/// Separation below which a contact normal is considered degenerate
pub const MIN_SEPARATION: f32 = 1e-6;

/// Unit vector pointing from `from` toward `to`
///
/// Returns `None` when the points (near-)coincide. Callers skip resolution
/// for that tick instead of dividing by zero.
#[inline]
pub fn contact_normal(from: Vec2, to: Vec2) -> Option<Vec2> {
    let delta = to - from;
    let dist = delta.length();
    if dist < MIN_SEPARATION {
        return None;
    }
    Some(delta / dist)
}

/// Impulse magnitude for a restitution impact
///
/// `j = -(1 + e) * dot(v_rel, n)`. Zero when the bodies are already
/// separating along the normal, so applying it is always safe.
#[inline]
pub fn impulse_magnitude(rel_vel: Vec2, normal: Vec2, restitution: f32) -> f32 {
    let vel_along_normal = rel_vel.dot(normal);
    if vel_along_normal >= 0.0 {
        return 0.0;
    }
    -(1.0 + restitution) * vel_along_normal
}
