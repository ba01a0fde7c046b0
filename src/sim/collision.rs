//! Collision detection and response
//!
//! Circle-circle impacts between equal-mass bodies (drones, ball), impacts
//! against the fixed goal posts, and axis-aligned wall reflection. All
//! resolution happens in-place on the bodies; degenerate zero-distance
//! contacts are skipped for the tick rather than resolved.

use super::goal::GoalPost;
use super::physics::{contact_normal, impulse_magnitude};
use super::state::Body;

/// Push-out factor applied when separating a body from a post, slightly
/// past the exact overlap so the pair does not re-trigger next tick.
const POST_SEPARATION_MARGIN: f32 = 1.01;

/// Resolve an impact between two movable bodies of equal mass.
///
/// The impulse fires only while the bodies approach each other along the
/// contact normal; the positional correction (half the overlap each) applies
/// whenever they overlap, so a separating pair still cannot sink together.
/// Returns whether the bodies overlapped.
pub fn resolve_body_collision(a: &mut Body, b: &mut Body, restitution: f32) -> bool {
    let dist = a.pos.distance(b.pos);
    let overlap = a.radius + b.radius - dist;
    if overlap <= 0.0 {
        return false;
    }
    let Some(normal) = contact_normal(a.pos, b.pos) else {
        return false;
    };

    let rel_vel = b.vel - a.vel;
    let j = impulse_magnitude(rel_vel, normal, restitution);
    if j > 0.0 {
        // Equal masses: each body takes half the impulse
        let delta = normal * (j / 2.0);
        a.vel -= delta;
        b.vel += delta;
    }

    let push = normal * (overlap / 2.0);
    a.pos -= push;
    b.pos += push;
    true
}

/// Resolve an impact between a movable body and a fixed post.
///
/// The body takes the full impulse and is displaced fully out of the
/// overlap. Nothing happens unless the body is moving toward the post.
pub fn resolve_post_collision(body: &mut Body, post: &GoalPost, restitution: f32) -> bool {
    let dist = body.pos.distance(post.pos);
    let overlap = body.radius + post.radius - dist;
    if overlap <= 0.0 {
        return false;
    }
    let Some(normal) = contact_normal(post.pos, body.pos) else {
        return false;
    };

    if body.vel.dot(normal) >= 0.0 {
        return false;
    }

    body.vel += normal * impulse_magnitude(body.vel, normal, restitution);
    body.pos += normal * (overlap * POST_SEPARATION_MARGIN);
    true
}

/// Resolve the first overlapping post in priority order.
///
/// Only one post impulse is applied per body per tick; a second
/// simultaneous contact is left for the next tick. Returns the index of
/// the post that was resolved, if any.
pub fn resolve_first_post_collision(
    body: &mut Body,
    posts: &[GoalPost],
    restitution: f32,
) -> Option<usize> {
    for (i, post) in posts.iter().enumerate() {
        if resolve_post_collision(body, post, restitution) {
            return Some(i);
        }
    }
    None
}

/// Clamp a body inside the field and reflect its velocity off the walls.
///
/// The reflected component always points back into the field at
/// `elasticity` times its magnitude, so a body driven into a wall can
/// never tunnel out or stick.
pub fn resolve_wall_collision(body: &mut Body, width: f32, height: f32, elasticity: f32) {
    let r = body.radius;
    if body.pos.x <= r {
        body.pos.x = r;
        body.vel.x = body.vel.x.abs() * elasticity;
    } else if body.pos.x >= width - r {
        body.pos.x = width - r;
        body.vel.x = -body.vel.x.abs() * elasticity;
    }
    if body.pos.y <= r {
        body.pos.y = r;
        body.vel.y = body.vel.y.abs() * elasticity;
    } else if body.pos.y >= height - r {
        body.pos.y = height - r;
        body.vel.y = -body.vel.y.abs() * elasticity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn body(x: f32, y: f32, vx: f32, vy: f32) -> Body {
        Body {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius: 15.0,
        }
    }

    #[test]
    fn test_head_on_impact_bounces_with_restitution() {
        let mut a = body(0.0, 0.0, 5.0, 0.0);
        let mut b = body(28.0, 0.0, -5.0, 0.0);

        assert!(resolve_body_collision(&mut a, &mut b, 0.9));

        // Symmetric exchange: separation speed is 0.9x the approach speed
        assert!((a.vel.x - (-4.5)).abs() < 1e-4);
        assert!((b.vel.x - 4.5).abs() < 1e-4);
        assert_eq!(a.vel.y, 0.0);
        assert_eq!(b.vel.y, 0.0);

        // Overlap of 2 split evenly
        assert!((a.pos.x - (-1.0)).abs() < 1e-4);
        assert!((b.pos.x - 29.0).abs() < 1e-4);
    }

    #[test]
    fn test_separating_overlap_pushes_apart_without_impulse() {
        let mut a = body(0.0, 0.0, -3.0, 0.0);
        let mut b = body(28.0, 0.0, 3.0, 0.0);

        assert!(resolve_body_collision(&mut a, &mut b, 0.9));

        // Already separating: velocities untouched, positions corrected
        assert_eq!(a.vel, Vec2::new(-3.0, 0.0));
        assert_eq!(b.vel, Vec2::new(3.0, 0.0));
        assert!((b.pos.x - a.pos.x - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_coincident_centers_skip_resolution() {
        let mut a = body(100.0, 100.0, 2.0, 0.0);
        let mut b = body(100.0, 100.0, -2.0, 0.0);

        assert!(!resolve_body_collision(&mut a, &mut b, 0.9));
        assert_eq!(a.pos, Vec2::new(100.0, 100.0));
        assert!(a.vel.is_finite() && b.vel.is_finite());
    }

    #[test]
    fn test_post_reflects_and_separates() {
        let post = GoalPost {
            pos: Vec2::new(100.0, 0.0),
            radius: 5.0,
        };
        let mut b = body(82.0, 0.0, 6.0, 0.0);

        assert!(resolve_post_collision(&mut b, &post, 0.9));

        // Normal-axis speed flips to -0.9x
        assert!((b.vel.x - (-5.4)).abs() < 1e-4);
        // Pushed out past the contact distance
        assert!(b.pos.distance(post.pos) > b.radius + post.radius);
    }

    #[test]
    fn test_post_ignores_separating_body() {
        let post = GoalPost {
            pos: Vec2::new(100.0, 0.0),
            radius: 5.0,
        };
        let mut b = body(82.0, 0.0, -6.0, 0.0);

        assert!(!resolve_post_collision(&mut b, &post, 0.9));
        assert_eq!(b.pos, Vec2::new(82.0, 0.0));
        assert_eq!(b.vel, Vec2::new(-6.0, 0.0));
    }

    #[test]
    fn test_first_post_wins_on_simultaneous_contact() {
        // Two posts close enough for one body to overlap both
        let posts = [
            GoalPost {
                pos: Vec2::new(100.0, -10.0),
                radius: 5.0,
            },
            GoalPost {
                pos: Vec2::new(100.0, 10.0),
                radius: 5.0,
            },
        ];
        let mut b = body(95.0, 0.0, 6.0, 0.0);
        let mut expected = b;

        let resolved = resolve_first_post_collision(&mut b, &posts, 0.9);
        assert_eq!(resolved, Some(0));

        // Identical to resolving against the first post alone
        resolve_post_collision(&mut expected, &posts[0], 0.9);
        assert!((b.pos - expected.pos).length() < 1e-5);
        assert!((b.vel - expected.vel).length() < 1e-5);
    }

    #[test]
    fn test_wall_clamps_and_flips_velocity() {
        let mut b = body(5.0, 250.0, -4.0, 0.0);
        resolve_wall_collision(&mut b, 1000.0, 500.0, 0.8);
        assert_eq!(b.pos.x, 15.0);
        assert!((b.vel.x - 3.2).abs() < 1e-4);

        let mut b = body(500.0, 498.0, 0.0, 7.0);
        resolve_wall_collision(&mut b, 1000.0, 500.0, 0.8);
        assert_eq!(b.pos.y, 485.0);
        assert!((b.vel.y - (-5.6)).abs() < 1e-4);
    }

    #[test]
    fn test_wall_leaves_interior_body_alone() {
        let mut b = body(500.0, 250.0, 3.0, -2.0);
        resolve_wall_collision(&mut b, 1000.0, 500.0, 0.8);
        assert_eq!(b.pos, Vec2::new(500.0, 250.0));
        assert_eq!(b.vel, Vec2::new(3.0, -2.0));
    }

    proptest! {
        /// No energy injection: the separation speed along the normal after
        /// a pair impact never exceeds the approach speed.
        #[test]
        fn prop_pair_impact_never_gains_normal_speed(
            bx in 1.0f32..29.0,
            by in -10.0f32..10.0,
            avx in -20.0f32..20.0,
            avy in -20.0f32..20.0,
            bvx in -20.0f32..20.0,
            bvy in -20.0f32..20.0,
        ) {
            let mut a = body(0.0, 0.0, avx, avy);
            let mut b = body(bx, by, bvx, bvy);
            prop_assume!(a.pos.distance(b.pos) < a.radius + b.radius);

            let normal = (b.pos - a.pos).normalize();
            let approach = -(b.vel - a.vel).dot(normal);
            prop_assume!(approach > 0.0);

            resolve_body_collision(&mut a, &mut b, 0.9);

            let separation = (b.vel - a.vel).dot(normal);
            prop_assert!(separation <= approach + 1e-3);
        }

        /// Wall resolution keeps every body inside the playable bounds.
        #[test]
        fn prop_walls_contain_body(
            px in -100.0f32..1100.0,
            py in -100.0f32..600.0,
            vx in -50.0f32..50.0,
            vy in -50.0f32..50.0,
        ) {
            let mut b = body(px, py, vx, vy);
            for _ in 0..8 {
                b.pos += b.vel;
                resolve_wall_collision(&mut b, 1000.0, 500.0, 0.8);
                prop_assert!(b.pos.x >= b.radius && b.pos.x <= 1000.0 - b.radius);
                prop_assert!(b.pos.y >= b.radius && b.pos.y <= 500.0 - b.radius);
            }
        }
    }
}
