//! Per-frame balloon step
//!
//! One call per external frame tick, in three passes:
//! 1. Euler integration (gravity, then position)
//! 2. Wall pass: per-axis clamp + reflect, x before y
//! 3. Landmark pass: sequential fold over the supplied points
//!
//! The landmark pass runs after wall clamping, so a push can leave the
//! balloon outside the walls until the next step's wall pass. That
//! one-step tolerance is intentional and matches the original demo.

use glam::Vec2;

use super::collision::{PointContact, balloon_point_contact};
use super::state::{Arena, Balloon};

/// Advance the balloon by one unit step
///
/// `obstacles` is this frame's landmark snapshot, read-only and valid for
/// this call only; points carry no identity across frames. An empty slice
/// is a plain gravity/wall step.
pub fn step(balloon: &mut Balloon, arena: &Arena, obstacles: &[Vec2]) {
    integrate(balloon);
    collide_walls(balloon, arena);
    collide_landmarks(balloon, obstacles);
}

/// Gravity, then position. Unit time step, no terminal velocity.
fn integrate(balloon: &mut Balloon) {
    balloon.vel.y += balloon.tuning.gravity;
    balloon.pos += balloon.vel;
}

/// Clamp and reflect against the four walls, each axis independently.
///
/// Bottom wall only: vertical speeds below the settle threshold snap to
/// zero after reflecting, so the balloon comes to rest instead of
/// micro-bouncing forever.
fn collide_walls(balloon: &mut Balloon, arena: &Arena) {
    let r = balloon.tuning.radius;
    let e = balloon.tuning.restitution;

    // left/right
    if balloon.pos.x - r < 0.0 {
        balloon.pos.x = r;
        balloon.vel.x *= -e;
    } else if balloon.pos.x + r > arena.width {
        balloon.pos.x = arena.width - r;
        balloon.vel.x *= -e;
    }
    // top/bottom
    if balloon.pos.y - r < 0.0 {
        balloon.pos.y = r;
        balloon.vel.y *= -e;
    } else if balloon.pos.y + r > arena.height {
        balloon.pos.y = arena.height - r;
        balloon.vel.y *= -e;
        if balloon.vel.y.abs() < balloon.tuning.settle_threshold {
            balloon.vel.y = 0.0;
        }
    }
}

/// Resolve contacts against this frame's landmarks, in the order supplied.
///
/// Later points see the state already mutated by earlier ones; resolution
/// is sequential, not simultaneous, so ordering matters. The response is a
/// lift, not a reflection: touching a hand pushes the balloon up and
/// sideways rather than bouncing it off.
fn collide_landmarks(balloon: &mut Balloon, obstacles: &[Vec2]) {
    let t = balloon.tuning;
    for &point in obstacles {
        match balloon_point_contact(balloon.pos, t.radius, point, t.landmark_radius) {
            PointContact::Clear => {}
            PointContact::Overlap { normal, depth } => {
                // push out of the landmark, slightly past the surface
                balloon.pos += normal * (depth + t.push_epsilon);
                if balloon.vel.y > -t.lift_speed {
                    balloon.vel.y = -t.lift_speed;
                } else {
                    balloon.vel.y -= t.lift_boost;
                }
                // nudge sideways so the balloon doesn't stick to the hand
                balloon.vel.x += normal.x * t.horizontal_nudge;
                // bound runaway speed when many landmarks overlap at once
                balloon.vel *= t.contact_damping;
            }
            PointContact::Coincident => {
                // no normal exists; escape straight up
                balloon.pos.y -= t.radius + t.landmark_radius;
                balloon.vel.y = -balloon.vel.y.abs() - 1.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::BalloonTuning;
    use proptest::prelude::*;

    fn arena() -> Arena {
        Arena::new(640.0, 480.0).unwrap()
    }

    fn balloon_at(x: f32, y: f32) -> Balloon {
        Balloon::new(Vec2::new(x, y), BalloonTuning::default(), &arena()).unwrap()
    }

    #[test]
    fn test_gravity_monotonicity() {
        let mut balloon = balloon_at(320.0, 240.0);
        balloon.vel = Vec2::new(0.3, 1.0);

        step(&mut balloon, &arena(), &[]);

        assert!((balloon.vel.y - 1.05).abs() < 1e-6);
        assert_eq!(balloon.vel.x, 0.3);
        assert!((balloon.pos - Vec2::new(320.3, 241.05)).length() < 1e-4);
    }

    #[test]
    fn test_wall_bounce_sign_and_magnitude() {
        let mut balloon = balloon_at(30.0, 240.0);
        balloon.vel = Vec2::new(-3.0, 0.0);

        step(&mut balloon, &arena(), &[]);

        assert_eq!(balloon.pos.x, 36.0);
        assert!(balloon.vel.x > 0.0);
        assert!((balloon.vel.x - 3.0 * 0.85).abs() < 1e-5);
    }

    #[test]
    fn test_right_wall_bounce() {
        let mut balloon = balloon_at(610.0, 240.0);
        balloon.vel = Vec2::new(4.0, 0.0);

        step(&mut balloon, &arena(), &[]);

        assert_eq!(balloon.pos.x, 640.0 - 36.0);
        assert!((balloon.vel.x + 4.0 * 0.85).abs() < 1e-5);
    }

    #[test]
    fn test_bottom_settle_rule() {
        let mut balloon = balloon_at(320.0, 443.5);
        balloon.vel = Vec2::new(0.0, 0.6);

        step(&mut balloon, &arena(), &[]);

        assert_eq!(balloon.pos.y, 444.0);
        assert_eq!(balloon.vel.y, 0.0);
    }

    #[test]
    fn test_top_wall_has_no_settle_rule() {
        let mut balloon = balloon_at(320.0, 36.2);
        balloon.vel = Vec2::new(0.0, -0.8);

        step(&mut balloon, &arena(), &[]);

        assert_eq!(balloon.pos.y, 36.0);
        // reflected and damped, but not snapped to zero
        assert!(balloon.vel.y > 0.0);
    }

    #[test]
    fn test_rests_at_bottom_without_obstacles() {
        let mut balloon = balloon_at(320.0, 40.0);

        for _ in 0..5000 {
            step(&mut balloon, &arena(), &[]);
        }

        assert_eq!(balloon.pos.y, 444.0);
        assert_eq!(balloon.vel, Vec2::ZERO);
        assert_eq!(balloon.pos.x, 320.0);
    }

    #[test]
    fn test_obstacle_repulsion() {
        let mut balloon = balloon_at(320.0, 400.0);
        let point = Vec2::new(320.0, 420.0);

        step(&mut balloon, &arena(), &[point]);

        let t = balloon.tuning;
        let min_dist = t.radius + t.landmark_radius;
        assert!((balloon.pos - point).length() >= min_dist);
        // damping runs after the lift, so the bound is lift * damping
        assert!(balloon.vel.y <= -t.lift_speed * t.contact_damping + 1e-5);
    }

    #[test]
    fn test_lift_boost_when_already_rising() {
        let mut balloon = balloon_at(320.0, 400.0);
        balloon.vel = Vec2::new(0.0, -5.0);
        // integration carries the balloon up to y=395.05; keep the point in contact
        let point = Vec2::new(320.0, 410.0);

        step(&mut balloon, &arena(), &[point]);

        // already faster than the lift speed: boosted, not reset
        let expected = (-5.0 + 0.05 - 0.4) * 0.98;
        assert!((balloon.vel.y - expected).abs() < 1e-4);
    }

    #[test]
    fn test_coincident_escape() {
        let tuning = BalloonTuning {
            gravity: 0.0,
            ..Default::default()
        };
        let mut balloon = Balloon::new(Vec2::new(320.0, 400.0), tuning, &arena()).unwrap();
        let point = Vec2::new(320.0, 400.0);

        step(&mut balloon, &arena(), &[point]);

        // displaced straight up by min_dist, forced downward speed negated
        assert_eq!(balloon.pos, Vec2::new(320.0, 356.0));
        assert_eq!(balloon.vel.y, -1.0);
    }

    #[test]
    fn test_falling_balloon_is_lifted_by_obstacle() {
        // Arena 640x480, balloon dropped from the top, one landmark held at
        // (320, 400): the lift must fire before the balloon can settle.
        let mut balloon = balloon_at(320.0, 40.0);
        let point = Vec2::new(320.0, 400.0);

        let mut lifted = false;
        for _ in 0..2000 {
            step(&mut balloon, &arena(), &[point]);
            if balloon.vel.y < 0.0 {
                lifted = true;
                break;
            }
        }

        assert!(lifted);
        // well above the bottom rest height, so this was the hand, not the floor
        assert!(balloon.pos.y < 410.0);
    }

    #[test]
    fn test_empty_and_distant_obstacles_are_noops() {
        let mut a = balloon_at(320.0, 240.0);
        let mut b = a.clone();
        a.vel = Vec2::new(1.0, -2.0);
        b.vel = Vec2::new(1.0, -2.0);

        step(&mut a, &arena(), &[]);
        step(&mut b, &arena(), &[Vec2::new(10.0, 10.0)]);

        assert_eq!(a, b);
    }

    #[test]
    fn test_nan_landmark_is_skipped() {
        let mut a = balloon_at(320.0, 240.0);
        let mut b = a.clone();

        step(&mut a, &arena(), &[]);
        step(&mut b, &arena(), &[Vec2::NAN]);

        assert_eq!(a, b);
        assert!(b.pos.is_finite() && b.vel.is_finite());
    }

    #[test]
    fn test_landmark_order_matters() {
        // Sequential resolution: each point sees the state left by the
        // previous one, so swapping the order changes the outcome.
        let below = Vec2::new(100.0, 130.0);
        let above = Vec2::new(100.0, 60.0);

        let tuning = BalloonTuning {
            gravity: 0.0,
            ..Default::default()
        };
        let mut fwd = Balloon::new(Vec2::new(100.0, 100.0), tuning, &arena()).unwrap();
        let mut rev = fwd.clone();

        step(&mut fwd, &arena(), &[below, above]);
        step(&mut rev, &arena(), &[above, below]);

        assert_ne!(fwd.pos, rev.pos);
    }

    #[test]
    fn test_step_is_deterministic() {
        let points = [Vec2::new(300.0, 260.0), Vec2::new(340.0, 250.0)];
        let mut a = balloon_at(320.0, 240.0);
        let mut b = a.clone();

        for _ in 0..50 {
            step(&mut a, &arena(), &points);
            step(&mut b, &arena(), &points);
        }

        assert_eq!(a, b);
    }

    #[test]
    fn test_obstacle_push_may_leave_walls_until_next_step() {
        // A hand above the balloon near the floor shoves it through the
        // bottom bound; the next step's wall pass restores containment.
        let mut balloon = balloon_at(320.0, 440.0);
        let point = Vec2::new(320.0, 410.0);

        step(&mut balloon, &arena(), &[point]);
        assert!(balloon.pos.y > 444.0);

        step(&mut balloon, &arena(), &[]);
        assert!(balloon.contained_in(&arena()));
    }

    proptest! {
        #[test]
        fn prop_contained_after_step_without_obstacles(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            vx in -100.0f32..100.0,
            vy in -100.0f32..100.0,
        ) {
            let arena = arena();
            let mut balloon = balloon_at(320.0, 240.0);
            balloon.pos = Vec2::new(x, y);
            balloon.vel = Vec2::new(vx, vy);

            step(&mut balloon, &arena, &[]);

            prop_assert!(balloon.contained_in(&arena));
        }

        #[test]
        fn prop_bounded_excursion_with_obstacles(
            x in 0.0f32..640.0,
            y in 0.0f32..480.0,
            vx in -20.0f32..20.0,
            vy in -20.0f32..20.0,
            points in proptest::collection::vec((0.0f32..640.0, 0.0f32..480.0), 0..8),
        ) {
            let arena = arena();
            let mut balloon = balloon_at(320.0, 240.0);
            balloon.pos = Vec2::new(x, y);
            balloon.vel = Vec2::new(vx, vy);
            let points: Vec<Vec2> = points.into_iter().map(|(px, py)| Vec2::new(px, py)).collect();

            step(&mut balloon, &arena, &points);

            // pushes can exceed the walls by at most one contact distance
            let t = balloon.tuning;
            let margin = t.radius + t.landmark_radius + t.push_epsilon;
            prop_assert!(balloon.pos.is_finite() && balloon.vel.is_finite());
            prop_assert!(balloon.pos.x >= -margin && balloon.pos.x <= arena.width + margin);
            prop_assert!(balloon.pos.y >= -margin && balloon.pos.y <= arena.height + margin);
        }
    }
}
