//! Balloon-vs-landmark contact test
//!
//! Each hand landmark is treated as a small static circle for one step.
//! Detection is pure; the response (lift, nudge, damping) is applied by
//! the stepper.

use glam::Vec2;

/// Result of testing the balloon against one landmark point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointContact {
    /// Separated, or the distance was non-finite (bad input skipped)
    Clear,
    /// Overlapping with a defined push-out direction
    Overlap {
        /// Unit vector from the landmark toward the balloon center
        normal: Vec2,
        /// Penetration depth
        depth: f32,
    },
    /// Centers coincide exactly; no normal direction exists
    Coincident,
}

/// Test the balloon circle against one landmark point
///
/// `min_dist = radius + landmark_radius` is the contact distance. A
/// non-finite distance (NaN/∞ coordinates in either input) reports
/// `Clear` so one bad landmark can never poison the balloon state.
pub fn balloon_point_contact(
    pos: Vec2,
    radius: f32,
    point: Vec2,
    landmark_radius: f32,
) -> PointContact {
    let delta = pos - point;
    let dist = delta.length();
    let min_dist = radius + landmark_radius;

    if !dist.is_finite() {
        return PointContact::Clear;
    }
    if dist == 0.0 {
        return PointContact::Coincident;
    }
    if dist < min_dist {
        return PointContact::Overlap {
            normal: delta / dist,
            depth: min_dist - dist,
        };
    }
    PointContact::Clear
}
