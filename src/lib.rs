//! Handloft - hand-tracking balloon toy
//!
//! Core modules:
//! - `sim`: Deterministic balloon simulation (gravity, wall bounces, landmark collisions)
//! - `gesture`: Heuristic hand-gesture classifier over MediaPipe landmarks
//! - `hand`: Landmark vocabulary and host-side coordinate helpers
//! - `calibration`: Active-area rectangle for on-canvas interaction bounds
//! - `tuning`: Data-driven balloon behavior constants
//!
//! Video capture, MediaPipe inference, and canvas drawing live in the JS
//! host; this crate owns simulation state and classification and exposes
//! them over `bridge` on wasm32.

pub mod calibration;
pub mod gesture;
pub mod hand;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod bridge;

pub use calibration::ActiveArea;
pub use gesture::{Gesture, classify};
pub use sim::{Arena, Balloon, step};
pub use tuning::{BalloonTuning, ConfigError};

/// Demo configuration constants
pub mod consts {
    /// Canvas dimensions shared by all the demo sketches
    pub const ARENA_WIDTH: f32 = 640.0;
    pub const ARENA_HEIGHT: f32 = 480.0;

    /// Balloon spawn height below the top edge
    pub const SPAWN_HEIGHT: f32 = 40.0;

    /// Balloon defaults
    pub const BALLOON_RADIUS: f32 = 36.0;
    /// Gentle fall
    pub const GRAVITY: f32 = 0.05;
    /// Bounce energy retention on wall hits
    pub const RESTITUTION: f32 = 0.85;

    /// Collision radius around each hand landmark
    pub const LANDMARK_RADIUS: f32 = 8.0;
    /// Upward speed applied when the balloon touches a landmark
    pub const LIFT_SPEED: f32 = 2.0;
    /// Extra upward boost when already rising faster than the lift speed
    pub const LIFT_BOOST: f32 = 0.4;
    /// Sideways shove away from a touching landmark
    pub const HORIZONTAL_NUDGE: f32 = 0.6;
    /// Whole-velocity damping per colliding landmark
    pub const CONTACT_DAMPING: f32 = 0.98;
    /// Vertical speeds below this settle to zero on ground contact
    pub const SETTLE_THRESHOLD: f32 = 1.0;
    /// Outward bias past the contact surface, against float residue
    pub const PUSH_EPSILON: f32 = 0.1;

    /// Landmarks per tracked hand (MediaPipe Hands)
    pub const LANDMARKS_PER_HAND: usize = 21;
    /// Hands tracked at once
    pub const MAX_HANDS: usize = 2;
}
