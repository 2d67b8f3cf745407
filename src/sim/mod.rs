//! Deterministic balloon simulation
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - One unit step per external frame tick, no internal clock
//! - Seeded RNG only (spawn jitter)
//! - No rendering or platform dependencies
//!
//! The stepper has exclusive write access to the balloon; the renderer
//! only reads position and radius between steps.

pub mod collision;
pub mod state;
pub mod step;

pub use collision::{PointContact, balloon_point_contact};
pub use state::{Arena, Balloon};
pub use step::step;
