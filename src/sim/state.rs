//! Arena and balloon state
//!
//! The arena is fixed for the simulation's lifetime; the balloon is the
//! single mutable entity, written to only by [`step`](super::step::step).

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::SPAWN_HEIGHT;
use crate::tuning::{BalloonTuning, ConfigError};

/// Fixed rectangular bounds the balloon is confined to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    /// Create an arena, rejecting non-positive dimensions
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        if !(width > 0.0) || !(height > 0.0) {
            return Err(ConfigError::InvalidArena { width, height });
        }
        Ok(Self { width, height })
    }

    /// True when a circle of `radius` fits between the walls
    pub fn fits(&self, radius: f32) -> bool {
        2.0 * radius <= self.width && 2.0 * radius <= self.height
    }
}

/// The simulated balloon
///
/// Position and velocity are per-step mutable state; everything that
/// shapes the response (radius, gravity, restitution, contact constants)
/// is fixed in the embedded tuning at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balloon {
    pub pos: Vec2,
    pub vel: Vec2,
    pub tuning: BalloonTuning,
}

impl Balloon {
    /// Create a balloon at an explicit position with zero velocity
    ///
    /// Fails fast when the tuning is invalid or the arena cannot contain
    /// the balloon (an unsatisfiable clamp otherwise).
    pub fn new(
        pos: Vec2,
        tuning: BalloonTuning,
        arena: &Arena,
    ) -> Result<Self, ConfigError> {
        tuning.validate()?;
        if !arena.fits(tuning.radius) {
            return Err(ConfigError::BalloonTooLarge {
                radius: tuning.radius,
                width: arena.width,
                height: arena.height,
            });
        }
        Ok(Self {
            pos,
            vel: Vec2::ZERO,
            tuning,
        })
    }

    /// Spawn at the top center with a small random horizontal drift
    pub fn spawn<R: Rng>(
        tuning: BalloonTuning,
        arena: &Arena,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let mut balloon = Self::new(
            Vec2::new(arena.width * 0.5, SPAWN_HEIGHT),
            tuning,
            arena,
        )?;
        balloon.vel.x = rng.random_range(-1.0..=1.0);
        Ok(balloon)
    }

    /// Collision radius (read by the renderer for the filled circle)
    #[inline]
    pub fn radius(&self) -> f32 {
        self.tuning.radius
    }

    /// True when the balloon lies fully inside the arena walls
    pub fn contained_in(&self, arena: &Arena) -> bool {
        let r = self.tuning.radius;
        self.pos.x >= r
            && self.pos.x <= arena.width - r
            && self.pos.y >= r
            && self.pos.y <= arena.height - r
    }
}
