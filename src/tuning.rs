//! Balloon behavior tuning
//!
//! Every constant that shapes how the balloon falls, bounces, and reacts
//! to hand contact. Fixed at construction time; persisted separately from
//! simulation state in LocalStorage so tweaks survive a reload.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected tuning or arena configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("arena dimensions must be positive, got {width}x{height}")]
    InvalidArena { width: f32, height: f32 },
    #[error("balloon radius {radius} does not fit a {width}x{height} arena")]
    BalloonTooLarge {
        radius: f32,
        width: f32,
        height: f32,
    },
    #[error("balloon radius must be positive, got {0}")]
    InvalidRadius(f32),
    #[error("gravity must be non-negative, got {0}")]
    InvalidGravity(f32),
    #[error("restitution must be within [0, 1], got {0}")]
    InvalidRestitution(f32),
    #[error("landmark radius must be non-negative, got {0}")]
    InvalidLandmarkRadius(f32),
}

/// Balloon tuning constants
///
/// Defaults reproduce the feel of the original sketch: a gentle fall, a
/// springy wall bounce, and an upward "lift" on hand contact instead of a
/// billiard reflection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalloonTuning {
    /// Downward acceleration added to vertical speed each step
    pub gravity: f32,
    /// Fraction of speed retained on a wall bounce
    pub restitution: f32,
    /// Balloon collision radius
    pub radius: f32,
    /// Collision radius around each hand landmark
    pub landmark_radius: f32,
    /// Upward speed forced on landmark contact
    pub lift_speed: f32,
    /// Extra upward boost when already rising faster than `lift_speed`
    pub lift_boost: f32,
    /// Sideways shove away from the touching landmark
    pub horizontal_nudge: f32,
    /// Whole-velocity damping applied once per colliding landmark
    pub contact_damping: f32,
    /// Vertical speeds below this settle to zero on ground contact
    pub settle_threshold: f32,
    /// Outward bias past the contact surface, against float residue
    pub push_epsilon: f32,
}

impl Default for BalloonTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            restitution: RESTITUTION,
            radius: BALLOON_RADIUS,
            landmark_radius: LANDMARK_RADIUS,
            lift_speed: LIFT_SPEED,
            lift_boost: LIFT_BOOST,
            horizontal_nudge: HORIZONTAL_NUDGE,
            contact_damping: CONTACT_DAMPING,
            settle_threshold: SETTLE_THRESHOLD,
            push_epsilon: PUSH_EPSILON,
        }
    }
}

impl BalloonTuning {
    /// Check the tuning against its invariants
    ///
    /// Misconfiguration is rejected here, eagerly; nothing in the
    /// steady-state step path can fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.radius > 0.0) {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if !(self.gravity >= 0.0) {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::InvalidRestitution(self.restitution));
        }
        if !(self.landmark_radius >= 0.0) {
            return Err(ConfigError::InvalidLandmarkRadius(self.landmark_radius));
        }
        Ok(())
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "handloft_tuning";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tuning) = serde_json::from_str::<Self>(&json) {
                    if tuning.validate().is_ok() {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
