//! WASM bridge for the JS demo host
//!
//! The host runs MediaPipe and the canvas; this module is the whole
//! surface between the two sides. Landmarks cross the boundary as one
//! flat `[x, y, z] * 21 * hands` array per frame, the same layout the
//! sketches pull out of `multiHandLandmarks`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;

use crate::gesture;
use crate::hand;
use crate::sim::{self, Arena, Balloon};
use crate::tuning::BalloonTuning;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Balloon simulation instance owned by the JS host
#[wasm_bindgen]
pub struct BalloonSim {
    arena: Arena,
    balloon: Balloon,
    /// Scratch buffer for this frame's landmark snapshot
    obstacles: Vec<Vec2>,
    /// Flip landmark x before use (set when the host is NOT feeding
    /// selfie-mode coordinates but draws a mirrored canvas)
    mirror: bool,
}

#[wasm_bindgen]
impl BalloonSim {
    /// Create a simulation for a canvas of the given size
    ///
    /// Rejects unusable configurations (non-positive canvas, persisted
    /// tuning the arena cannot satisfy) instead of producing a balloon
    /// that can never be clamped into bounds.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, seed: u32) -> Result<BalloonSim, JsError> {
        let arena = Arena::new(width, height)?;
        let tuning = BalloonTuning::load();
        let mut rng = Pcg32::seed_from_u64(seed as u64);
        let balloon = Balloon::spawn(tuning, &arena, &mut rng)?;
        log::info!("BalloonSim ready: {width}x{height} arena");
        Ok(Self {
            arena,
            balloon,
            obstacles: Vec::new(),
            mirror: false,
        })
    }

    pub fn set_mirror(&mut self, mirror: bool) {
        self.mirror = mirror;
    }

    /// Advance one frame against this frame's landmarks
    pub fn step(&mut self, flat_landmarks: &[f32], num_hands: usize) {
        self.obstacles.clear();
        for landmarks in hand::parse_flat(flat_landmarks, num_hands) {
            for lm in landmarks {
                self.obstacles
                    .push(hand::to_arena_point(lm, &self.arena, self.mirror));
            }
        }
        sim::step(&mut self.balloon, &self.arena, &self.obstacles);
    }

    /// Respawn the balloon at the top, keeping arena and tuning
    pub fn reset(&mut self, seed: u32) {
        let mut rng = Pcg32::seed_from_u64(seed as u64);
        if let Ok(balloon) = Balloon::spawn(self.balloon.tuning, &self.arena, &mut rng) {
            self.balloon = balloon;
        }
    }

    pub fn x(&self) -> f32 {
        self.balloon.pos.x
    }

    pub fn y(&self) -> f32 {
        self.balloon.pos.y
    }

    pub fn radius(&self) -> f32 {
        self.balloon.radius()
    }
}

/// Classify the first hand in the flat landmark array
///
/// Returns the overlay label; "None" when no hand was shipped.
#[wasm_bindgen]
pub fn classify_hand(flat_landmarks: &[f32]) -> String {
    match hand::parse_flat(flat_landmarks, 1).first() {
        Some(landmarks) => gesture::classify(landmarks).label(),
        None => "None".to_string(),
    }
}
