//! Active-area calibration rectangle
//!
//! The calibration demo lets the user frame an on-canvas "active area"
//! that downstream interaction is limited to. The rectangle is moved and
//! resized in keyboard steps by the host; this module owns the geometry
//! and the clamping rules, the host owns key handling and drawing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Arena;

/// Pixels moved per adjustment step
pub const MOVE_STEP: f32 = 5.0;
/// Pixels resized per adjustment step
pub const SIZE_STEP: f32 = 5.0;
/// Smallest usable area edge
pub const MIN_SIZE: f32 = 50.0;

/// Axis-aligned interaction bounds, in arena pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveArea {
    /// Top-left corner
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for ActiveArea {
    fn default() -> Self {
        Self {
            x: 160.0,
            y: 120.0,
            width: 320.0,
            height: 240.0,
        }
    }
}

impl ActiveArea {
    /// Half-size rectangle centered in the arena
    pub fn centered(arena: &Arena) -> Self {
        Self {
            x: arena.width * 0.25,
            y: arena.height * 0.25,
            width: arena.width * 0.5,
            height: arena.height * 0.5,
        }
    }

    /// Translate by (dx, dy), keeping the whole area inside the arena
    pub fn move_by(&mut self, dx: f32, dy: f32, arena: &Arena) {
        self.x = (self.x + dx).clamp(0.0, (arena.width - self.width).max(0.0));
        self.y = (self.y + dy).clamp(0.0, (arena.height - self.height).max(0.0));
    }

    /// Grow or shrink by (dw, dh), clamped to the minimum size and the
    /// arena edge the area currently touches
    pub fn resize_by(&mut self, dw: f32, dh: f32, arena: &Arena) {
        let max_w = (arena.width - self.x).max(MIN_SIZE);
        let max_h = (arena.height - self.y).max(MIN_SIZE);
        self.width = (self.width + dw).clamp(MIN_SIZE, max_w);
        self.height = (self.height + dh).clamp(MIN_SIZE, max_h);
    }

    /// Hit test, edges inclusive
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x
            && p.x <= self.x + self.width
            && p.y >= self.y
            && p.y <= self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::new(640.0, 480.0).unwrap()
    }

    #[test]
    fn test_default_matches_centered_for_demo_canvas() {
        assert_eq!(ActiveArea::default(), ActiveArea::centered(&arena()));
    }

    #[test]
    fn test_move_clamps_to_arena() {
        let mut area = ActiveArea::default();
        area.move_by(-10_000.0, 0.0, &arena());
        assert_eq!(area.x, 0.0);

        area.move_by(10_000.0, 10_000.0, &arena());
        assert_eq!(area.x, 640.0 - area.width);
        assert_eq!(area.y, 480.0 - area.height);
    }

    #[test]
    fn test_resize_clamps_to_min_and_arena() {
        let mut area = ActiveArea::default();
        area.resize_by(-10_000.0, -10_000.0, &arena());
        assert_eq!(area.width, MIN_SIZE);
        assert_eq!(area.height, MIN_SIZE);

        area.resize_by(10_000.0, 10_000.0, &arena());
        assert_eq!(area.width, 640.0 - area.x);
        assert_eq!(area.height, 480.0 - area.y);
    }

    #[test]
    fn test_contains() {
        let area = ActiveArea::default();
        assert!(area.contains(Vec2::new(320.0, 240.0)));
        assert!(area.contains(Vec2::new(160.0, 120.0))); // corner inclusive
        assert!(!area.contains(Vec2::new(100.0, 240.0)));
        assert!(!area.contains(Vec2::new(320.0, 400.0)));
    }
}
