//! Hand landmark vocabulary and host-side helpers
//!
//! MediaPipe Hands reports 21 landmarks per hand, normalized to [0, 1]
//! with the origin at the top-left. The stepper only ever sees points
//! already in arena space; the conversion helpers here are for the host,
//! which owns coordinate policy (including selfie-mode mirroring).

use glam::Vec2;

use crate::consts::{LANDMARKS_PER_HAND, MAX_HANDS};
use crate::sim::Arena;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// One tracked hand's landmarks, in a single coordinate space
pub type Hand = [Vec2; LANDMARKS_PER_HAND];

/// Skeleton connection pairs, as drawn by the overlay
pub const HAND_CONNECTIONS: [(usize, usize); 20] = [
    // wrist to thumb
    (WRIST, THUMB_CMC),
    (THUMB_CMC, THUMB_MCP),
    (THUMB_MCP, THUMB_IP),
    (THUMB_IP, THUMB_TIP),
    // wrist to index
    (WRIST, INDEX_MCP),
    (INDEX_MCP, INDEX_PIP),
    (INDEX_PIP, INDEX_DIP),
    (INDEX_DIP, INDEX_TIP),
    // middle
    (WRIST, MIDDLE_MCP),
    (MIDDLE_MCP, MIDDLE_PIP),
    (MIDDLE_PIP, MIDDLE_DIP),
    (MIDDLE_DIP, MIDDLE_TIP),
    // ring
    (WRIST, RING_MCP),
    (RING_MCP, RING_PIP),
    (RING_PIP, RING_DIP),
    (RING_DIP, RING_TIP),
    // pinky
    (WRIST, PINKY_MCP),
    (PINKY_MCP, PINKY_PIP),
    (PINKY_PIP, PINKY_DIP),
    (PINKY_DIP, PINKY_TIP),
];

/// Joint chains per finger, wrist outward. Thumb first.
pub const FINGER_CHAINS: [[usize; 5]; 5] = [
    [WRIST, THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP],
    [WRIST, INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP],
    [WRIST, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP],
    [WRIST, RING_MCP, RING_PIP, RING_DIP, RING_TIP],
    [WRIST, PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP],
];

/// Decode the flat `[x, y, z] * 21 * hands` array the JS side ships
/// across the WASM boundary. Depth is dropped; hands beyond [`MAX_HANDS`]
/// or past the end of the buffer are ignored.
pub fn parse_flat(flat: &[f32], num_hands: usize) -> Vec<Hand> {
    let stride = LANDMARKS_PER_HAND * 3;
    let available = flat.len() / stride;
    let count = num_hands.min(MAX_HANDS).min(available);

    (0..count)
        .map(|h| {
            let mut hand = [Vec2::ZERO; LANDMARKS_PER_HAND];
            for (i, lm) in hand.iter_mut().enumerate() {
                let base = h * stride + i * 3;
                *lm = Vec2::new(flat[base], flat[base + 1]);
            }
            hand
        })
        .collect()
}

/// Map one normalized landmark into arena pixel space
///
/// `mirror` flips x for a selfie view; whether to mirror is the host's
/// call, made once for the whole frame.
#[inline]
pub fn to_arena_point(lm: Vec2, arena: &Arena, mirror: bool) -> Vec2 {
    let x = if mirror { 1.0 - lm.x } else { lm.x };
    Vec2::new(x * arena.width, lm.y * arena.height)
}

/// Map a whole normalized hand into arena pixel space
pub fn to_arena_hand(hand: &Hand, arena: &Arena, mirror: bool) -> Hand {
    hand.map(|lm| to_arena_point(lm, arena, mirror))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_layout() {
        let mut flat = vec![0.0f32; 2 * 21 * 3];
        // second hand, landmark 3
        let base = 21 * 3 + 3 * 3;
        flat[base] = 0.25;
        flat[base + 1] = 0.75;
        flat[base + 2] = -0.1; // depth, dropped

        let hands = parse_flat(&flat, 2);
        assert_eq!(hands.len(), 2);
        assert_eq!(hands[1][3], Vec2::new(0.25, 0.75));
    }

    #[test]
    fn test_parse_flat_clamps_hand_count() {
        let flat = vec![0.0f32; 21 * 3];
        // caller claims two hands but only shipped one
        assert_eq!(parse_flat(&flat, 2).len(), 1);
        // truncated buffer yields nothing
        assert_eq!(parse_flat(&flat[..10], 1).len(), 0);
        // more hands than we track
        let flat = vec![0.0f32; 4 * 21 * 3];
        assert_eq!(parse_flat(&flat, 4).len(), MAX_HANDS);
    }

    #[test]
    fn test_to_arena_point_mirroring() {
        let arena = Arena::new(640.0, 480.0).unwrap();
        let lm = Vec2::new(0.25, 0.5);

        assert_eq!(to_arena_point(lm, &arena, false), Vec2::new(160.0, 240.0));
        assert_eq!(to_arena_point(lm, &arena, true), Vec2::new(480.0, 240.0));
    }

    #[test]
    fn test_connections_cover_all_landmarks() {
        let mut seen = [false; LANDMARKS_PER_HAND];
        for (a, b) in HAND_CONNECTIONS {
            seen[a] = true;
            seen[b] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
