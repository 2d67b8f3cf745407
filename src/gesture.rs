//! Heuristic hand-gesture classifier
//!
//! A stateless decision procedure over one hand's 21 landmarks. Each
//! finger gets a straightness ratio: straight-line wrist-to-tip distance
//! over the articulated chain length. An extended finger is nearly
//! straight (ratio above 0.9); a curled one doubles back on itself
//! (ratio below 0.6). Counting and a thumb-above-wrist test pick the
//! label. Works in any consistent coordinate space, y-down.

#[cfg(test)]
use glam::Vec2;

use crate::hand::{FINGER_CHAINS, Hand, THUMB_TIP, WRIST};

/// Ratio above which a finger counts as extended
const EXTENDED_RATIO: f32 = 0.9;
/// Ratio below which a finger counts as folded
const FOLDED_RATIO: f32 = 0.6;

/// Recognized hand poses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Fist,
    OpenPalm,
    Pointing,
    ThumbsUp,
    ThumbsOut,
    /// Fallback: n fingers confidently extended (thumb included)
    Fingers(u8),
}

impl Gesture {
    pub fn label(&self) -> String {
        match self {
            Gesture::Fist => "Fist".to_string(),
            Gesture::OpenPalm => "Open Palm".to_string(),
            Gesture::Pointing => "Pointing".to_string(),
            Gesture::ThumbsUp => "Thumbs Up".to_string(),
            Gesture::ThumbsOut => "Thumbs Out".to_string(),
            Gesture::Fingers(n) => format!("{n} Fingers"),
        }
    }
}

/// Straightness of one finger chain: 1.0 when fully extended, small when
/// curled. A degenerate chain (zero length) reads as fully curled.
fn straightness(hand: &Hand, chain: &[usize; 5]) -> f32 {
    let chain_len: f32 = chain
        .windows(2)
        .map(|pair| (hand[pair[1]] - hand[pair[0]]).length())
        .sum();
    if chain_len <= f32::EPSILON {
        return 0.0;
    }
    (hand[chain[4]] - hand[chain[0]]).length() / chain_len
}

/// Classify one hand
///
/// Pure and total: any finite landmark set maps to exactly one label.
pub fn classify(hand: &Hand) -> Gesture {
    let ratios: Vec<f32> = FINGER_CHAINS
        .iter()
        .map(|chain| straightness(hand, chain))
        .collect();

    let thumb_extended = ratios[0] > EXTENDED_RATIO;
    let extended: Vec<bool> = ratios[1..].iter().map(|&r| r > EXTENDED_RATIO).collect();
    let folded: Vec<bool> = ratios[1..].iter().map(|&r| r < FOLDED_RATIO).collect();

    let all_folded = folded.iter().all(|&f| f);
    let all_extended = extended.iter().all(|&e| e);

    if all_folded {
        if thumb_extended {
            // y grows downward: above means a smaller y than the wrist
            return if hand[THUMB_TIP].y < hand[WRIST].y {
                Gesture::ThumbsUp
            } else {
                Gesture::ThumbsOut
            };
        }
        return Gesture::Fist;
    }

    if all_extended {
        return Gesture::OpenPalm;
    }

    // index up, the rest curled, thumb tucked
    if extended[0] && folded[1] && folded[2] && folded[3] && !thumb_extended {
        return Gesture::Pointing;
    }

    let count = extended.iter().filter(|&&e| e).count() + usize::from(thumb_extended);
    Gesture::Fingers(count as u8)
}
