//! Confetti burst for the final call-to-action
//!
//! Pieces are generated from a seed so a burst is reproducible in tests; the
//! browser seeds it from the click timestamp.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

pub const BRAND_COLORS: [&str; 3] = ["#00CFF5", "#FFDE00", "#FF00A8"];
pub const PIECE_COUNT: usize = 65;
/// Burst is removed after this long
pub const CLEAR_AFTER: Duration = Duration::from_millis(3000);
/// CTA button glow cycle
pub const GLOW_INTERVAL: Duration = Duration::from_millis(4000);
pub const GLOW_DURATION: Duration = Duration::from_millis(2000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfettiShape {
    Circle,
    Square,
    Triangle,
    Node,
}

impl ConfettiShape {
    const ALL: [ConfettiShape; 4] = [
        ConfettiShape::Circle,
        ConfettiShape::Square,
        ConfettiShape::Triangle,
        ConfettiShape::Node,
    ];

    pub fn class(self) -> &'static str {
        match self {
            ConfettiShape::Circle => "confetti-circle",
            ConfettiShape::Square => "confetti-square",
            ConfettiShape::Triangle => "confetti-triangle",
            ConfettiShape::Node => "confetti-node",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConfettiPiece {
    pub id: usize,
    /// Horizontal position in percent of the section
    pub x: f64,
    /// Vertical position in percent of the section
    pub y: f64,
    /// Degrees
    pub rotation: f64,
    pub color: &'static str,
    pub shape: ConfettiShape,
    /// Animation delay in seconds
    pub delay: f64,
}

impl ConfettiPiece {
    /// Inline style for the absolutely positioned piece
    pub fn style(&self) -> String {
        format!(
            "left: {x:.2}%; top: {y:.2}%; transform: rotate({r:.1}deg); --confetti-rotation: {r:.1}deg; background-color: {c}; --confetti-color: {c}; animation-delay: {d:.2}s;",
            x = self.x,
            y = self.y,
            r = self.rotation,
            c = self.color,
            d = self.delay,
        )
    }
}

/// Generate one burst of confetti
pub fn burst(seed: u64) -> Vec<ConfettiPiece> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..PIECE_COUNT)
        .map(|id| ConfettiPiece {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            rotation: rng.gen_range(0.0..360.0),
            color: BRAND_COLORS[rng.gen_range(0..BRAND_COLORS.len())],
            shape: ConfettiShape::ALL[rng.gen_range(0..ConfettiShape::ALL.len())],
            delay: rng.gen_range(0.0..0.5),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_size_and_ranges() {
        let pieces = burst(42);
        assert_eq!(pieces.len(), PIECE_COUNT);

        for (i, p) in pieces.iter().enumerate() {
            assert_eq!(p.id, i);
            assert!((0.0..100.0).contains(&p.x));
            assert!((0.0..100.0).contains(&p.y));
            assert!((0.0..360.0).contains(&p.rotation));
            assert!((0.0..0.5).contains(&p.delay));
            assert!(BRAND_COLORS.contains(&p.color));
        }
    }

    #[test]
    fn test_burst_is_deterministic_per_seed() {
        assert_eq!(burst(7), burst(7));
        assert_ne!(burst(7), burst(8));
    }

    #[test]
    fn test_piece_style() {
        let piece = ConfettiPiece {
            id: 0,
            x: 12.5,
            y: 50.0,
            rotation: 90.0,
            color: "#FFDE00",
            shape: ConfettiShape::Node,
            delay: 0.25,
        };

        let style = piece.style();
        assert!(style.contains("left: 12.50%"));
        assert!(style.contains("rotate(90.0deg)"));
        assert!(style.contains("background-color: #FFDE00"));
        assert!(style.contains("animation-delay: 0.25s"));
        assert!(style.contains("--confetti-color: #FFDE00"));
    }
}
