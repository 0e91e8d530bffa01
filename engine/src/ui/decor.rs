//! The floating-hearts background field.
//!
//! Twelve hearts scattered at seeded positions drift on staggered sine
//! offsets. The field is pure decoration: it never reads or writes
//! proposal state, and the renderer is free to drop hearts that fall
//! outside the viewport.

use std::time::Duration;

/// Number of background hearts.
pub const FLOATING_HEART_COUNT: usize = 12;

/// Stagger between adjacent hearts' drift phases, in seconds.
const PHASE_STAGGER: f32 = 0.2;

/// One decorative heart, positioned as a fraction of the viewport.
#[derive(Debug, Clone, Copy)]
pub struct FloatingHeart {
    /// Horizontal anchor in permille of the viewport width.
    pub x_permille: u16,
    /// Vertical anchor in permille of the viewport height.
    pub y_permille: u16,
    /// Phase offset into the drift cycle, in seconds.
    pub phase: f32,
}

/// The background heart field plus its shared drift clock.
#[derive(Debug, Clone)]
pub struct DecorField {
    hearts: Vec<FloatingHeart>,
    clock: f32,
}

impl DecorField {
    /// Scatter hearts at random anchors. Positions are fixed for the
    /// lifetime of the session; only the drift clock moves.
    #[must_use]
    pub fn new() -> Self {
        let hearts = (0..FLOATING_HEART_COUNT)
            .map(|i| FloatingHeart {
                x_permille: rand::random_range(0..=1000),
                y_permille: rand::random_range(0..=1000),
                phase: i as f32 * PHASE_STAGGER,
            })
            .collect();
        Self {
            hearts,
            clock: 0.0,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.clock += delta.as_secs_f32();
    }

    #[must_use]
    pub fn clock(&self) -> f32 {
        self.clock
    }

    #[must_use]
    pub fn hearts(&self) -> &[FloatingHeart] {
        &self.hearts
    }
}

impl Default for DecorField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_seeds_twelve_hearts_in_bounds() {
        let field = DecorField::new();
        assert_eq!(field.hearts().len(), FLOATING_HEART_COUNT);
        for heart in field.hearts() {
            assert!(heart.x_permille <= 1000);
            assert!(heart.y_permille <= 1000);
        }
    }

    #[test]
    fn phases_are_staggered() {
        let field = DecorField::new();
        let hearts = field.hearts();
        assert!((hearts[1].phase - hearts[0].phase - PHASE_STAGGER).abs() < f32::EPSILON);
    }

    #[test]
    fn clock_advances_monotonically() {
        let mut field = DecorField::new();
        assert!((field.clock() - 0.0).abs() < f32::EPSILON);
        field.advance(Duration::from_millis(500));
        field.advance(Duration::from_millis(250));
        assert!((field.clock() - 0.75).abs() < 1e-4);
    }
}
