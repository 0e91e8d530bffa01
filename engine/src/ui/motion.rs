//! Animation state for the card's decorative motion.
//!
//! The engine owns clocks and timers only; turning progress into offsets
//! and rects is the renderer's job. None of this state ever gates a
//! proposal transition.

use std::f32::consts::TAU;
use std::time::Duration;

use super::animation::EffectTimer;

/// The kind of one-shot card animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEffectKind {
    /// Title and body slide up into place on launch.
    SlideUp,
    /// Celebration block scales up after acceptance.
    PopScale,
}

/// A one-shot card animation effect.
#[derive(Debug, Clone)]
pub struct CardEffect {
    kind: CardEffectKind,
    timer: EffectTimer,
}

impl CardEffect {
    #[must_use]
    pub fn slide_up(duration: Duration) -> Self {
        Self {
            kind: CardEffectKind::SlideUp,
            timer: EffectTimer::new(duration),
        }
    }

    #[must_use]
    pub fn pop_scale(duration: Duration) -> Self {
        Self {
            kind: CardEffectKind::PopScale,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    #[must_use]
    pub fn kind(&self) -> CardEffectKind {
        self.kind
    }
}

/// Looping heartbeat clock for the big heart.
///
/// Wraps every `period`; [`PulseEffect::scale`] maps the phase onto a
/// smooth 1.0 -> 1.1 -> 1.0 curve, matching one grow-and-settle beat.
#[derive(Debug, Clone)]
pub struct PulseEffect {
    clock: Duration,
    period: Duration,
}

impl PulseEffect {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            clock: Duration::ZERO,
            period,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        if self.period.is_zero() {
            return;
        }
        let next = self.clock.saturating_add(delta);
        let period_ms = self.period.as_millis();
        self.clock = Duration::from_millis((next.as_millis() % period_ms) as u64);
    }

    /// Phase within the current beat, in `[0, 1)`.
    #[must_use]
    pub fn phase(&self) -> f32 {
        if self.period.is_zero() {
            return 0.0;
        }
        (self.clock.as_secs_f32() / self.period.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Current heart scale in `[1.0, 1.1]`.
    #[must_use]
    pub fn scale(&self) -> f32 {
        let t = self.phase();
        1.0 + 0.05 * (1.0 - (t * TAU).cos())
    }
}
