//! Animation transforms for card regions.
//!
//! Maps the engine's effect progress onto rects and cell offsets.

use std::f32::consts::TAU;

use ratatui::layout::Rect;

use smitten_engine::ui::{CardEffect, CardEffectKind, FloatingHeart};

/// Drift cycle length for a floating heart, in seconds.
const DRIFT_PERIOD: f32 = 3.0;
/// Horizontal drift amplitude in cells.
const DRIFT_X: f32 = 2.0;
/// Vertical drift amplitude in cells.
const DRIFT_Y: f32 = 1.0;

/// Apply a card effect to transform the base rectangle.
#[must_use]
pub fn apply_card_effect(effect: &CardEffect, base: Rect, viewport: Rect) -> Rect {
    match effect.kind() {
        CardEffectKind::PopScale => {
            let t = ease_out_cubic(effect.progress());
            let scale = 0.6 + 0.4 * t;
            scale_rect(base, scale)
        }
        CardEffectKind::SlideUp => {
            let t = ease_out_cubic(effect.progress());
            let viewport_bottom = viewport.y.saturating_add(viewport.height);
            let base_bottom = base.y.saturating_add(base.height);
            let max_offset = viewport_bottom.saturating_sub(base_bottom);
            let offset = max_offset.min(base.height.saturating_div(2)).min(4);
            let y_offset = ((1.0 - t) * f32::from(offset)).round() as u16;
            Rect {
                x: base.x,
                y: base.y.saturating_add(y_offset),
                width: base.width,
                height: base.height,
            }
        }
    }
}

/// Cell offset of a drifting background heart at the given clock.
#[must_use]
pub fn float_offset(heart: &FloatingHeart, clock: f32) -> (i32, i32) {
    let t = (clock + heart.phase) * TAU / DRIFT_PERIOD;
    let dx = (t.sin() * DRIFT_X).round() as i32;
    let dy = ((t * 0.5).sin() * DRIFT_Y).round() as i32;
    (dx, dy)
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

pub(crate) fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
