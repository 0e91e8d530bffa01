//! UI state types for the TUI layer.
//!
//! Pure data with no IO and no ratatui dependency. The engine owns this
//! state; the tui crate turns it into rects, offsets, and styles.

mod animation;
mod decor;
mod motion;
mod view_state;

pub use decor::{DecorField, FLOATING_HEART_COUNT, FloatingHeart};
pub use motion::{CardEffect, CardEffectKind, PulseEffect};
pub use view_state::UiOptions;
