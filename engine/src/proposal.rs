//! The proposal state machine.
//!
//! Two pieces of state decide everything the card shows: whether the
//! proposal has been accepted, and which dissuasion message (if any) is
//! on screen. The evasive "No" button additionally carries a screen
//! position, which is presentation-only and never gates a transition.

use crate::geometry::{CellPos, Viewport};

/// Messages cycled through while the user keeps chasing the "No" button.
pub const DISSUASION_MESSAGES: [&str; 7] = [
    "Are you sure? 🥺",
    "Really think about it! 💭",
    "You're breaking my heart! 💔",
    "Give it another thought! 🤔",
    "Don't be like that! 🥹",
    "Please reconsider! 🙏",
    "You know you want to say yes! 😊",
];

/// Footprint of the evasive button in terminal cells, borders included.
pub const EVADE_BUTTON_WIDTH: u16 = 12;
pub const EVADE_BUTTON_HEIGHT: u16 = 3;

/// Lifecycle of the proposal. `Accepted` is terminal: no event defined
/// anywhere in the card transitions out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProposalState {
    #[default]
    Pending,
    Accepted,
}

impl ProposalState {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, ProposalState::Accepted)
    }
}

/// Visibility and cursor into [`DISSUASION_MESSAGES`].
///
/// Hidden until the first evasive interaction; every interaction after
/// that advances the cursor, wrapping at the end of the list. There is
/// no path back to hidden while the proposal is still pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DissuasionPrompt {
    visible: bool,
    index: usize,
}

impl DissuasionPrompt {
    /// First interaction reveals message 0; later ones advance the cursor.
    pub(crate) fn bump(&mut self) {
        if self.visible {
            self.index = (self.index + 1) % DISSUASION_MESSAGES.len();
        } else {
            self.visible = true;
        }
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    /// The message to render, or `None` while the prompt is hidden.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        self.visible.then(|| DISSUASION_MESSAGES[self.index])
    }
}

/// Pick a new spot for the evasive button, fully inside the viewport.
///
/// Degenerate viewports (smaller than the button itself) clamp the
/// range to zero instead of failing.
pub(crate) fn random_evade_position(viewport: Viewport) -> CellPos {
    let max_x = viewport.width.saturating_sub(EVADE_BUTTON_WIDTH);
    let max_y = viewport.height.saturating_sub(EVADE_BUTTON_HEIGHT);
    CellPos {
        x: rand::random_range(0..=max_x),
        y: rand::random_range(0..=max_y),
    }
}
