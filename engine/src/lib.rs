//! Core engine for Smitten - the proposal card state machine.
//!
//! This crate owns everything that decides what the card shows, without
//! any TUI dependency: the proposal lifecycle, the dissuasion prompt,
//! the evasive button's position, and the decorative animation clocks.

use std::time::{Duration, Instant};

mod config;
mod geometry;
mod proposal;
pub mod ui;

pub use config::{AppConfig, ConfigError, SmittenConfig, config_path};
pub use geometry::{CellPos, Viewport};
pub use proposal::{
    DISSUASION_MESSAGES, DissuasionPrompt, EVADE_BUTTON_HEIGHT, EVADE_BUTTON_WIDTH, ProposalState,
};

use proposal::random_evade_position;
use ui::{CardEffect, DecorField, PulseEffect, UiOptions};

/// One heartbeat of the big heart.
const PULSE_PERIOD: Duration = Duration::from_secs(1);
/// Title and body slide into place over this long on launch.
const ENTRANCE_DURATION: Duration = Duration::from_millis(1500);
/// Celebration block pop-in after acceptance.
const CELEBRATION_DURATION: Duration = Duration::from_millis(500);

/// The card's application state.
///
/// One instance per session, owned by the event loop. All transitions
/// run synchronously on the loop; there is no shared state anywhere.
pub struct App {
    proposal: ProposalState,
    prompt: DissuasionPrompt,
    /// `None` until the first relocation; the button sits in its home
    /// slot next to "Yes" until then.
    evade_pos: Option<CellPos>,
    ui_options: UiOptions,
    pulse: PulseEffect,
    entrance: CardEffect,
    celebration: Option<CardEffect>,
    decor: DecorField,
    /// Last reported pointer cell; drives hover styling only.
    pointer: Option<CellPos>,
    last_tick: Instant,
}

impl App {
    #[must_use]
    pub fn new(config: Option<&SmittenConfig>) -> Self {
        let ui_options = config.map(SmittenConfig::ui_options).unwrap_or_default();
        // Reduced motion collapses every one-shot effect to its final
        // frame and freezes the looping clocks.
        let entrance_duration = if ui_options.reduced_motion {
            Duration::ZERO
        } else {
            ENTRANCE_DURATION
        };
        let pulse_period = if ui_options.reduced_motion {
            Duration::ZERO
        } else {
            PULSE_PERIOD
        };

        Self {
            proposal: ProposalState::Pending,
            prompt: DissuasionPrompt::default(),
            evade_pos: None,
            ui_options,
            pulse: PulseEffect::new(pulse_period),
            entrance: CardEffect::slide_up(entrance_duration),
            celebration: None,
            decor: DecorField::new(),
            pointer: None,
            last_tick: Instant::now(),
        }
    }

    /// Advance the animation clocks by wall time since the last tick.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.advance_animations(delta);
    }

    /// Advance the animation clocks by an explicit delta.
    pub fn advance_animations(&mut self, delta: Duration) {
        if self.ui_options.reduced_motion {
            return;
        }
        self.pulse.advance(delta);
        self.entrance.advance(delta);
        if let Some(celebration) = &mut self.celebration {
            celebration.advance(delta);
        }
        self.decor.advance(delta);
    }

    /// The pointer reached the "No" button (hover or click), or the user
    /// pressed `n`.
    ///
    /// Relocates the button to a random spot fully inside `viewport`,
    /// then reveals the dissuasion prompt or advances it. Undeliverable
    /// once accepted: the button is gone from the screen, so a stray
    /// event here is dropped.
    pub fn on_evasive_interaction(&mut self, viewport: Viewport) {
        if self.proposal.is_accepted() {
            tracing::debug!("evasive interaction after acceptance ignored");
            return;
        }
        let pos = random_evade_position(viewport);
        tracing::debug!(x = pos.x, y = pos.y, "evasive button relocated");
        self.evade_pos = Some(pos);
        self.prompt.bump();
    }

    /// The user said yes.
    pub fn on_accept(&mut self) {
        if self.proposal.is_accepted() {
            return;
        }
        tracing::info!("proposal accepted");
        self.proposal = ProposalState::Accepted;
        self.prompt.hide();
        let duration = if self.ui_options.reduced_motion {
            Duration::ZERO
        } else {
            CELEBRATION_DURATION
        };
        self.celebration = Some(CardEffect::pop_scale(duration));
    }

    pub fn set_pointer(&mut self, pos: CellPos) {
        self.pointer = Some(pos);
    }

    #[must_use]
    pub fn pointer(&self) -> Option<CellPos> {
        self.pointer
    }

    #[must_use]
    pub fn state(&self) -> ProposalState {
        self.proposal
    }

    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.proposal.is_accepted()
    }

    #[must_use]
    pub fn prompt(&self) -> DissuasionPrompt {
        self.prompt
    }

    /// The dissuasion message to render, if any. Always `None` once the
    /// proposal is accepted.
    #[must_use]
    pub fn dissuasion_message(&self) -> Option<&'static str> {
        if self.proposal.is_accepted() {
            return None;
        }
        self.prompt.message()
    }

    /// Where the evasive button sits, or `None` while it is still in
    /// its home slot.
    #[must_use]
    pub fn evade_position(&self) -> Option<CellPos> {
        self.evade_pos
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn pulse(&self) -> &PulseEffect {
        &self.pulse
    }

    #[must_use]
    pub fn entrance(&self) -> &CardEffect {
        &self.entrance
    }

    #[must_use]
    pub fn celebration(&self) -> Option<&CardEffect> {
        self.celebration.as_ref()
    }

    #[must_use]
    pub fn decor(&self) -> &DecorField {
        &self.decor
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(None)
    }
}
