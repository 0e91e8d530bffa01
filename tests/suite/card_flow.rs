//! End-to-end card flow: the proposal lifecycle as the UI drives it.

use ratatui::layout::Rect;

use smitten_engine::{
    App, DISSUASION_MESSAGES, EVADE_BUTTON_HEIGHT, EVADE_BUTTON_WIDTH, ProposalState, Viewport,
};
use smitten_tui::{ButtonId, button_at, screen};

const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

fn viewport() -> Viewport {
    Viewport::new(AREA.width, AREA.height)
}

/// The full chase: hover the "No" button repeatedly, watch every
/// dissuasion message cycle past, then give in and say yes.
#[test]
fn chase_through_all_messages_then_accept() {
    let mut app = App::default();

    app.on_evasive_interaction(viewport());
    assert_eq!(app.dissuasion_message(), Some(DISSUASION_MESSAGES[0]));

    // One full lap through the remaining messages and back to the start.
    for expected in 1..DISSUASION_MESSAGES.len() {
        app.on_evasive_interaction(viewport());
        assert_eq!(app.dissuasion_message(), Some(DISSUASION_MESSAGES[expected]));
    }
    app.on_evasive_interaction(viewport());
    assert_eq!(app.dissuasion_message(), Some(DISSUASION_MESSAGES[0]));
    assert_eq!(app.state(), ProposalState::Pending);

    app.on_accept();
    assert_eq!(app.state(), ProposalState::Accepted);
    assert_eq!(app.dissuasion_message(), None);
}

/// Every relocation during a long chase keeps the button clickable:
/// fully inside the viewport, and hit-testable at its own center.
#[test]
fn fleeing_button_is_always_clickable() {
    let mut app = App::default();
    for _ in 0..50 {
        app.on_evasive_interaction(viewport());
        let layout = screen(AREA, &app);
        assert!(layout.evade.right() <= AREA.right());
        assert!(layout.evade.bottom() <= AREA.bottom());
        let center_x = layout.evade.x + EVADE_BUTTON_WIDTH / 2;
        let center_y = layout.evade.y + EVADE_BUTTON_HEIGHT / 2;
        assert_eq!(
            button_at(&app, AREA, center_x, center_y),
            Some(ButtonId::Evade)
        );
    }
}

/// Acceptance removes both controls from the interactive surface, so no
/// further pointer event can reach the state machine.
#[test]
fn accepted_surface_has_no_reachable_controls() {
    let mut app = App::default();
    app.on_evasive_interaction(viewport());
    let layout = screen(AREA, &app);
    app.on_accept();

    for x in 0..AREA.width {
        assert_eq!(button_at(&app, AREA, x, layout.accept.y + 1), None);
        assert_eq!(button_at(&app, AREA, x, layout.evade.y + 1), None);
    }
    // Even a stray engine-level event is dropped.
    app.on_evasive_interaction(viewport());
    assert_eq!(app.state(), ProposalState::Accepted);
    assert_eq!(app.dissuasion_message(), None);
}

/// Accepting straight away, without ever poking the "No" button.
#[test]
fn immediate_acceptance_skips_the_prompt_entirely() {
    let mut app = App::default();
    app.on_accept();
    assert!(app.is_accepted());
    assert!(!app.prompt().is_visible());
    assert_eq!(app.evade_position(), None);
    assert!(app.celebration().is_some());
}

/// A viewport smaller than the button clamps relocation to the origin
/// instead of failing.
#[test]
fn degenerate_viewport_clamps_to_origin() {
    let mut app = App::default();
    app.on_evasive_interaction(Viewport::new(3, 1));
    let pos = app.evade_position().expect("relocated");
    assert_eq!((pos.x, pos.y), (0, 0));
}
