//! Rendered-output tests through a vt100 virtual terminal.
//!
//! Each test drives the real `App` state machine and asserts on the
//! text that actually landed on screen.


use ratatui::Terminal;

use smitten_engine::{App, AppConfig, SmittenConfig, Viewport};
use smitten_tui::draw;
use vt100_backend::VT100Backend;

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

fn render(app: &App) -> String {
    let backend = VT100Backend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).expect("failed to create terminal");
    terminal.draw(|frame| draw(frame, app)).expect("failed to draw");
    terminal.backend().to_string()
}

fn config(app_config: AppConfig) -> SmittenConfig {
    SmittenConfig {
        app: Some(app_config),
    }
}

#[test]
fn pending_screen_shows_prompt_and_both_buttons() {
    let app = App::default();
    let screen = render(&app);
    assert!(screen.contains("Will You Be Mine Forever?"), "{screen}");
    assert!(screen.contains("Every moment with you is a gift"), "{screen}");
    assert!(screen.contains("Yes, I Will!"), "{screen}");
    assert!(screen.contains("No "), "{screen}");
}

#[test]
fn pending_screen_has_no_dissuasion_before_first_evasion() {
    let app = App::default();
    let screen = render(&app);
    assert!(!screen.contains("Are you sure?"), "{screen}");
}

#[test]
fn first_evasion_renders_message_zero() {
    let mut app = App::default();
    app.on_evasive_interaction(Viewport::new(WIDTH, HEIGHT));
    let screen = render(&app);
    assert!(screen.contains("Are you sure?"), "{screen}");
}

#[test]
fn third_evasion_renders_message_two() {
    let mut app = App::default();
    for _ in 0..3 {
        app.on_evasive_interaction(Viewport::new(WIDTH, HEIGHT));
    }
    let screen = render(&app);
    assert!(screen.contains("You're breaking my heart!"), "{screen}");
    assert!(!screen.contains("Are you sure?"), "{screen}");
}

#[test]
fn accepted_screen_replaces_buttons_with_celebration() {
    let mut app = App::default();
    app.on_evasive_interaction(Viewport::new(WIDTH, HEIGHT));
    app.on_accept();
    // Let the pop-in settle so the copy renders at full size.
    app.advance_animations(std::time::Duration::from_secs(1));
    let screen = render(&app);
    assert!(screen.contains("happiest person alive!"), "{screen}");
    assert!(screen.contains("Forever Together"), "{screen}");
    assert!(!screen.contains("Yes, I Will!"), "{screen}");
    assert!(!screen.contains("Are you sure?"), "{screen}");
}

#[test]
fn title_persists_after_acceptance() {
    let mut app = App::default();
    app.on_accept();
    app.advance_animations(std::time::Duration::from_secs(1));
    let screen = render(&app);
    assert!(screen.contains("Will You Be Mine Forever?"), "{screen}");
}

#[test]
fn ascii_mode_renders_ascii_labels() {
    let cfg = config(AppConfig {
        ascii_only: true,
        ..AppConfig::default()
    });
    let app = App::new(Some(&cfg));
    let screen = render(&app);
    assert!(screen.contains("Yes, I Will! <3"), "{screen}");
    assert!(screen.contains("No x"), "{screen}");
}

#[test]
fn tiny_terminal_still_renders_without_panicking() {
    let mut app = App::default();
    app.on_evasive_interaction(Viewport::new(10, 4));
    let backend = VT100Backend::new(10, 4);
    let mut terminal = Terminal::new(backend).expect("failed to create terminal");
    terminal.draw(|frame| draw(frame, &app)).expect("failed to draw");
}
