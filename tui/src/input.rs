//! Input handling for the Smitten TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;

use smitten_engine::{App, CellPos, Viewport};

use crate::layout::{ButtonId, button_at};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Background reader feeding crossterm events into the frame loop.
///
/// A blocking task polls the terminal and pushes into a bounded channel;
/// `handle_events` drains it non-blocking once per frame.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so the input thread unblocks if it is
        // currently backpressured on a send.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping
                    // events, so a hover-then-click is never half-delivered.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued input and apply it to the app. Returns `true` when the
/// user asked to quit. `area` is the viewport the current frame was laid
/// out against; hit-testing and relocation both use it.
pub fn handle_events(app: &mut App, input: &mut InputPump, area: Rect) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(e)) => return Err(anyhow!("input error: {e}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input thread terminated"));
            }
        };
        processed += 1;

        if apply_event(app, area, &ev) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Apply one event. Returns `true` on a quit request.
fn apply_event(app: &mut App, area: Rect, ev: &Event) -> bool {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, area, key),
        Event::Mouse(mouse) => {
            handle_mouse(app, area, mouse);
            false
        }
        // The next frame lays out against the new size; stored positions
        // are re-clamped at render time.
        Event::Resize(width, height) => {
            tracing::debug!(width, height, "terminal resized");
            false
        }
        _ => false,
    }
}

fn handle_key(app: &mut App, area: Rect, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Char('y') | KeyCode::Enter => app.on_accept(),
        // Keyboard users get chased too.
        KeyCode::Char('n') => {
            app.on_evasive_interaction(Viewport::new(area.width, area.height));
        }
        _ => {}
    }
    false
}

fn handle_mouse(app: &mut App, area: Rect, mouse: &MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved => {
            app.set_pointer(CellPos {
                x: mouse.column,
                y: mouse.row,
            });
            // Pointer entering the evade button counts as an interaction.
            if button_at(app, area, mouse.column, mouse.row) == Some(ButtonId::Evade) {
                app.on_evasive_interaction(Viewport::new(area.width, area.height));
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            match button_at(app, area, mouse.column, mouse.row) {
                Some(ButtonId::Accept) => app.on_accept(),
                Some(ButtonId::Evade) => {
                    app.on_evasive_interaction(Viewport::new(area.width, area.height));
                }
                None => {}
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use smitten_engine::{DISSUASION_MESSAGES, ProposalState};

    use super::*;
    use crate::layout::screen;

    fn area() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, x: u16, y: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn q_and_esc_request_quit() {
        let mut app = App::default();
        assert!(apply_event(&mut app, area(), &key(KeyCode::Char('q'))));
        assert!(apply_event(&mut app, area(), &key(KeyCode::Esc)));
    }

    #[test]
    fn ctrl_c_requests_quit() {
        let mut app = App::default();
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(apply_event(&mut app, area(), &ev));
    }

    #[test]
    fn y_accepts() {
        let mut app = App::default();
        assert!(!apply_event(&mut app, area(), &key(KeyCode::Char('y'))));
        assert_eq!(app.state(), ProposalState::Accepted);
    }

    #[test]
    fn n_triggers_evasion() {
        let mut app = App::default();
        apply_event(&mut app, area(), &key(KeyCode::Char('n')));
        assert_eq!(app.dissuasion_message(), Some(DISSUASION_MESSAGES[0]));
        assert!(app.evade_position().is_some());
    }

    #[test]
    fn hover_over_evade_relocates_and_reveals_prompt() {
        let mut app = App::default();
        let layout = screen(area(), &app);
        let ev = mouse(
            MouseEventKind::Moved,
            layout.evade.x + 1,
            layout.evade.y + 1,
        );
        apply_event(&mut app, area(), &ev);
        assert!(app.prompt().is_visible());
        assert!(app.evade_position().is_some());
        assert_eq!(app.state(), ProposalState::Pending);
    }

    #[test]
    fn click_on_accept_accepts() {
        let mut app = App::default();
        let layout = screen(area(), &app);
        let ev = mouse(
            MouseEventKind::Down(MouseButton::Left),
            layout.accept.x + 1,
            layout.accept.y + 1,
        );
        apply_event(&mut app, area(), &ev);
        assert!(app.is_accepted());
        assert_eq!(app.dissuasion_message(), None);
    }

    #[test]
    fn clicks_after_acceptance_do_nothing() {
        let mut app = App::default();
        let layout = screen(area(), &app);
        app.on_accept();
        let ev = mouse(
            MouseEventKind::Down(MouseButton::Left),
            layout.evade.x + 1,
            layout.evade.y + 1,
        );
        apply_event(&mut app, area(), &ev);
        assert_eq!(app.state(), ProposalState::Accepted);
        assert_eq!(app.dissuasion_message(), None);
    }

    #[test]
    fn moves_outside_buttons_only_track_pointer() {
        let mut app = App::default();
        apply_event(&mut app, area(), &mouse(MouseEventKind::Moved, 0, 0));
        assert!(!app.prompt().is_visible());
        assert_eq!(app.pointer(), Some(CellPos { x: 0, y: 0 }));
    }
}
