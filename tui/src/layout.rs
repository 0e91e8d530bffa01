//! Screen layout shared by rendering and hit-testing.
//!
//! Both `draw` and the mouse handler derive rects from the same pure
//! function, so a click always tests against exactly what was drawn.

use ratatui::layout::{Constraint, Layout, Position, Rect};

use smitten_engine::{App, EVADE_BUTTON_HEIGHT, EVADE_BUTTON_WIDTH};

/// Accept button footprint in cells, borders included.
pub const ACCEPT_BUTTON_WIDTH: u16 = 19;
pub const ACCEPT_BUTTON_HEIGHT: u16 = 3;

/// Gap between the accept button and the evade button's home slot.
const BUTTON_GAP: u16 = 4;

/// Max width of the centered content column.
const CONTENT_WIDTH: u16 = 72;

pub(crate) const HEART_ROWS: u16 = 6;

/// The interactive controls on the pending screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    Accept,
    Evade,
}

/// Resolved rects for one frame.
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub heart: Rect,
    pub title: Rect,
    pub body: Rect,
    pub dissuasion: Rect,
    pub accept: Rect,
    /// Current evade rect: the home slot until the first relocation,
    /// afterwards the stored position clamped into the viewport.
    pub evade: Rect,
    /// Block the celebration copy pops into after acceptance.
    pub celebration: Rect,
    pub hint: Rect,
}

#[must_use]
pub fn screen(area: Rect, app: &App) -> ScreenLayout {
    let column = centered_column(area);

    let [heart, title, body, dissuasion, buttons, _, hint] = Layout::vertical([
        Constraint::Length(HEART_ROWS),
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Length(2),
        Constraint::Length(ACCEPT_BUTTON_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(column);

    let row_width = ACCEPT_BUTTON_WIDTH + BUTTON_GAP + EVADE_BUTTON_WIDTH;
    let row_x = buttons.x + buttons.width.saturating_sub(row_width) / 2;
    let accept = Rect {
        x: row_x,
        y: buttons.y,
        width: ACCEPT_BUTTON_WIDTH.min(buttons.width),
        height: ACCEPT_BUTTON_HEIGHT.min(buttons.height.max(1)),
    };
    let home = Rect {
        x: row_x + ACCEPT_BUTTON_WIDTH + BUTTON_GAP,
        y: buttons.y,
        width: EVADE_BUTTON_WIDTH,
        height: EVADE_BUTTON_HEIGHT.min(buttons.height.max(1)),
    };
    // Intersections keep rects inside the frame on very narrow terminals.
    let accept = accept.intersection(area);
    let home = home.intersection(area);
    let evade = match app.evade_position() {
        Some(pos) => clamp_evade(area, pos.x, pos.y),
        None => home,
    };

    // Celebration pops into the space the pending copy occupied.
    let celebration = Rect {
        x: body.x,
        y: body.y,
        width: body.width,
        height: body
            .height
            .saturating_add(dissuasion.height)
            .saturating_add(buttons.height),
    };

    ScreenLayout {
        heart,
        title,
        body,
        dissuasion,
        accept,
        evade,
        celebration,
        hint,
    }
}

/// Which control, if any, sits under the given cell.
///
/// Once accepted there are no controls on the surface at all. The evade
/// button wins overlaps: after a relocation it may sit on top of the
/// accept button, and it is the one floating above.
#[must_use]
pub fn button_at(app: &App, area: Rect, x: u16, y: u16) -> Option<ButtonId> {
    if app.is_accepted() {
        return None;
    }
    let layout = screen(area, app);
    let pos = Position::new(x, y);
    if layout.evade.contains(pos) {
        Some(ButtonId::Evade)
    } else if layout.accept.contains(pos) {
        Some(ButtonId::Accept)
    } else {
        None
    }
}

fn centered_column(area: Rect) -> Rect {
    let width = CONTENT_WIDTH.min(area.width);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + 1.min(area.height),
        width,
        height: area.height.saturating_sub(1),
    }
}

/// Keep a stored evade position fully on screen even after a resize.
fn clamp_evade(area: Rect, x: u16, y: u16) -> Rect {
    let max_x = area
        .x
        .saturating_add(area.width.saturating_sub(EVADE_BUTTON_WIDTH));
    let max_y = area
        .y
        .saturating_add(area.height.saturating_sub(EVADE_BUTTON_HEIGHT));
    Rect {
        x: x.min(max_x),
        y: y.min(max_y),
        width: EVADE_BUTTON_WIDTH.min(area.width),
        height: EVADE_BUTTON_HEIGHT.min(area.height),
    }
}
