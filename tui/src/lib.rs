//! TUI rendering for Smitten using ratatui.

mod effects;
mod input;
mod layout;
mod theme;

pub use effects::{apply_card_effect, float_offset};
pub use input::{InputPump, handle_events};
pub use layout::{ButtonId, ScreenLayout, button_at, screen};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use smitten_engine::App;

const TITLE: &str = "Will You Be Mine Forever?";
const BODY: &str = "Every moment with you is a gift, and I want to cherish them all. \
                    Will you make me the happiest person alive?";
const CELEBRATION_LINE: &str = "You've made me the happiest person alive!";
const FOREVER_LINE: &str = "Forever Together";

/// Heart art at rest and at the pulse peak. `#` cells take the heart
/// glyph; both frames are six rows tall, matching the heart slot.
const HEART_REST: [&str; 6] = [
    " ##   ## ",
    "#### ####",
    "#########",
    " ####### ",
    "  #####  ",
    "   ###   ",
];
const HEART_PEAK: [&str; 6] = [
    " ###   ### ",
    "##### #####",
    "###########",
    " ######### ",
    "  #######  ",
    "    ###    ",
];

/// Pulse scale above which the peak frame renders.
const PEAK_THRESHOLD: f32 = 1.05;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    draw_decor(frame, app, &palette, &glyphs);

    let layout = screen(frame.area(), app);
    draw_heart(frame, app, layout.heart, &palette, &glyphs);
    draw_title(frame, app, &layout, &palette);

    if app.is_accepted() {
        draw_celebration(frame, app, layout.celebration, &palette, &glyphs);
    } else {
        draw_pending(frame, app, &layout, &palette, &glyphs);
    }

    draw_hint(frame, app, layout.hint, &palette, options.ascii_only);
}

/// Drifting background hearts, drawn first so everything else sits on top.
fn draw_decor(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let clock = app.decor().clock();
    for heart in app.decor().hearts() {
        let base_x = (u32::from(area.width.saturating_sub(1)) * u32::from(heart.x_permille)
            / 1000) as i32;
        let base_y = (u32::from(area.height.saturating_sub(1)) * u32::from(heart.y_permille)
            / 1000) as i32;
        let (dx, dy) = float_offset(heart, clock);
        let x = base_x + dx;
        let y = base_y + dy;
        if x < 0 || y < 0 || x >= i32::from(area.width) || y >= i32::from(area.height) {
            continue;
        }
        let cell = Rect::new(x as u16, y as u16, 1, 1);
        frame.render_widget(
            Paragraph::new(glyphs.heart).style(styles::decor(palette)),
            cell,
        );
    }
}

fn draw_heart(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let pattern: &[&str] = if app.pulse().scale() >= PEAK_THRESHOLD {
        &HEART_PEAK
    } else {
        &HEART_REST
    };
    let style = Style::default().fg(palette.heart);
    let lines: Vec<Line> = pattern
        .iter()
        .map(|row| {
            let rendered: String = row
                .chars()
                .map(|c| if c == '#' { glyphs.heart } else { " " })
                .collect();
            Line::from(Span::styled(rendered, style))
        })
        .collect();
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_title(frame: &mut Frame, app: &App, layout: &ScreenLayout, palette: &Palette) {
    let area = apply_card_effect(app.entrance(), layout.title, frame.area());
    let title = Paragraph::new(Line::from(Span::styled(TITLE, styles::title(palette))))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_pending(
    frame: &mut Frame,
    app: &App,
    layout: &ScreenLayout,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let viewport = frame.area();

    let body_area = apply_card_effect(app.entrance(), layout.body, viewport);
    let body = Paragraph::new(Line::from(Span::styled(BODY, styles::body(palette))))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, body_area);

    let hovered = app
        .pointer()
        .is_some_and(|p| layout.accept.contains(Position::new(p.x, p.y)));
    draw_button(
        frame,
        layout.accept,
        &format!("Yes, I Will! {}", glyphs.heart_inline),
        styles::accept_button(palette, hovered),
        palette,
    );

    // The evade button floats over whatever is under it after relocation.
    frame.render_widget(Clear, layout.evade);
    draw_button(
        frame,
        layout.evade,
        &format!("No {}", glyphs.cross),
        styles::evade_button(palette),
        palette,
    );

    // Drawn last: the taunt must stay readable even when the fleeing
    // button lands on top of its row.
    if let Some(message) = app.dissuasion_message() {
        let dissuasion = Paragraph::new(Line::from(Span::styled(
            message,
            styles::dissuasion(palette),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(dissuasion, layout.dissuasion);
    }
}

fn draw_button(frame: &mut Frame, area: Rect, label: &str, style: Style, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .style(style);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let label = Paragraph::new(Line::from(label)).alignment(Alignment::Center);
    frame.render_widget(label, inner);
}

fn draw_celebration(
    frame: &mut Frame,
    app: &App,
    base: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let area = match app.celebration() {
        Some(effect) => apply_card_effect(effect, base, frame.area()),
        None => base,
    };
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            format!("{CELEBRATION_LINE} {}", glyphs.heart_inline),
            styles::celebration(palette),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(glyphs.sparkle, styles::sparkle(palette)),
            Span::styled(format!(" {FOREVER_LINE} "), styles::celebration(palette)),
            Span::styled(glyphs.sparkle, styles::sparkle(palette)),
        ]),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_hint(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, ascii_only: bool) {
    let sep = if ascii_only { " | " } else { " · " };
    let hint = if app.is_accepted() {
        "q quit".to_string()
    } else {
        format!("y yes{sep}n no{sep}q quit")
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(hint, styles::key_hint(palette))))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
