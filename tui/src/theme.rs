//! Color theme and glyphs for the Smitten TUI.
//!
//! Rose-on-ink palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use smitten_engine::ui::UiOptions;

/// Rose palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(32, 18, 26); // wine ink
    pub const BG_PANEL: Color = Color::Rgb(48, 26, 38); // mulberry
    pub const BG_BORDER: Color = Color::Rgb(110, 62, 87); // dried rose

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(244, 226, 232); // blush white
    pub const TEXT_SECONDARY: Color = Color::Rgb(214, 182, 196); // rose quartz
    pub const TEXT_MUTED: Color = Color::Rgb(144, 110, 126); // faded mauve

    // === Accents ===
    pub const HEART: Color = Color::Rgb(236, 72, 120); // raspberry
    pub const HEART_DIM: Color = Color::Rgb(120, 52, 76); // pressed petal
    pub const ROSE: Color = Color::Rgb(244, 114, 158); // rose
    pub const GOLD: Color = Color::Rgb(230, 195, 132); // sparkle gold
    pub const YES_BG: Color = Color::Rgb(214, 51, 108); // love button
    pub const YES_BG_HOVER: Color = Color::Rgb(240, 82, 135);
    pub const NO_BG: Color = Color::Rgb(70, 62, 68); // reluctant gray
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub heart: Color,
    pub heart_dim: Color,
    pub rose: Color,
    pub gold: Color,
    pub yes_bg: Color,
    pub yes_bg_hover: Color,
    pub no_bg: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            heart: colors::HEART,
            heart_dim: colors::HEART_DIM,
            rose: colors::ROSE,
            gold: colors::GOLD,
            yes_bg: colors::YES_BG,
            yes_bg_hover: colors::YES_BG_HOVER,
            no_bg: colors::NO_BG,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            heart: Color::Red,
            heart_dim: Color::DarkGray,
            rose: Color::Magenta,
            gold: Color::Yellow,
            yes_bg: Color::Red,
            yes_bg_hover: Color::LightRed,
            no_bg: Color::DarkGray,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for hearts and sparkles.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    /// Single-cell heart used for the big heart art and the drift field.
    pub heart: &'static str,
    pub sparkle: &'static str,
    pub cross: &'static str,
    /// Inline heart suffix on the accept button and celebration copy.
    pub heart_inline: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            heart: "#",
            sparkle: "*",
            cross: "x",
            heart_inline: "<3",
        }
    } else {
        Glyphs {
            heart: "♥",
            sparkle: "✦",
            cross: "✗",
            heart_inline: "💝",
        }
    }
}

/// Pre-defined styles for common card elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.rose)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn dissuasion(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn accept_button(palette: &Palette, hovered: bool) -> Style {
        let bg = if hovered {
            palette.yes_bg_hover
        } else {
            palette.yes_bg
        };
        Style::default()
            .fg(palette.text_primary)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn evade_button(palette: &Palette) -> Style {
        Style::default().fg(palette.text_primary).bg(palette.no_bg)
    }

    #[must_use]
    pub fn celebration(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn sparkle(palette: &Palette) -> Style {
        Style::default().fg(palette.gold)
    }

    #[must_use]
    pub fn decor(palette: &Palette) -> Style {
        Style::default().fg(palette.heart_dim)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }
}

#[cfg(test)]
mod tests {
    use smitten_engine::ui::UiOptions;

    use super::{glyphs, palette};

    #[test]
    fn ascii_glyphs_are_plain_ascii() {
        let options = UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        };
        let g = glyphs(options);
        for s in [g.heart, g.sparkle, g.cross, g.heart_inline] {
            assert!(s.is_ascii(), "{s:?} should be ASCII");
        }
    }

    #[test]
    fn high_contrast_switches_palette() {
        let standard = palette(UiOptions::default());
        let contrast = palette(UiOptions {
            high_contrast: true,
            ..UiOptions::default()
        });
        assert_ne!(
            format!("{:?}", standard.bg_dark),
            format!("{:?}", contrast.bg_dark)
        );
    }
}
