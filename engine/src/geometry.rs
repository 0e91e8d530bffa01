//! Cell-based geometry shared between the engine and the renderer.
//!
//! Kept free of ratatui types so the engine stays TUI-agnostic; the tui
//! crate converts to and from `Rect` at its boundary.

/// A position in terminal cells, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellPos {
    pub x: u16,
    pub y: u16,
}

/// Terminal viewport dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}
