//! Color palettes
//!
//! One palette per theme mode. Widgets take a palette instead of picking
//! colors themselves so the whole UI flips together.

use ratatui::style::Color;

use crate::tracker::ThemeMode;

/// Resolved colors for one theme mode
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub cursor_bg: Color,
    /// Quantities that are still missing
    pub shortfall: Color,
    /// Quantities that are covered
    pub ready: Color,
}

/// The palette for a theme mode
pub fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Dark => Palette {
            text: Color::White,
            dim: Color::DarkGray,
            accent: Color::Cyan,
            border: Color::DarkGray,
            cursor_bg: Color::Rgb(40, 40, 50),
            shortfall: Color::Red,
            ready: Color::Green,
        },
        ThemeMode::Light => Palette {
            text: Color::Black,
            dim: Color::Gray,
            accent: Color::Blue,
            border: Color::Gray,
            cursor_bg: Color::Rgb(220, 220, 230),
            shortfall: Color::Red,
            ready: Color::Rgb(0, 130, 0),
        },
    }
}
