//! Cell value → glyph table.

use crossterm::style::Color;

/// Two-column glyph for one field cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub text: &'static str,
    pub color: Option<Color>,
}

impl Glyph {
    const fn plain(text: &'static str) -> Self {
        Self { text, color: None }
    }

    const fn colored(text: &'static str, color: Color) -> Self {
        Self {
            text,
            color: Some(color),
        }
    }
}

/// Marker for values with no glyph of their own
pub const UNKNOWN_GLYPH: Glyph = Glyph::plain("XX");

/// Glyph for a cell value
pub fn glyph_for(value: i32) -> Glyph {
    match value {
        0 => Glyph::colored("□ ", Color::Red),
        1 => Glyph::colored("■ ", Color::Green),
        10 => Glyph::plain("◈ "),
        20 => Glyph::plain("★ "),
        30 => Glyph::plain("● "),
        40 => Glyph::plain("◆ "),
        50 => Glyph::plain("▲ "),
        60 => Glyph::plain("♣ "),
        70 => Glyph::plain("♥ "),
        _ => UNKNOWN_GLYPH,
    }
}
