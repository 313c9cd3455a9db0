//! Terminal rendering for the falling-block game.
//!
//! A small, game-oriented layer: [`GameView`] turns an engine frame into rows
//! of two-column glyphs, and [`TerminalRenderer`] writes them through crossterm.
//! The view is pure and tested without a terminal.

pub mod game_view;
pub mod glyph;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_engine as engine;
pub use tui_blockfall_types as types;

pub use game_view::{GameView, Screen};
pub use glyph::{glyph_for, Glyph, UNKNOWN_GLYPH};
pub use renderer::{encode_full_into, TerminalRenderer};
