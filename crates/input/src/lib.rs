//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events to the game's command symbols and merges them
//! with the keep-alive timer into a single [`InputQueue`] that implements
//! [`types::InputSource`].

pub mod map;
pub mod queue;

pub use tui_blockfall_types as types;

pub use map::{should_quit, symbol_for_key};
pub use queue::{InputQueue, KeySource, ScriptedKeys, TerminalKeys};
