//! Game loop driver.
//!
//! Blocks on an [`InputSource`] for one event at a time, applies it to the
//! [`Game`] and hands the resulting frame to a [`FrameSink`]. Nothing here
//! touches a terminal; the binary plugs in the real input queue and renderer.

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::core::Grid;
use crate::error::parse_event;
use crate::game::{Game, Outcome};
use crate::types::InputSource;

/// Shown in the final frame once no new piece fits
pub const GAME_OVER_MESSAGE: &str = "Game Over!";

/// Shown after an unrecognised key
pub const WRONG_KEY_MESSAGE: &str = "wrong key input";

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Field with the active piece composited in
    pub screen: &'a Grid,
    /// Wall thickness of the field
    pub wall: usize,
    pub score: u32,
    pub lines: u32,
    pub message: Option<&'a str>,
}

/// Consumer of finished frames
pub trait FrameSink {
    fn present(&mut self, frame: &Frame<'_>) -> Result<()>;
}

/// Why the loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Quit,
    GameOver,
    /// The input producer shut down
    InputClosed,
}

fn present<S: FrameSink + ?Sized>(game: &Game, sink: &mut S, message: Option<&str>) -> Result<()> {
    let screen = game.screen()?;
    sink.present(&Frame {
        screen: &screen,
        wall: game.field().wall(),
        score: game.score(),
        lines: game.lines(),
        message,
    })
}

/// Run the game until quit, game over, or the input closes
pub fn run<I, S>(game: &mut Game, input: &mut I, sink: &mut S) -> Result<Exit>
where
    I: InputSource + ?Sized,
    S: FrameSink + ?Sized,
{
    if game.is_over() {
        present(game, sink, Some(GAME_OVER_MESSAGE))?;
        return Ok(Exit::GameOver);
    }
    present(game, sink, None)?;

    loop {
        let Some(event) = input.next_event() else {
            info!("input closed");
            return Ok(Exit::InputClosed);
        };

        let action = match parse_event(event) {
            Ok(action) => action,
            Err(e) if e.is_recoverable() => {
                warn!(error = %e, "re-prompting");
                present(game, sink, Some(WRONG_KEY_MESSAGE))?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        debug!(?event, action = action.as_str(), "input");

        match game.apply(action)? {
            Outcome::Quit => {
                info!(score = game.score(), lines = game.lines(), "quit");
                return Ok(Exit::Quit);
            }
            Outcome::GameOver | Outcome::Locked { game_over: true, .. } => {
                info!(score = game.score(), lines = game.lines(), "game over");
                present(game, sink, Some(GAME_OVER_MESSAGE))?;
                return Ok(Exit::GameOver);
            }
            Outcome::Moved | Outcome::Blocked | Outcome::Locked { .. } => {
                present(game, sink, None)?;
            }
        }
    }
}
