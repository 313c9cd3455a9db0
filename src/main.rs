//! Terminal falling-block runner (default binary).
//!
//! Reads settings from the environment, puts the terminal in raw mode and
//! drives the game loop until quit or game over. The final score and the grid
//! audit are printed after the terminal is restored.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_blockfall::core::{audit, PlayField, SimpleRng};
use tui_blockfall::engine::{run, Exit, Game, GameConfig};
use tui_blockfall::input::InputQueue;
use tui_blockfall::term::{GameView, TerminalRenderer};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;
    info!(?config, "starting");

    let (exit, score, lines) = play(&config)?;
    for line in GameView::new().farewell(exit, score, lines) {
        println!("{line}");
    }

    let audit = audit();
    info!(
        ?exit,
        created = audit.created,
        released = audit.released,
        live = audit.live(),
        "grid audit"
    );
    println!("(created, released) = ({}, {})", audit.created, audit.released);
    println!("Program terminated!");
    Ok(())
}

/// Install a file logger when `BLOCKFALL_LOG_PATH` is set.
///
/// Logging to the terminal would corrupt the board, so without a path nothing
/// is installed.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("failed to open log file {path}"))?;
    let filter = EnvFilter::try_from_env("BLOCKFALL_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// One game session; every grid it creates is dropped before returning.
///
/// Yields how the session ended with the final score and cleared lines.
fn play(config: &GameConfig) -> Result<(Exit, u32, u32)> {
    let rng = match config.seed {
        Some(seed) => SimpleRng::new(seed),
        None => SimpleRng::from_time(),
    };
    let mut game = Game::with_field(PlayField::initial(), rng)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    // The input queue is dropped (reader joined) before raw mode is left.
    let result = InputQueue::terminal(config.tick)
        .and_then(|mut input| run(&mut game, &mut input, &mut term));

    // Always try to restore terminal state.
    let _ = term.exit();
    let exit = result?;
    Ok((exit, game.score(), game.lines()))
}
