//! Game engine - the state machine and loop on top of the grid core
//!
//! # Module Structure
//!
//! - [`game`]: `Game` phases, action resolution with rollback, lock-in, scoring
//! - [`runner`]: the blocking input → apply → render loop, `Frame` and `FrameSink`
//! - [`config`]: environment-driven runtime settings
//! - [`error`]: `GameError` and input parsing
//!
//! # Example
//!
//! ```
//! use tui_blockfall_engine::{Game, Outcome};
//! use tui_blockfall_engine::types::{GameAction, PieceKind};
//!
//! let mut game = Game::new(12345).unwrap();
//! game.spawn(PieceKind::O).unwrap();
//!
//! assert_eq!(game.apply(GameAction::MoveLeft).unwrap(), Outcome::Moved);
//! assert!(matches!(
//!     game.apply(GameAction::HardDrop).unwrap(),
//!     Outcome::Locked { lines_cleared: 0, game_over: false }
//! ));
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod runner;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use config::GameConfig;
pub use error::{parse_event, GameError};
pub use game::{ActivePiece, Game, Outcome, Phase};
pub use runner::{run, Exit, Frame, FrameSink, GAME_OVER_MESSAGE, WRONG_KEY_MESSAGE};
