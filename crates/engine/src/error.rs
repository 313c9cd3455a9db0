use thiserror::Error;

use crate::core::GridError;
use crate::types::{GameAction, InputEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("wrong key input: {0:?}")]
    InvalidCommand(char),
}

impl GameError {
    /// Recoverable errors re-prompt for input; everything else ends the game.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidCommand(_))
    }
}

/// Turn an input event into a game action
pub fn parse_event(event: InputEvent) -> Result<GameAction, GameError> {
    match event {
        InputEvent::Key(symbol) => {
            GameAction::from_symbol(symbol).ok_or(GameError::InvalidCommand(symbol))
        }
        InputEvent::Tick => Ok(GameAction::SoftDrop),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_symbols() {
        assert_eq!(parse_event(InputEvent::Key('a')), Ok(GameAction::MoveLeft));
        assert_eq!(parse_event(InputEvent::Key('q')), Ok(GameAction::Quit));
        assert_eq!(parse_event(InputEvent::Tick), Ok(GameAction::SoftDrop));
    }

    #[test]
    fn parse_unknown_symbol_is_recoverable() {
        let err = parse_event(InputEvent::Key('x')).unwrap_err();
        assert_eq!(err, GameError::InvalidCommand('x'));
        assert!(err.is_recoverable());
        assert!(!GameError::Grid(GridError::InvalidDimension { rows: -1, cols: 0 }).is_recoverable());
    }
}
