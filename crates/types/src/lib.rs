//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies, so they can be used
//! from the grid engine, the game loop, the input queue and the renderer alike.
//!
//! # Field Dimensions
//!
//! The play field is a fixed matrix: a playable area surrounded by a solid wall
//! on the left, right and bottom (the top is open).
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_DY` | 10 | Playable rows |
//! | `SCREEN_DX` | 10 | Playable columns |
//! | `SCREEN_DW` | 3 | Wall thickness |
//! | `ARRAY_DY` | 13 | Total field rows (`SCREEN_DY + SCREEN_DW`) |
//! | `ARRAY_DX` | 16 | Total field columns (`SCREEN_DX + 2 * SCREEN_DW`) |
//!
//! # Cell Encoding
//!
//! | Value | Meaning |
//! |-------|---------|
//! | 0 | Empty |
//! | 1 | Occupied (wall, locked block, active piece) |
//! | 2+ | Transient overlay value: two occupied cells collided |
//! | 10..=70 (step 10) | Decorative glyph codes, reserved |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{GameAction, PieceKind, Rotation, ARRAY_DX, ARRAY_DY};
//!
//! assert_eq!(PieceKind::ALL[0], PieceKind::O);
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//!
//! assert_eq!(GameAction::from_symbol('a'), Some(GameAction::MoveLeft));
//!
//! assert_eq!(ARRAY_DY, 13);
//! assert_eq!(ARRAY_DX, 16);
//! ```

/// Playable rows
pub const SCREEN_DY: usize = 10;

/// Playable columns
pub const SCREEN_DX: usize = 10;

/// Wall thickness on the left, right and bottom
pub const SCREEN_DW: usize = 3;

/// Total field rows (playable rows plus the bottom wall)
pub const ARRAY_DY: usize = SCREEN_DY + SCREEN_DW;

/// Total field columns (playable columns plus both side walls)
pub const ARRAY_DX: usize = SCREEN_DX + 2 * SCREEN_DW;

/// Empty cell
pub const CELL_EMPTY: i32 = 0;

/// Occupied cell (wall, locked block or active piece)
pub const CELL_OCCUPIED: i32 = 1;

/// Any overlay value above this marks a collision
pub const COLLISION_THRESHOLD: i32 = 1;

/// Decorative glyph codes, reserved for per-piece coloring
pub const DECORATIVE_CODES: [i32; 7] = [10, 20, 30, 40, 50, 60, 70];

/// Points awarded per cleared row
pub const LINE_SCORE: u32 = 10;

/// Default keep-alive tick period (1000ms = one synthetic soft drop per second)
pub const TICK_MS: u64 = 1000;

/// Number of piece types
pub const MAX_BLK_TYPES: usize = 7;

/// Number of rotation variants per piece type
pub const MAX_BLK_DEGREES: usize = 4;

/// The seven piece kinds, in catalog order
///
/// - **O**: 2x2 square (type 0)
/// - **T**: T-shaped (type 1)
/// - **J**: J-shaped (type 2)
/// - **L**: L-shaped (type 3)
/// - **Z**: Z-shaped (type 4)
/// - **S**: S-shaped (type 5)
/// - **I**: 4x4 bar (type 6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    T,
    J,
    L,
    Z,
    S,
    I,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; MAX_BLK_TYPES] = [
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::I,
    ];

    /// Catalog index of this kind
    pub fn index(&self) -> usize {
        match self {
            PieceKind::O => 0,
            PieceKind::T => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::Z => 4,
            PieceKind::S => 5,
            PieceKind::I => 6,
        }
    }

    /// Side length of the square shape matrix
    pub fn size(&self) -> usize {
        match self {
            PieceKind::O => 2,
            PieceKind::I => 4,
            _ => 3,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::I => "i",
        }
    }
}

/// Rotation states
///
/// The cycle goes: North → East → South → West → North.
/// North is the spawn orientation (rotation index 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Catalog index (0..4)
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Raw input delivered to the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key symbol typed by the player
    Key(char),
    /// Synthetic keep-alive tick from the timer
    Tick,
}

/// Blocking producer of input events.
///
/// Returns `None` once the producer side has shut down.
pub trait InputSource {
    fn next_event(&mut self) -> Option<InputEvent>;
}

/// Game commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Drop piece to the lowest free position and lock it
    HardDrop,
    /// Leave the game loop
    Quit,
}

impl GameAction {
    /// Parse a key symbol
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_symbol('w'), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_symbol(' '), Some(GameAction::HardDrop));
    /// assert_eq!(GameAction::from_symbol('x'), None);
    /// ```
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'a' => Some(GameAction::MoveLeft),
            'd' => Some(GameAction::MoveRight),
            's' => Some(GameAction::SoftDrop),
            'w' => Some(GameAction::RotateCw),
            ' ' => Some(GameAction::HardDrop),
            'q' => Some(GameAction::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::HardDrop => "hardDrop",
            GameAction::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_geometry_defaults() {
        assert_eq!(ARRAY_DY, 13);
        assert_eq!(ARRAY_DX, 16);
        assert_eq!(LINE_SCORE, 10);
        assert_eq!(TICK_MS, 1000);
        assert!(DECORATIVE_CODES.iter().all(|&c| c > COLLISION_THRESHOLD));
    }

    #[test]
    fn catalog_order_matches_index() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
        assert_eq!(PieceKind::O.size(), 2);
        assert_eq!(PieceKind::I.size(), 4);
        assert_eq!(PieceKind::T.size(), 3);
    }

    #[test]
    fn four_clockwise_turns_return_home() {
        let mut rotation = Rotation::default();
        for expected in 1..=4 {
            rotation = rotation.rotate_cw();
            assert_eq!(rotation.index(), expected % 4);
        }
        assert_eq!(rotation, Rotation::North);
        assert_eq!(rotation.as_str(), "north");
    }

    #[test]
    fn unbound_symbols_have_no_action() {
        for symbol in ['x', 'A', '\n', 'Q'] {
            assert_eq!(GameAction::from_symbol(symbol), None);
        }
        assert_eq!(GameAction::from_symbol('s').map(|a| a.as_str()), Some("softDrop"));
    }
}
