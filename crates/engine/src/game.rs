//! Game state machine
//!
//! One `Game` owns the play field, the piece catalog, the active piece and the
//! score. Every action is resolved against the field with a placement test
//! before it is committed, so the field only ever receives non-colliding
//! pieces.
//!
//! Phases: `Spawning` → `AwaitingInput` → `Resolving` → (`Locking` →
//! `Spawning`) → ... → `GameOver`. Between calls to [`Game::apply`] the game is
//! always in `AwaitingInput` or `GameOver`.

use tracing::debug;

use crate::core::{composite, try_place, Grid, GridError, PieceCatalog, Placement, PlayField, SimpleRng};
use crate::types::{GameAction, PieceKind, Rotation, LINE_SCORE};

/// Game lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Spawning,
    AwaitingInput,
    Resolving,
    Locking,
    GameOver,
}

/// Falling piece: catalog entry plus top-left offset in the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub top: i32,
    pub left: i32,
}

impl ActivePiece {
    pub fn new(kind: PieceKind, top: i32, left: i32) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            top,
            left,
        }
    }
}

/// What an applied action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The piece moved or rotated
    Moved,
    /// The move collided and was rolled back
    Blocked,
    /// The piece was locked; a new piece was spawned unless `game_over`
    Locked { lines_cleared: u32, game_over: bool },
    Quit,
    /// The game had already ended; nothing changed
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    catalog: PieceCatalog,
    field: PlayField,
    active: ActivePiece,
    rng: SimpleRng,
    phase: Phase,
    score: u32,
    lines: u32,
}

impl Game {
    /// New game on the standard field with a seeded RNG
    pub fn new(seed: u32) -> Result<Self, GridError> {
        Self::with_field(PlayField::initial(), SimpleRng::new(seed))
    }

    /// New game on an arbitrary field.
    ///
    /// The opening piece starts on the top row one column in from the left
    /// wall; every later piece spawns centered.
    pub fn with_field(field: PlayField, rng: SimpleRng) -> Result<Self, GridError> {
        let mut game = Self {
            catalog: PieceCatalog::standard(),
            field,
            active: ActivePiece::new(PieceKind::O, 0, 0),
            rng,
            phase: Phase::Spawning,
            score: 0,
            lines: 0,
        };
        let kind = game.rng.next_piece();
        let left = game.field.wall() as i32 + 1;
        game.spawn_at(kind, 0, left)?;
        Ok(game)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn field(&self) -> &PlayField {
        &self.field
    }

    /// Standard spawn offset: top row, horizontally centered
    pub fn spawn_offset(&self, kind: PieceKind) -> (i32, i32) {
        let width = self.catalog.get(kind, Rotation::North).cols();
        (0, (self.field.cols() / 2) as i32 - (width / 2) as i32)
    }

    /// Spawn `kind` at the standard offset. Returns false on game over.
    pub fn spawn(&mut self, kind: PieceKind) -> Result<bool, GridError> {
        let (top, left) = self.spawn_offset(kind);
        self.spawn_at(kind, top, left)
    }

    /// Spawn `kind` at an explicit offset. Returns false on game over.
    pub fn spawn_at(&mut self, kind: PieceKind, top: i32, left: i32) -> Result<bool, GridError> {
        self.phase = Phase::Spawning;
        self.active = ActivePiece::new(kind, top, left);

        if self.collides(self.active)? {
            debug!(kind = kind.as_str(), top, left, "spawn blocked, game over");
            self.phase = Phase::GameOver;
            return Ok(false);
        }

        debug!(kind = kind.as_str(), top, left, "spawned piece");
        self.phase = Phase::AwaitingInput;
        Ok(true)
    }

    fn spawn_random(&mut self) -> Result<bool, GridError> {
        let kind = self.rng.next_piece();
        self.spawn(kind)
    }

    fn place(&self, piece: ActivePiece) -> Result<Placement, GridError> {
        let shape = self.catalog.get(piece.kind, piece.rotation);
        try_place(self.field.grid(), shape, piece.top, piece.left)
    }

    fn collides(&self, piece: ActivePiece) -> Result<bool, GridError> {
        Ok(self.place(piece)?.collides)
    }

    /// Apply one action
    pub fn apply(&mut self, action: GameAction) -> Result<Outcome, GridError> {
        if self.phase == Phase::GameOver {
            return Ok(Outcome::GameOver);
        }

        self.phase = Phase::Resolving;
        let prior = self.active;
        let mut candidate = prior;
        match action {
            GameAction::MoveLeft => candidate.left -= 1,
            GameAction::MoveRight => candidate.left += 1,
            GameAction::SoftDrop => candidate.top += 1,
            GameAction::RotateCw => candidate.rotation = prior.rotation.rotate_cw(),
            GameAction::HardDrop => candidate = self.drop_target(prior)?,
            GameAction::Quit => {
                self.phase = Phase::AwaitingInput;
                return Ok(Outcome::Quit);
            }
        }

        let mut lock_pending = action == GameAction::HardDrop;
        let moved = if self.collides(candidate)? {
            // Moves and rotations roll back; a blocked drop lands where it is.
            if action == GameAction::SoftDrop {
                lock_pending = true;
            }
            false
        } else {
            self.active = candidate;
            candidate != prior
        };

        if lock_pending {
            return self.lock();
        }

        self.phase = Phase::AwaitingInput;
        Ok(if moved { Outcome::Moved } else { Outcome::Blocked })
    }

    /// Lowest non-colliding position straight below `from`
    fn drop_target(&self, from: ActivePiece) -> Result<ActivePiece, GridError> {
        let mut target = from;
        loop {
            let mut below = target;
            below.top += 1;
            if self.collides(below)? {
                return Ok(target);
            }
            target = below;
        }
    }

    fn lock(&mut self) -> Result<Outcome, GridError> {
        self.phase = Phase::Locking;
        let piece = self.active;
        let shape = self.catalog.get(piece.kind, piece.rotation);

        let overlay = match self.place(piece)? {
            Placement {
                overlay: Some(overlay),
                collides: false,
            } => overlay,
            _ => {
                return Err(GridError::OutOfRange {
                    top: piece.top,
                    left: piece.left,
                    bottom: piece.top.saturating_add(shape.rows() as i32),
                    right: piece.left.saturating_add(shape.cols() as i32),
                    rows: self.field.rows(),
                    cols: self.field.cols(),
                })
            }
        };

        let cleared = self.field.commit(&overlay, piece.top, piece.left)?;
        self.lines += cleared;
        self.score += LINE_SCORE * cleared;
        debug!(
            kind = piece.kind.as_str(),
            rotation = piece.rotation.as_str(),
            top = piece.top,
            left = piece.left,
            cleared,
            score = self.score,
            "piece locked"
        );

        let spawned = self.spawn_random()?;
        Ok(Outcome::Locked {
            lines_cleared: cleared,
            game_over: !spawned,
        })
    }

    /// Field with the active piece drawn in; just the field once the game is over
    pub fn screen(&self) -> Result<Grid, GridError> {
        if self.phase == Phase::GameOver {
            return Ok(self.field.grid().clone());
        }
        match self.place(self.active)? {
            Placement {
                overlay: Some(overlay),
                collides: false,
            } => composite(self.field.grid(), &overlay, self.active.top, self.active.left),
            _ => Ok(self.field.grid().clone()),
        }
    }
}
