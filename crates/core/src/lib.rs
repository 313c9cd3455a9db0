//! Core module - the grid engine, pure and deterministic
//!
//! This crate holds the matrix substrate and the placement rules built on it.
//! It has no dependencies on terminals, threads or I/O.
//!
//! # Module Structure
//!
//! - [`grid`]: integer matrix with bounds-checked clip/paste, add, sum, scale
//!   and threshold queries, plus a per-thread allocation audit
//! - [`pieces`]: the 7 x 4 catalog of piece shape grids
//! - [`field`]: the walled play field and its playable region
//! - [`placement`]: overlay/collision test and composite building
//! - [`lines`]: full-row detection and removal
//! - [`rng`]: seeded uniform piece selection
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{try_place, PieceCatalog, PlayField};
//! use tui_blockfall_core::types::{PieceKind, Rotation};
//!
//! let field = PlayField::initial();
//! let catalog = PieceCatalog::standard();
//! let piece = catalog.get(PieceKind::O, Rotation::North);
//!
//! // Free cell in the middle of the field.
//! assert!(!try_place(field.grid(), piece, 0, 5).unwrap().collides);
//! // Overlapping the left wall.
//! assert!(try_place(field.grid(), piece, 0, 2).unwrap().collides);
//! ```

pub mod field;
pub mod grid;
pub mod lines;
pub mod pieces;
pub mod placement;
pub mod rng;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use field::PlayField;
pub use grid::{audit, Grid, GridAudit, GridError};
pub use lines::{clear_full_lines, is_row_full};
pub use pieces::PieceCatalog;
pub use placement::{composite, try_place, Placement};
pub use rng::SimpleRng;
