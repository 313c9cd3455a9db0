//! Pieces module - the fixed shape catalog
//!
//! Every piece kind has four pre-built rotation variants. Rotating a piece
//! selects another variant; no shape grid is ever mutated.

use crate::grid::Grid;
use crate::types::{PieceKind, Rotation, MAX_BLK_DEGREES, MAX_BLK_TYPES};

type Shape = &'static [i32];

// Row-major 0/1 cells, indexed [kind][rotation].
const SHAPES: [[Shape; MAX_BLK_DEGREES]; MAX_BLK_TYPES] = [
    // O
    [&[1, 1, 1, 1], &[1, 1, 1, 1], &[1, 1, 1, 1], &[1, 1, 1, 1]],
    // T
    [
        &[0, 1, 0, 1, 1, 1, 0, 0, 0],
        &[0, 1, 0, 0, 1, 1, 0, 1, 0],
        &[0, 0, 0, 1, 1, 1, 0, 1, 0],
        &[0, 1, 0, 1, 1, 0, 0, 1, 0],
    ],
    // J
    [
        &[1, 0, 0, 1, 1, 1, 0, 0, 0],
        &[0, 1, 1, 0, 1, 0, 0, 1, 0],
        &[0, 0, 0, 1, 1, 1, 0, 0, 1],
        &[0, 1, 0, 0, 1, 0, 1, 1, 0],
    ],
    // L
    [
        &[0, 0, 1, 1, 1, 1, 0, 0, 0],
        &[0, 1, 0, 0, 1, 0, 0, 1, 1],
        &[0, 0, 0, 1, 1, 1, 1, 0, 0],
        &[1, 1, 0, 0, 1, 0, 0, 1, 0],
    ],
    // Z
    [
        &[0, 1, 0, 1, 1, 0, 1, 0, 0],
        &[1, 1, 0, 0, 1, 1, 0, 0, 0],
        &[0, 1, 0, 1, 1, 0, 1, 0, 0],
        &[1, 1, 0, 0, 1, 1, 0, 0, 0],
    ],
    // S
    [
        &[0, 1, 0, 0, 1, 1, 0, 0, 1],
        &[0, 0, 0, 0, 1, 1, 1, 1, 0],
        &[0, 1, 0, 0, 1, 1, 0, 0, 1],
        &[0, 0, 0, 0, 1, 1, 1, 1, 0],
    ],
    // I
    [
        &[0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0],
        &[0, 0, 0, 0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0],
    ],
];

/// All piece shapes, one grid per (kind, rotation)
#[derive(Debug, Clone)]
pub struct PieceCatalog {
    shapes: Vec<Grid>,
}

impl PieceCatalog {
    /// Build the standard seven-piece catalog
    pub fn standard() -> Self {
        let mut shapes = Vec::with_capacity(MAX_BLK_TYPES * MAX_BLK_DEGREES);
        for kind in PieceKind::ALL {
            let size = kind.size();
            for cells in SHAPES[kind.index()] {
                debug_assert_eq!(cells.len(), size * size);
                let mut grid = Grid::zeros(size, size);
                grid.cells_mut().copy_from_slice(cells);
                shapes.push(grid);
            }
        }
        Self { shapes }
    }

    /// Shape grid for a kind and rotation
    pub fn get(&self, kind: PieceKind, rotation: Rotation) -> &Grid {
        &self.shapes[kind.index() * MAX_BLK_DEGREES + rotation.index()]
    }
}

impl Default for PieceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[test]
    fn shape_sizes() {
        let catalog = PieceCatalog::standard();
        for kind in PieceKind::ALL {
            for rot in ROTATIONS {
                let g = catalog.get(kind, rot);
                assert_eq!(g.shape(), (kind.size(), kind.size()), "{kind:?} {rot:?}");
            }
        }
        assert_eq!(catalog.get(PieceKind::O, Rotation::North).shape(), (2, 2));
        assert_eq!(catalog.get(PieceKind::I, Rotation::West).shape(), (4, 4));
    }

    #[test]
    fn every_piece_has_four_cells_of_one() {
        let catalog = PieceCatalog::standard();
        for kind in PieceKind::ALL {
            for rot in ROTATIONS {
                let g = catalog.get(kind, rot);
                assert_eq!(g.sum(), 4, "{kind:?} {rot:?}");
                assert!(!g.any_greater_than(1));
            }
        }
    }

    #[test]
    fn rotation_selects_distinct_variant() {
        let catalog = PieceCatalog::standard();
        let north = catalog.get(PieceKind::I, Rotation::North);
        let east = catalog.get(PieceKind::I, Rotation::East);
        assert_ne!(north, east);
        assert_eq!(north, catalog.get(PieceKind::I, Rotation::South));
        assert_eq!(east.get(0, 1), Some(1));
        assert_eq!(east.get(3, 1), Some(1));
    }

    #[test]
    fn t_piece_spawn_shape() {
        let catalog = PieceCatalog::standard();
        let t = catalog.get(PieceKind::T, Rotation::North);
        assert_eq!(t.row(0), Some(&[0, 1, 0][..]));
        assert_eq!(t.row(1), Some(&[1, 1, 1][..]));
        assert_eq!(t.row(2), Some(&[0, 0, 0][..]));
    }
}
