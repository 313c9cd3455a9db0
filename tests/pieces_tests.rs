//! Pieces tests - catalog shapes and rotation on the field

use tui_blockfall::core::PieceCatalog;
use tui_blockfall::engine::{Game, Outcome};
use tui_blockfall::types::{GameAction, PieceKind, Rotation};

fn occupied(catalog: &PieceCatalog, kind: PieceKind, rotation: Rotation) -> Vec<(usize, usize)> {
    let grid = catalog.get(kind, rotation);
    let mut cells = Vec::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if grid.get(row, col) == Some(1) {
                cells.push((row, col));
            }
        }
    }
    cells
}

// ============== Shape Tests ==============

#[test]
fn test_i_piece_shapes() {
    let catalog = PieceCatalog::standard();
    assert_eq!(
        occupied(&catalog, PieceKind::I, Rotation::North),
        [(1, 0), (1, 1), (1, 2), (1, 3)]
    );
    assert_eq!(
        occupied(&catalog, PieceKind::I, Rotation::East),
        [(0, 1), (1, 1), (2, 1), (3, 1)]
    );
}

#[test]
fn test_o_piece_shapes() {
    let catalog = PieceCatalog::standard();
    let north = occupied(&catalog, PieceKind::O, Rotation::North);
    assert_eq!(north, [(0, 0), (0, 1), (1, 0), (1, 1)]);
    for rotation in [Rotation::East, Rotation::South, Rotation::West] {
        assert_eq!(occupied(&catalog, PieceKind::O, rotation), north);
    }
}

#[test]
fn test_t_piece_shapes() {
    let catalog = PieceCatalog::standard();
    assert_eq!(
        occupied(&catalog, PieceKind::T, Rotation::North),
        [(0, 1), (1, 0), (1, 1), (1, 2)]
    );
    assert_eq!(
        occupied(&catalog, PieceKind::T, Rotation::South),
        [(1, 0), (1, 1), (1, 2), (2, 1)]
    );
}

// ============== Rotation Tests ==============

#[test]
fn test_four_rotations_return_to_north() {
    let mut game = Game::new(1).unwrap();
    assert!(game.spawn_at(PieceKind::T, 3, 6).unwrap());
    for _ in 0..4 {
        assert_eq!(game.apply(GameAction::RotateCw).unwrap(), Outcome::Moved);
    }
    assert_eq!(game.active().rotation, Rotation::North);
}

#[test]
fn test_rotation_into_floor_rolls_back() {
    let mut game = Game::new(1).unwrap();
    // Horizontal I resting on row 8; standing it up would reach the floor row.
    assert!(game.spawn_at(PieceKind::I, 7, 5).unwrap());
    assert_eq!(game.apply(GameAction::RotateCw).unwrap(), Outcome::Blocked);
    assert_eq!(game.active().rotation, Rotation::North);
    assert_eq!(game.active().top, 7);
}

#[test]
fn test_move_into_wall_rolls_back() {
    let mut game = Game::new(1).unwrap();
    assert!(game.spawn_at(PieceKind::O, 0, 3).unwrap());
    assert_eq!(game.apply(GameAction::MoveLeft).unwrap(), Outcome::Blocked);
    assert_eq!(game.active().left, 3);
}
