use tui_blockfall::engine::{Frame, Game, GAME_OVER_MESSAGE};
use tui_blockfall::term::{GameView, UNKNOWN_GLYPH};
use tui_blockfall::types::PieceKind;

#[test]
fn term_view_shows_active_piece_inside_walls() {
    let mut game = Game::new(1).unwrap();
    assert!(game.spawn_at(PieceKind::O, 0, 7).unwrap());
    let screen = game.screen().unwrap();

    let frame = Frame {
        screen: &screen,
        wall: game.field().wall(),
        score: game.score(),
        lines: game.lines(),
        message: None,
    };
    let lines = GameView::new().render(&frame).to_plain_lines();

    // Field column 7 is visible column 5 (the rim starts at column 2).
    let expected = format!("■ {}■ ■ {}■ ", "□ ".repeat(4), "□ ".repeat(4));
    assert_eq!(lines[0], expected);
    assert_eq!(lines[1], expected);
    assert_eq!(lines[2], format!("■ {}■ ", "□ ".repeat(10)));
    assert_eq!(lines[lines.len() - 2], "Score: 0");
    assert_eq!(lines[lines.len() - 1], "Lines: 0");
}

#[test]
fn term_view_game_over_message_is_last_line() {
    let game = Game::new(1).unwrap();
    let screen = game.screen().unwrap();
    let frame = Frame {
        screen: &screen,
        wall: 3,
        score: 40,
        lines: 4,
        message: Some(GAME_OVER_MESSAGE),
    };
    let lines = GameView::new().render(&frame).to_plain_lines();
    assert_eq!(lines[lines.len() - 3], "Score: 40");
    assert_eq!(lines[lines.len() - 2], "Lines: 4");
    assert_eq!(lines[lines.len() - 1], "Game Over!");
}

#[test]
fn term_view_never_shows_collision_values_for_valid_games() {
    let game = Game::new(99).unwrap();
    let screen = game.screen().unwrap();
    let frame = Frame {
        screen: &screen,
        wall: 3,
        score: 0,
        lines: 0,
        message: None,
    };
    let view = GameView::new().render(&frame);
    assert!(view.rows.iter().flatten().all(|g| *g != UNKNOWN_GLYPH));
}
