//! GameView: maps an engine `Frame` into rows of glyphs.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The visible window is the playable area plus a one-cell rim of wall on the
//! left, right and bottom, so the player can see where the walls are.

use crate::engine::{Exit, Frame, GAME_OVER_MESSAGE};
use crate::glyph::{glyph_for, Glyph};

/// One rendered frame: board rows, then status lines
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Screen {
    pub rows: Vec<Vec<Glyph>>,
    pub status: Vec<String>,
}

impl Screen {
    /// Frame as plain text, without colors
    pub fn to_plain_lines(&self) -> Vec<String> {
        let board = self
            .rows
            .iter()
            .map(|row| row.iter().map(|g| g.text).collect::<String>());
        board.chain(self.status.iter().cloned()).collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render one frame.
    pub fn render(&self, frame: &Frame<'_>) -> Screen {
        let grid = frame.screen;
        let (rows, cols) = grid.shape();
        let rim = frame.wall.saturating_sub(1);

        // Rows 0 ..= rows - wall, columns wall - 1 .. cols - wall + 1.
        let last_row = (rows + 1).saturating_sub(frame.wall).min(rows);
        let last_col = (cols + 1).saturating_sub(frame.wall).min(cols);

        let board = (0..last_row)
            .map(|y| {
                (rim..last_col)
                    .map(|x| glyph_for(grid.get(y, x).unwrap_or_default()))
                    .collect()
            })
            .collect();

        let mut status = tally(frame.score, frame.lines);
        if let Some(message) = frame.message {
            status.push(message.to_string());
        }

        Screen {
            rows: board,
            status,
        }
    }

    /// Lines printed on the restored terminal once the session is over.
    ///
    /// The alternate screen is gone by then, so a game over is repeated here.
    pub fn farewell(&self, exit: Exit, score: u32, lines: u32) -> Vec<String> {
        let mut out = Vec::with_capacity(3);
        if exit == Exit::GameOver {
            out.push(GAME_OVER_MESSAGE.to_string());
        }
        out.extend(tally(score, lines));
        out
    }
}

fn tally(score: u32, lines: u32) -> Vec<String> {
    vec![format!("Score: {score}"), format!("Lines: {lines}")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grid, PlayField};
    use crate::glyph::UNKNOWN_GLYPH;

    fn frame<'a>(grid: &'a Grid, message: Option<&'a str>) -> Frame<'a> {
        Frame {
            screen: grid,
            wall: 3,
            score: 30,
            lines: 3,
            message,
        }
    }

    #[test]
    fn renders_playable_area_with_wall_rim() {
        let field = PlayField::initial();
        let screen = GameView::new().render(&frame(field.grid(), None));

        // 10 playable rows + 1 wall row; 10 playable columns + 2 wall columns.
        assert_eq!(screen.rows.len(), 11);
        assert!(screen.rows.iter().all(|r| r.len() == 12));

        let lines = screen.to_plain_lines();
        assert_eq!(lines[0], format!("■ {}■ ", "□ ".repeat(10)));
        assert_eq!(lines[10], "■ ".repeat(12));
        assert_eq!(lines[11], "Score: 30");
        assert_eq!(lines[12], "Lines: 3");
        assert_eq!(lines.len(), 13);
    }

    #[test]
    fn message_line_follows_score() {
        let field = PlayField::initial();
        let screen = GameView::new().render(&frame(field.grid(), Some("Game Over!")));
        assert_eq!(screen.status, ["Score: 30", "Lines: 3", "Game Over!"]);
    }

    #[test]
    fn farewell_repeats_game_over() {
        let view = GameView::new();
        assert_eq!(
            view.farewell(Exit::GameOver, 50, 5),
            ["Game Over!", "Score: 50", "Lines: 5"]
        );
        assert_eq!(view.farewell(Exit::Quit, 10, 1), ["Score: 10", "Lines: 1"]);
        assert_eq!(view.farewell(Exit::InputClosed, 0, 0), ["Score: 0", "Lines: 0"]);
    }

    #[test]
    fn collision_values_render_as_marker() {
        let mut grid = PlayField::initial().grid().clone();
        grid.set(0, 5, 2);
        let screen = GameView::new().render(&frame(&grid, None));
        // The rim starts at column 2, so column 5 is visible index 3.
        assert_eq!(screen.rows[0][3], UNKNOWN_GLYPH);
    }

    #[test]
    fn zero_wall_renders_whole_grid() {
        let grid = Grid::zeros(2, 3);
        let f = Frame {
            screen: &grid,
            wall: 0,
            score: 0,
            lines: 0,
            message: None,
        };
        let screen = GameView::new().render(&f);
        assert_eq!(screen.rows.len(), 2);
        assert_eq!(screen.rows[0].len(), 3);
    }
}
