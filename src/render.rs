//! Board rendering for the terminal.

use connect_four_core::{Board, Cell, Coord, WinLine, column_footer};
use crossterm::style::{StyledContent, Stylize};

/// Renders boards, optionally with ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRenderer {
    color: bool,
}

impl BoardRenderer {
    /// Creates a renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Plain-text renderer.
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Renders `board`, highlighting the cells of `line` when colors are on.
    ///
    /// Without colors the output is exactly [`Board::render`].
    pub fn render(&self, board: &Board, line: Option<&WinLine>) -> String {
        if !self.color {
            return board.render();
        }

        let mut out = String::new();
        for (r, row) in board.rows().iter().enumerate() {
            out.push('|');
            for (c, &cell) in row.iter().enumerate() {
                let coord = Coord::new(r + 1, c + 1);
                let winning = line.is_some_and(|l| l.cells.contains(&coord));
                out.push_str(&format!(" {} |", styled(cell, winning)));
            }
            out.push('\n');
        }
        out.push_str(&format!("{}\n", column_footer().dark_grey()));
        out
    }

    /// Marker for a cell, colored like it is on the board.
    pub fn marker(&self, cell: Cell) -> String {
        if self.color {
            styled(cell, false).to_string()
        } else {
            cell.marker().to_string()
        }
    }
}

impl Default for BoardRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

fn styled(cell: Cell, winning: bool) -> StyledContent<char> {
    let content = match cell {
        Cell::Empty => cell.marker().dark_grey(),
        Cell::PlayerOne => cell.marker().red().bold(),
        Cell::PlayerTwo => cell.marker().yellow().bold(),
    };
    if winning { content.reverse() } else { content }
}
