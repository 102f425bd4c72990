//! The Connect Four grid.

use super::rules::{self, WinResult};
use super::types::{COLS, Cell, Player, ROWS};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 6x7 Connect Four board.
///
/// Stored zero-based with row 0 at the top. The public API speaks 1-based
/// columns (and rows, where they appear) and never panics on out-of-range
/// input: invalid moves are reported as `false` or `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// Gets the cell at a 1-based `(row, column)`; row 1 is the top.
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        let r = row.checked_sub(1)?;
        let c = column.checked_sub(1)?;
        self.cells.get(r)?.get(c).copied()
    }

    /// Zero-based access for the rule functions. Callers guarantee bounds.
    pub(crate) fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Overwrites a zero-based cell, bypassing gravity.
    #[cfg(test)]
    pub(crate) fn with_cell(mut self, row: usize, col: usize, cell: Cell) -> Self {
        self.cells[row][col] = cell;
        self
    }

    /// Zero-based index of a 1-based column, if it names a column.
    fn column_index(column: usize) -> Option<usize> {
        (1..=COLS).contains(&column).then(|| column - 1)
    }

    /// Whether a token can be dropped into `column` (1-7).
    pub fn is_valid_move(&self, column: usize) -> bool {
        Self::column_index(column).is_some_and(|c| self.cells[0][c].is_empty())
    }

    /// The 1-based row a token dropped into `column` would land on.
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        let c = Self::column_index(column)?;
        (0..ROWS)
            .rev()
            .find(|&r| self.cells[r][c].is_empty())
            .map(|r| r + 1)
    }

    /// Drops `player`'s token into `column` (1-7).
    ///
    /// The token lands on the lowest empty cell. Returns `false` and leaves
    /// the board untouched when the column is out of range or full.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, column: usize, player: Player) -> bool {
        let Some(row) = self.landing_row(column) else {
            debug!("Move rejected");
            return false;
        };
        self.cells[row - 1][column - 1] = player.cell();
        debug!(row, "Token placed");
        true
    }

    /// Checks if no column accepts a move.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks for four of `player`'s tokens in a row.
    pub fn check_win(&self, player: Player) -> WinResult {
        rules::check_win(self, player)
    }

    /// Number of tokens `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == player.cell())
            .count()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Formats the board as a fixed-width grid with a column footer.
    ///
    /// ```text
    /// | . | . | . | . | . | . | . |
    /// ...
    /// | X | O | . | . | . | . | . |
    ///   1   2   3   4   5   6   7
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in &self.cells {
            out.push('|');
            for cell in row {
                out.push(' ');
                out.push(cell.marker());
                out.push_str(" |");
            }
            out.push('\n');
        }
        out.push_str(&column_footer());
        out.push('\n');
        out
    }
}

/// Column numbers aligned under the cell markers.
pub fn column_footer() -> String {
    (1..=COLS)
        .map(|c| format!("  {c} "))
        .collect::<String>()
        .trim_end()
        .to_string()
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
