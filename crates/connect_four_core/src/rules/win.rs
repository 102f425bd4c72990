//! Win detection logic for Connect Four.

use super::super::{Board, COLS, CONNECT, Coord, Player, ROWS};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Orientation of a winning line.
///
/// Variants are declared in scan order; [`check_win`] reports the first
/// match in this order when several lines exist at once.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum WinKind {
    /// Four in one row.
    #[strum(to_string = "horizontal")]
    Horizontal,
    /// Four in one column.
    #[strum(to_string = "vertical")]
    Vertical,
    /// Four along `(row + k, col + k)`.
    #[strum(to_string = "diagonal (down-right)")]
    DiagonalDownRight,
    /// Four along `(row + k, col - k)`.
    #[strum(to_string = "diagonal (down-left)")]
    DiagonalDownLeft,
}

impl WinKind {
    /// Row and column step between consecutive cells of the line.
    pub fn direction(self) -> (isize, isize) {
        match self {
            WinKind::Horizontal => (0, 1),
            WinKind::Vertical => (1, 0),
            WinKind::DiagonalDownRight => (1, 1),
            WinKind::DiagonalDownLeft => (1, -1),
        }
    }
}

/// Four same-player cells in an unbroken line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    /// Orientation of the line.
    pub kind: WinKind,
    /// The cells, from the scan's start cell along the direction.
    pub cells: [Coord; CONNECT],
}

/// Outcome of a win check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WinResult {
    line: Option<WinLine>,
}

impl WinResult {
    /// A negative result.
    pub fn none() -> Self {
        Self { line: None }
    }

    /// Whether a line was found.
    pub fn won(&self) -> bool {
        self.line.is_some()
    }

    /// The four winning coordinates, or an empty slice.
    pub fn cells(&self) -> &[Coord] {
        match &self.line {
            Some(line) => &line.cells,
            None => &[],
        }
    }

    /// Orientation of the line, if any.
    pub fn kind(&self) -> Option<WinKind> {
        self.line.map(|line| line.kind)
    }

    /// The full line, if any.
    pub fn line(&self) -> Option<WinLine> {
        self.line
    }
}

impl From<WinLine> for WinResult {
    fn from(line: WinLine) -> Self {
        Self { line: Some(line) }
    }
}

/// Scans the whole board for four of `player`'s tokens in a row.
///
/// Directions are tried in [`WinKind`] order; within a direction start cells
/// are visited top row first, left to right. The first line found is returned.
#[instrument(skip(board))]
pub fn check_win(board: &Board, player: Player) -> WinResult {
    let target = player.cell();

    for kind in WinKind::iter() {
        let (dr, dc) = kind.direction();
        for row in 0..ROWS {
            for col in 0..COLS {
                let Some(cells) = line_from(row, col, dr, dc) else {
                    continue;
                };
                if cells
                    .iter()
                    .all(|&(r, c)| board.cell_at(r, c) == target)
                {
                    return WinLine {
                        kind,
                        cells: cells.map(|(r, c)| Coord::from_zero_based(r, c)),
                    }
                    .into();
                }
            }
        }
    }

    WinResult::none()
}

/// Zero-based cells of the line starting at `(row, col)`, if it fits on the board.
fn line_from(row: usize, col: usize, dr: isize, dc: isize) -> Option<[(usize, usize); CONNECT]> {
    let mut cells = [(0, 0); CONNECT];
    for (k, cell) in cells.iter_mut().enumerate() {
        let r = row.checked_add_signed(dr * k as isize)?;
        let c = col.checked_add_signed(dc * k as isize)?;
        if r >= ROWS || c >= COLS {
            return None;
        }
        *cell = (r, c);
    }
    Some(cells)
}
