//! Behavioral properties of the Connect Four board.

use connect_four_core::{Board, COLS, Cell, Coord, Player, ROWS, WinKind};

/// Builds a board by dropping `(column, player)` pairs in order.
fn board_from(drops: &[(usize, Player)]) -> Board {
    let mut board = Board::new();
    for &(column, player) in drops {
        assert!(
            board.apply_move(column, player),
            "drop into column {column} should succeed"
        );
    }
    board
}

/// Fills each column bottom-up with the given players (index 0 = bottom).
fn board_from_columns(columns: &[&[Player]]) -> Board {
    let mut board = Board::new();
    for (i, stack) in columns.iter().enumerate() {
        for &player in stack.iter() {
            assert!(board.apply_move(i + 1, player));
        }
    }
    board
}

fn coords(cells: &[(usize, usize)]) -> Vec<Coord> {
    cells.iter().copied().map(Coord::from).collect()
}

#[test]
fn test_column_fills_bottom_to_top_then_rejects() {
    for column in 1..=COLS {
        for player in [Player::One, Player::Two] {
            let mut board = Board::new();
            for expected_row in (1..=ROWS).rev() {
                assert!(board.apply_move(column, player));
                assert_eq!(board.get(expected_row, column), Some(player.cell()));
            }
            let full = board;
            assert!(!board.apply_move(column, player));
            assert_eq!(board, full, "rejected move must not mutate the board");
        }
    }
}

#[test]
fn test_out_of_range_columns_never_valid() {
    let mut board = Board::new();
    for state in 0..3 {
        for column in [0, COLS + 1, COLS + 10, usize::MAX] {
            assert!(!board.is_valid_move(column), "state {state}, column {column}");
        }
        board.apply_move(state + 1, Player::One);
    }
}

#[test]
fn test_reset_yields_clean_board() {
    let mut board = board_from(&[
        (1, Player::One),
        (2, Player::One),
        (3, Player::One),
        (4, Player::One),
    ]);
    assert!(board.check_win(Player::One).won());

    board.reset();
    assert!(!board.is_full());
    assert!(!board.check_win(Player::One).won());
    assert!(!board.check_win(Player::Two).won());
    assert_eq!(board, Board::new());
}

#[test]
fn test_reset_is_idempotent_and_render_stable() {
    let mut once = board_from(&[(4, Player::Two), (4, Player::One)]);
    once.reset();
    let mut twice = once;
    twice.reset();
    twice.reset();
    assert_eq!(once, twice);

    let first = twice.render();
    let second = twice.render();
    assert_eq!(first, second);
    assert_eq!(first, Board::new().render());
}

#[test]
fn test_horizontal_win_on_bottom_row() {
    // Player two drops filler tokens on top so every player one token lands on row 6.
    let board = board_from(&[
        (1, Player::One),
        (1, Player::Two),
        (2, Player::One),
        (2, Player::Two),
        (3, Player::One),
        (3, Player::Two),
        (4, Player::One),
    ]);
    let result = board.check_win(Player::One);
    assert!(result.won());
    assert_eq!(result.kind(), Some(WinKind::Horizontal));
    assert_eq!(result.kind().unwrap().to_string(), "horizontal");
    assert_eq!(result.cells(), coords(&[(6, 1), (6, 2), (6, 3), (6, 4)]));
    assert!(!board.check_win(Player::Two).won());
}

#[test]
fn test_full_board_without_line_is_draw() {
    // Row pattern from the top: X X O O X X O, then O O X X O O X, alternating.
    // Horizontal runs stop at two, columns alternate, and no diagonal window
    // of four sees the alternating column pattern a line would need.
    let x = Player::One;
    let o = Player::Two;
    let a: &[Player] = &[o, x, o, x, o, x];
    let b: &[Player] = &[x, o, x, o, x, o];
    let board = board_from_columns(&[a, a, b, b, a, a, b]);

    assert_eq!(board.get(1, 1), Some(Cell::PlayerOne));
    assert_eq!(board.get(1, 3), Some(Cell::PlayerTwo));
    assert!(board.is_full());
    assert!(!board.check_win(Player::One).won());
    assert!(!board.check_win(Player::Two).won());
    assert_eq!(board.count(Player::One), 21);
    assert_eq!(board.count(Player::Two), 21);
    for column in 1..=COLS {
        assert!(!board.is_valid_move(column));
    }
}

#[test]
fn test_diagonal_down_right() {
    // Player one tops column 1 at row 1, column 2 at row 2, and so on.
    let x = Player::One;
    let o = Player::Two;
    let board = board_from_columns(&[
        &[o, o, o, o, o, x],
        &[o, o, o, o, x],
        &[o, o, o, x],
        &[o, o, x],
    ]);

    let result = board.check_win(Player::One);
    assert_eq!(result.kind(), Some(WinKind::DiagonalDownRight));
    assert_eq!(result.kind().unwrap().to_string(), "diagonal (down-right)");
    assert_eq!(result.cells(), coords(&[(1, 1), (2, 2), (3, 3), (4, 4)]));
}

#[test]
fn test_diagonal_down_left() {
    let x = Player::One;
    let o = Player::Two;
    let board = board_from_columns(&[
        &[o, o, x],
        &[o, o, o, x],
        &[o, o, o, o, x],
        &[o, o, o, o, o, x],
    ]);

    let result = board.check_win(Player::One);
    assert_eq!(result.kind(), Some(WinKind::DiagonalDownLeft));
    assert_eq!(result.kind().unwrap().to_string(), "diagonal (down-left)");
    assert_eq!(result.cells(), coords(&[(1, 4), (2, 3), (3, 2), (4, 1)]));
}

#[test]
fn test_vertical_beats_diagonal() {
    // Column 4 holds a vertical four for player one, and the same tokens
    // also sit on a down-left diagonal.
    let x = Player::One;
    let o = Player::Two;
    let board = board_from_columns(&[
        &[x],
        &[o, x],
        &[o, o, x],
        &[x, x, x, x],
    ]);
    let result = board.check_win(Player::One);
    assert_eq!(result.kind(), Some(WinKind::Vertical));
    assert_eq!(result.cells(), coords(&[(3, 4), (4, 4), (5, 4), (6, 4)]));
}

#[test]
fn test_down_right_beats_down_left() {
    // Two diagonals cross at the bottom of column 4 in a V shape.
    let x = Player::One;
    let o = Player::Two;
    let board = board_from_columns(&[
        &[o, o, o, x],
        &[o, o, x],
        &[o, x],
        &[x],
        &[o, x],
        &[o, o, x],
        &[o, o, o, x],
    ]);
    let result = board.check_win(Player::One);
    assert_eq!(result.kind(), Some(WinKind::DiagonalDownRight));
    assert_eq!(result.cells(), coords(&[(3, 1), (4, 2), (5, 3), (6, 4)]));
}

#[test]
fn test_column_contiguity_after_mixed_drops() {
    let board = board_from(&[(2, Player::One), (2, Player::Two), (5, Player::One)]);
    for column in 1..=COLS {
        let mut seen_empty = false;
        for row in (1..=ROWS).rev() {
            let cell = board.get(row, column).unwrap();
            if cell == Cell::Empty {
                seen_empty = true;
            } else {
                assert!(!seen_empty, "floating token at ({row}, {column})");
            }
        }
    }
}
