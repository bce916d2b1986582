use super::board::Board;
use super::types::{CellState, Position, WinningLine};

pub(crate) const LINE_LEN: usize = 4;

// (dcol, drow): horizontal, vertical, diagonal down-right, diagonal up-right.
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

pub(crate) fn window_fits(board: &Board, col: usize, row: usize, dcol: isize, drow: isize) -> bool {
    let end_col = col as isize + dcol * (LINE_LEN as isize - 1);
    let end_row = row as isize + drow * (LINE_LEN as isize - 1);
    end_col >= 0
        && end_row >= 0
        && end_col < board.columns() as isize
        && end_row < board.rows() as isize
}

/// Counts `player`'s discs in the 4-cell window starting at (col, row) along
/// (dcol, drow). Returns None as soon as the window holds a disc of the other
/// player — a blocked window can never become a line.
pub(crate) fn count_discs(
    board: &Board,
    col: usize,
    row: usize,
    dcol: isize,
    drow: isize,
    player: CellState,
) -> Option<usize> {
    let mut count = 0;
    for i in 0..LINE_LEN as isize {
        let c = (col as isize + dcol * i) as usize;
        let r = (row as isize + drow * i) as usize;
        let cell = board.cell(c, r);
        if cell == player {
            count += 1;
        } else if cell != CellState::Empty {
            return None;
        }
    }
    Some(count)
}

pub(crate) fn line_cells(col: usize, row: usize, dcol: isize, drow: isize) -> [Position; LINE_LEN] {
    let mut cells = [Position::new(0, 0); LINE_LEN];
    for (i, cell) in cells.iter_mut().enumerate() {
        cell.col = (col as isize + dcol * i as isize) as usize;
        cell.row = (row as isize + drow * i as isize) as usize;
    }
    cells
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let mut line = None;

    for col in 0..board.columns() {
        for row in 0..board.rows() {
            for (dcol, drow) in DIRECTIONS {
                if !window_fits(board, col, row, dcol, drow) {
                    continue;
                }
                for player in [CellState::Human, CellState::Computer] {
                    if count_discs(board, col, row, dcol, drow, player) == Some(LINE_LEN) {
                        line = Some(WinningLine::new(player, line_cells(col, row, dcol, drow)));
                    }
                }
            }
        }
    }

    line
}
