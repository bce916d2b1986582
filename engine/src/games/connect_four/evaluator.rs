use super::board::Board;
use super::types::CellState;
use super::win_detector::{DIRECTIONS, LINE_LEN, count_discs, window_fits};

pub const COMPUTER_WIN_SCORE: i64 = i64::MAX;
pub const HUMAN_WIN_SCORE: i64 = -i64::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub score: i64,
    pub winner: Option<CellState>,
}

/// Positional score of the board, positive favoring the computer. Every open
/// 4-cell window contributes -10^h + 10^c, where h and c are the two players'
/// disc counts in that window and a blocked window counts as 0 discs, so an
/// empty window contributes -1 + 1. The exponential weighting makes longer
/// runs dominate any number of shorter ones.
///
/// A completed line overrides the score with an extreme value divided by
/// `level`, the ply at which the caller is evaluating, so search backup
/// prefers the shallowest win and the shallowest escape from a loss.
pub fn evaluate(board: &Board, level: usize) -> Evaluation {
    let mut score: i64 = 0;
    let mut winner = None;

    for col in 0..board.columns() {
        for row in 0..board.rows() {
            for (dcol, drow) in DIRECTIONS {
                if !window_fits(board, col, row, dcol, drow) {
                    continue;
                }

                let human = count_discs(board, col, row, dcol, drow, CellState::Human).unwrap_or(0);
                score -= 10i64.pow(human as u32);
                if human == LINE_LEN {
                    winner = Some(CellState::Human);
                }

                let computer =
                    count_discs(board, col, row, dcol, drow, CellState::Computer).unwrap_or(0);
                score += 10i64.pow(computer as u32);
                if computer == LINE_LEN {
                    winner = Some(CellState::Computer);
                }
            }
        }
    }

    match winner {
        Some(CellState::Human) => score = HUMAN_WIN_SCORE / level as i64,
        Some(CellState::Computer) => score = COMPUTER_WIN_SCORE / level as i64,
        _ => {}
    }

    Evaluation { score, winner }
}
