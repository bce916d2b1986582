use crate::games::GameRng;
use crate::log;

use super::board::Board;
use super::evaluator::evaluate;
use super::game_state::ConnectFourGameState;
use super::types::CellState;

/// Snapshot of the live game handed to the bot. The search mutates only this
/// copy, so the real grid is untouched by exploration.
pub struct BotInput {
    pub board: Board,
    pub search_depth: usize,
}

impl BotInput {
    pub fn from_game_state(state: &ConnectFourGameState) -> Self {
        Self {
            board: state.board().clone(),
            search_depth: state.search_depth(),
        }
    }
}

pub fn calculate_move(input: BotInput, rng: &mut GameRng) -> Option<usize> {
    let BotInput {
        mut board,
        search_depth,
    } = input;

    let scores = search_best_move_scores(&mut board, 1, search_depth, true);

    let max_score = (0..board.columns())
        .filter(|&col| board.lowest_empty_row(col).is_some())
        .map(|col| scores[col])
        .max()?;

    let candidates: Vec<usize> = (0..board.columns())
        .filter(|&col| scores[col] == max_score && board.lowest_empty_row(col).is_some())
        .collect();

    let column = rng.choose(&candidates).copied()?;
    log!(
        "bot: depth {}, root scores {:?}, candidates {:?}, playing column {}",
        search_depth,
        scores,
        candidates,
        column
    );
    Some(column)
}

/// Minimax over the columns. The returned vector always has one score per
/// column; full columns keep the mover's worst-possible sentinel so they are
/// never selected but the array shape stays fixed.
pub fn search_best_move_scores(
    board: &mut Board,
    level: usize,
    max_level: usize,
    computer_to_move: bool,
) -> Vec<i64> {
    let (mover, sentinel) = if computer_to_move {
        (CellState::Computer, i64::MIN)
    } else {
        (CellState::Human, i64::MAX)
    };
    let mut scores = vec![sentinel; board.columns()];

    for col in 0..board.columns() {
        let Some(row) = board.lowest_empty_row(col) else {
            continue;
        };

        scores[col] = board.with_disc(col, row, mover, |board| {
            let evaluation = evaluate(board, level);
            if evaluation.winner.is_some() || level >= max_level {
                return evaluation.score;
            }

            // The computer picks the move that minimizes the human's best
            // reply; the human mirrors it one level down.
            let replies = search_best_move_scores(board, level + 1, max_level, !computer_to_move);
            let backed_up = if computer_to_move {
                replies.iter().copied().min()
            } else {
                replies.iter().copied().max()
            };
            backed_up.unwrap_or(evaluation.score)
        });
    }

    scores
}
