mod board;
mod bot_controller;
mod evaluator;
mod game_state;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{BotInput, calculate_move, search_best_move_scores};
pub use evaluator::{COMPUTER_WIN_SCORE, Evaluation, HUMAN_WIN_SCORE, evaluate};
pub use game_state::ConnectFourGameState;
pub use settings::{ConnectFourSettings, MAX_BOARD_DIMENSION, MAX_SEARCH_DEPTH, MIN_SEARCH_DEPTH};
pub use types::{CellState, GameOutcome, GameStatus, Position, WinningLine};
pub use win_detector::check_win_with_line;
