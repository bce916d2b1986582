use crate::games::GameRng;
use crate::log;

use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::settings::{ConnectFourSettings, MAX_SEARCH_DEPTH, MIN_SEARCH_DEPTH};
use super::types::{CellState, GameOutcome, GameStatus, Position, WinningLine};
use super::win_detector::check_win_with_line;

pub struct ConnectFourGameState {
    board: Board,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    last_move: Option<Position>,
    search_depth: usize,
    rng: GameRng,
    on_game_over: Option<Box<dyn FnMut(&GameOutcome)>>,
}

impl ConnectFourGameState {
    /// Panics on zero dimensions; callers pass positive sizes.
    pub fn new(columns: usize, rows: usize, rng: GameRng) -> Self {
        Self {
            board: Board::new(columns, rows),
            status: GameStatus::InProgress,
            winning_line: None,
            last_move: None,
            search_depth: ConnectFourSettings::default_settings().search_depth,
            rng,
            on_game_over: None,
        }
    }

    pub fn create(settings: &ConnectFourSettings, seed: u64) -> Result<Self, String> {
        settings.validate()?;

        let mut state = Self::new(settings.columns, settings.rows, GameRng::new(seed));
        state.search_depth = settings.search_depth;
        log!("connect four: new game, seed {}", seed);
        Ok(state)
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        self.last_move = None;
    }

    /// Drops a human disc into `column`. Returns false without touching the
    /// grid when the game is already over or the column is full. Otherwise
    /// the disc lands on the lowest empty row and, if the game is still in
    /// progress, the computer answers within the same call.
    pub fn drop_disc(&mut self, column: usize) -> bool {
        if self.status != GameStatus::InProgress {
            return false;
        }
        let Some(row) = self.board.lowest_empty_row(column) else {
            return false;
        };

        self.place(column, row, CellState::Human);

        if self.status == GameStatus::InProgress {
            self.play_computer_turn();
        }

        if self.status != GameStatus::InProgress {
            self.notify_game_over();
        }

        true
    }

    fn place(&mut self, col: usize, row: usize, disc: CellState) {
        self.board.set(col, row, disc);
        self.last_move = Some(Position::new(col, row));
        self.refresh_outcome();
    }

    fn play_computer_turn(&mut self) {
        let input = BotInput::from_game_state(self);
        let Some(column) = calculate_move(input, &mut self.rng) else {
            return;
        };
        if let Some(row) = self.board.lowest_empty_row(column) {
            self.place(column, row, CellState::Computer);
        }
    }

    fn refresh_outcome(&mut self) {
        if let Some(line) = check_win_with_line(&self.board) {
            self.status = match line.player {
                CellState::Human => GameStatus::HumanWon,
                CellState::Computer => GameStatus::ComputerWon,
                CellState::Empty => unreachable!(),
            };
            self.winning_line = Some(line);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    fn notify_game_over(&mut self) {
        log!("connect four: game over, {:?}", self.status);
        let outcome = self.outcome();
        if let Some(handler) = self.on_game_over.as_mut() {
            handler(&outcome);
        }
    }

    pub fn columns(&self) -> usize {
        self.board.columns()
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cell_state(&self, col: usize, row: usize) -> CellState {
        self.board.cell(col, row)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn outcome(&self) -> GameOutcome {
        GameOutcome {
            status: self.status,
            winning_line: self.winning_line.clone(),
        }
    }

    pub fn search_depth(&self) -> usize {
        self.search_depth
    }

    pub fn set_search_depth(&mut self, depth: usize) -> Result<(), String> {
        if !(MIN_SEARCH_DEPTH..=MAX_SEARCH_DEPTH).contains(&depth) {
            return Err(format!(
                "Search depth must be between {} and {}",
                MIN_SEARCH_DEPTH, MAX_SEARCH_DEPTH
            ));
        }
        self.search_depth = depth;
        Ok(())
    }

    /// Registers the single game-over notification: called exactly once per
    /// game, inside the `drop_disc` call that ended it.
    pub fn set_on_game_over(&mut self, handler: impl FnMut(&GameOutcome) + 'static) {
        self.on_game_over = Some(Box::new(handler));
    }

    pub fn clear_on_game_over(&mut self) {
        self.on_game_over = None;
    }

    #[cfg(test)]
    pub(crate) fn set_board(&mut self, board: Board) {
        self.board = board;
    }
}
