use super::types::CellState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    columns: usize,
    rows: usize,
    cells: Vec<Vec<CellState>>,
}

impl Board {
    pub fn new(columns: usize, rows: usize) -> Self {
        if columns == 0 || rows == 0 {
            panic!("Connect four board requires positive dimensions");
        }

        Self {
            columns,
            rows,
            cells: vec![vec![CellState::Empty; columns]; rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell(&self, col: usize, row: usize) -> CellState {
        self.cells[row][col]
    }

    pub fn set(&mut self, col: usize, row: usize, state: CellState) {
        self.cells[row][col] = state;
    }

    /// First empty row scanning from the bottom of the column, or None when
    /// the column is full.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        (0..self.rows)
            .rev()
            .find(|&row| self.cells[row][col] == CellState::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != CellState::Empty))
    }

    pub fn clear(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(CellState::Empty);
        }
    }

    /// Places a disc, runs `f`, and restores the cell to Empty on the way
    /// out. All hypothetical placements in the search go through here.
    pub(crate) fn with_disc<T>(
        &mut self,
        col: usize,
        row: usize,
        state: CellState,
        f: impl FnOnce(&mut Board) -> T,
    ) -> T {
        self.cells[row][col] = state;
        let result = f(self);
        self.cells[row][col] = CellState::Empty;
        result
    }

    #[cfg(test)]
    pub(crate) fn from_pattern(pattern: &[&str]) -> Self {
        let mut board = Board::new(pattern[0].len(), pattern.len());
        for (row, line) in pattern.iter().enumerate() {
            assert_eq!(line.len(), board.columns, "ragged pattern row {}", row);
            for (col, ch) in line.chars().enumerate() {
                let state = match ch {
                    '.' => CellState::Empty,
                    'H' => CellState::Human,
                    'C' => CellState::Computer,
                    other => panic!("unknown cell '{}' in pattern", other),
                };
                board.set(col, row, state);
            }
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(7, 6);
        for col in 0..7 {
            for row in 0..6 {
                assert_eq!(board.cell(col, row), CellState::Empty);
            }
        }
    }

    #[test]
    fn test_disc_lands_on_bottom_row() {
        let board = Board::new(7, 6);
        for col in 0..7 {
            assert_eq!(board.lowest_empty_row(col), Some(5));
        }
    }

    #[test]
    fn test_discs_stack_upward() {
        let mut board = Board::new(7, 6);
        board.set(3, 5, CellState::Human);
        assert_eq!(board.lowest_empty_row(3), Some(4));
        board.set(3, 4, CellState::Computer);
        assert_eq!(board.lowest_empty_row(3), Some(3));
    }

    #[test]
    fn test_filling_a_column_exhausts_it() {
        let mut board = Board::new(7, 6);
        for _ in 0..6 {
            let row = board.lowest_empty_row(2).unwrap();
            board.set(2, row, CellState::Human);
        }
        assert_eq!(board.lowest_empty_row(2), None);
        assert_eq!(board.lowest_empty_row(1), Some(5));
    }

    #[test]
    fn test_with_disc_restores_the_cell() {
        let mut board = Board::new(4, 4);
        board.set(0, 3, CellState::Human);
        let snapshot = board.clone();

        let seen = board.with_disc(1, 3, CellState::Computer, |board| board.cell(1, 3));

        assert_eq!(seen, CellState::Computer);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_clear_empties_every_cell() {
        let mut board = Board::from_pattern(&[
            "HC.",
            "CHH",
            "HCC",
        ]);
        board.clear();
        assert_eq!(board, Board::new(3, 3));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(2, 2);
        assert!(!board.is_full());
        board.set(0, 0, CellState::Human);
        board.set(0, 1, CellState::Human);
        board.set(1, 0, CellState::Computer);
        assert!(!board.is_full());
        board.set(1, 1, CellState::Computer);
        assert!(board.is_full());
    }

    #[test]
    #[should_panic]
    fn test_zero_dimensions_panic() {
        Board::new(0, 6);
    }
}
