use super::player::Token;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// A read-only snapshot of cell values, shaped rows × columns with row 0 at
/// the top, in the same order as the board's internal storage.
pub type Grid = [[Cell; COLS]; ROWS];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Mark(Token),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column out of range")]
    InvalidColumn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Snapshot of all cell values. Later moves do not affect snapshots
    /// already taken.
    pub fn values(&self) -> Grid {
        self.cells
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a token in a column, returns the row where it landed.
    ///
    /// Gravity stacks tokens from the bottom up: the token settles in the
    /// lowest row whose cell is still empty. A full column is an expected,
    /// recoverable outcome and leaves the board untouched.
    pub fn drop_token(&mut self, col: usize, token: Token) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = Cell::Mark(token);
                return Ok(row);
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_drop_token() {
        let mut board = Board::new();

        // Drop first token in column 3
        let row = board.drop_token(3, Token::One).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Mark(Token::One));

        // Drop second token in same column
        let row = board.drop_token(3, Token::Two).unwrap();
        assert_eq!(row, 4); // Should land on top of first token
        assert_eq!(board.get(4, 3), Cell::Mark(Token::Two));
    }

    #[test]
    fn test_gravity_fills_bottom_up() {
        let mut board = Board::new();

        // Tokens in one column land in rows 5,4,3,2,1,0 in that order
        for expected_row in (0..ROWS).rev() {
            let row = board.drop_token(2, Token::One).unwrap();
            assert_eq!(row, expected_row);
        }
    }

    #[test]
    fn test_column_full_rejected_without_mutation() {
        let mut board = Board::new();

        // Fill column 0
        for _ in 0..ROWS {
            board.drop_token(0, Token::One).unwrap();
        }
        assert!(board.is_column_full(0));

        let before = board.values();
        assert_eq!(board.drop_token(0, Token::Two), Err(MoveError::ColumnFull));
        assert_eq!(board.values(), before);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(
            board.drop_token(COLS, Token::One),
            Err(MoveError::InvalidColumn)
        );
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_token(col, Token::One).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_values_snapshot_is_independent() {
        let mut board = Board::new();
        board.drop_token(6, Token::Two).unwrap();

        let snapshot = board.values();
        assert_eq!(snapshot[5][6], Cell::Mark(Token::Two));

        board.drop_token(6, Token::One).unwrap();
        assert_eq!(snapshot[4][6], Cell::Empty);
        assert_eq!(board.get(4, 6), Cell::Mark(Token::One));
    }
}
