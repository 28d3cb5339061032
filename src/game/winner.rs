//! Win detection over a board snapshot.
//!
//! Each scan is a pure predicate: it checks every valid starting position
//! for a run of four cells marked with the given token. Nothing here
//! mutates, fails, or reports which cells formed the run.

use super::board::{Cell, Grid, COLS, ROWS};
use super::player::Token;

/// Four in a row within a single row
pub fn check_horizontal(values: &Grid, token: Token) -> bool {
    let mark = Cell::Mark(token);
    for row in 0..ROWS {
        for col in 0..COLS - 3 {
            if values[row][col] == mark
                && values[row][col + 1] == mark
                && values[row][col + 2] == mark
                && values[row][col + 3] == mark
            {
                return true;
            }
        }
    }
    false
}

/// Four in a row within a single column
pub fn check_vertical(values: &Grid, token: Token) -> bool {
    let mark = Cell::Mark(token);
    for col in 0..COLS {
        for row in 0..ROWS - 3 {
            if values[row][col] == mark
                && values[row + 1][col] == mark
                && values[row + 2][col] == mark
                && values[row + 3][col] == mark
            {
                return true;
            }
        }
    }
    false
}

/// Four in a row running down-right (↘)
pub fn check_diagonal_dr(values: &Grid, token: Token) -> bool {
    let mark = Cell::Mark(token);
    for row in 0..ROWS - 3 {
        for col in 0..COLS - 3 {
            if values[row][col] == mark
                && values[row + 1][col + 1] == mark
                && values[row + 2][col + 2] == mark
                && values[row + 3][col + 3] == mark
            {
                return true;
            }
        }
    }
    false
}

/// Four in a row running down-left (↙)
pub fn check_diagonal_dl(values: &Grid, token: Token) -> bool {
    let mark = Cell::Mark(token);
    for row in 0..ROWS - 3 {
        for col in 3..COLS {
            if values[row][col] == mark
                && values[row + 1][col - 1] == mark
                && values[row + 2][col - 2] == mark
                && values[row + 3][col - 3] == mark
            {
                return true;
            }
        }
    }
    false
}

/// True if `token` has four in a row in any direction. Scan order does not
/// affect the result; the short circuit only skips redundant work.
pub fn check_winner(values: &Grid, token: Token) -> bool {
    check_horizontal(values, token)
        || check_vertical(values, token)
        || check_diagonal_dr(values, token)
        || check_diagonal_dl(values, token)
}

#[cfg(test)]
mod tests {
    use super::super::board::Board;
    use super::*;

    fn empty_grid() -> Grid {
        [[Cell::Empty; COLS]; ROWS]
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        let values = empty_grid();
        assert!(!check_winner(&values, Token::One));
        assert!(!check_winner(&values, Token::Two));
    }

    #[test]
    fn test_horizontal_win_bottom_row() {
        let mut values = empty_grid();
        for col in 0..4 {
            values[5][col] = Cell::Mark(Token::One);
        }
        assert!(check_horizontal(&values, Token::One));
        assert!(check_winner(&values, Token::One));
    }

    #[test]
    fn test_vertical_win_from_drops() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_token(3, Token::Two).unwrap();
        }
        let values = board.values();
        assert!(check_vertical(&values, Token::Two));
        assert!(check_winner(&values, Token::Two));
    }

    #[test]
    fn test_diagonal_dr_win() {
        let mut values = empty_grid();
        values[2][0] = Cell::Mark(Token::One);
        values[3][1] = Cell::Mark(Token::One);
        values[4][2] = Cell::Mark(Token::One);
        values[5][3] = Cell::Mark(Token::One);
        assert!(check_diagonal_dr(&values, Token::One));
        assert!(check_winner(&values, Token::One));
    }

    #[test]
    fn test_three_on_diagonal_is_not_a_win() {
        let mut values = empty_grid();
        values[2][0] = Cell::Mark(Token::One);
        values[3][1] = Cell::Mark(Token::One);
        values[4][2] = Cell::Mark(Token::One);
        assert!(!check_winner(&values, Token::One));
    }

    #[test]
    fn test_diagonal_dl_win() {
        let mut values = empty_grid();
        values[2][3] = Cell::Mark(Token::Two);
        values[3][2] = Cell::Mark(Token::Two);
        values[4][1] = Cell::Mark(Token::Two);
        values[5][0] = Cell::Mark(Token::Two);
        assert!(check_diagonal_dl(&values, Token::Two));
        assert!(check_winner(&values, Token::Two));
    }

    #[test]
    fn test_tokens_do_not_interfere() {
        let mut values = empty_grid();
        for col in 0..4 {
            values[5][col] = Cell::Mark(Token::One);
        }
        values[5][4] = Cell::Mark(Token::Two);
        values[4][0] = Cell::Mark(Token::Two);

        assert!(check_winner(&values, Token::One));
        assert!(!check_winner(&values, Token::Two));
    }

    #[test]
    fn test_mixed_line_is_no_win_for_either() {
        let mut values = empty_grid();
        values[5][0] = Cell::Mark(Token::One);
        values[5][1] = Cell::Mark(Token::One);
        values[5][2] = Cell::Mark(Token::Two);
        values[5][3] = Cell::Mark(Token::One);
        assert!(!check_winner(&values, Token::One));
        assert!(!check_winner(&values, Token::Two));
    }
}
