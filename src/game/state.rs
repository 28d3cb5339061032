use super::board::{self, Board};
use super::player::{Player, Token};
use super::winner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Token),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column out of range")]
    InvalidColumn,
    #[error("the game is already over")]
    GameOver,
}

impl From<board::MoveError> for MoveError {
    fn from(err: board::MoveError) -> Self {
        match err {
            board::MoveError::ColumnFull => MoveError::ColumnFull,
            board::MoveError::InvalidColumn => MoveError::InvalidColumn,
        }
    }
}

/// One game between two named players: the board, whose turn it is, and the
/// outcome once the game ends.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    board: Board,
    players: [Player; 2],
    active: usize,
    outcome: Option<GameOutcome>,
}

impl GameSession {
    /// Start a session. The first player holds token One and moves first.
    pub fn new(player_one: String, player_two: String) -> Self {
        GameSession {
            board: Board::new(),
            players: [
                Player::new(player_one, Token::One),
                Player::new(player_two, Token::Two),
            ],
            active: 0,
            outcome: None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is. After a win this stays on the winner.
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The winning player, if the game ended with a winner.
    pub fn winner(&self) -> Option<&Player> {
        match self.outcome {
            Some(GameOutcome::Winner(token)) => {
                self.players.iter().find(|p| p.token() == token)
            }
            _ => None,
        }
    }

    /// Drop the active player's token into `column` and return the row it
    /// landed in.
    ///
    /// On success the fresh board snapshot is scanned for a win by the
    /// active player: a win or a full board ends the game, otherwise the
    /// turn passes to the other player. A full column changes nothing, so
    /// the same player moves again.
    pub fn play(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let token = self.players[self.active].token();
        let row = self.board.drop_token(column, token)?;

        let values = self.board.values();
        if winner::check_winner(&values, token) {
            self.outcome = Some(GameOutcome::Winner(token));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.active = 1 - self.active;
        }

        Ok(row)
    }

    /// Clear the board for a rematch between the same players.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.active = 0;
        self.outcome = None;
    }
}
