//! Core Connect Four game logic: board representation, win detection,
//! player identity, and the session state machine.

mod board;
mod player;
mod state;
pub mod winner;

pub use board::{Board, Cell, Grid, COLS, ROWS};
pub use player::{Player, Token};
pub use state::{GameOutcome, GameSession, MoveError};
