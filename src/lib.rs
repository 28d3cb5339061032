//! # Connect Four
//!
//! A two-player Connect Four game for the terminal, built with Ratatui.
//! Players alternately drop tokens into a 6×7 grid; the first four-in-a-row
//! (horizontal, vertical, or diagonal) wins, and a full board is a draw.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, win detection, players, session state
//! - [`ui`] — Terminal UI: name entry and game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
