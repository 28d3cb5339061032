//! Terminal UI: the player-name form shown at startup and the interactive
//! game view with column selector and status line.

mod app;
mod game_view;
mod name_entry;

pub use app::App;
