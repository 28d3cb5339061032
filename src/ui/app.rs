use crate::config::AppConfig;
use crate::game::{GameOutcome, GameSession, MoveError, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    NameEntry,
    Playing,
}

pub struct App {
    mode: Mode,
    name_inputs: [String; 2],
    focus: usize,
    default_names: [String; 2],
    session: Option<GameSession>,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            mode: Mode::NameEntry,
            name_inputs: [String::new(), String::new()],
            focus: 0,
            default_names: [config.players.one.clone(), config.players.two.clone()],
            session: None,
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::NameEntry => self.handle_name_entry_key(key.code),
            Mode::Playing => self.handle_game_key(key.code),
        }
    }

    /// Key presses on the name-entry screen edit the focused field
    fn handle_name_entry_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter => {
                self.start_game();
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                self.focus = 1 - self.focus;
            }
            KeyCode::Backspace => {
                self.name_inputs[self.focus].pop();
            }
            KeyCode::Char(c) => {
                self.name_inputs[self.focus].push(c);
            }
            _ => {}
        }
    }

    /// Handle key press during a game
    fn handle_game_key(&mut self, code: KeyCode) {
        // Clear message on any key press
        self.message = None;

        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_token();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    /// Build the session from the entered names (blank fields fall back to
    /// the configured defaults) and switch to the game view.
    fn start_game(&mut self) {
        let one = self.resolved_name(0);
        let two = self.resolved_name(1);
        self.session = Some(GameSession::new(one, two));
        self.mode = Mode::Playing;
        self.selected_column = 3;
        self.message = None;
    }

    fn resolved_name(&self, seat: usize) -> String {
        let typed = self.name_inputs[seat].trim();
        if typed.is_empty() {
            self.default_names[seat].clone()
        } else {
            typed.to_string()
        }
    }

    /// Drop the active player's token in the selected column
    fn drop_token(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if session.is_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match session.play(self.selected_column) {
            Ok(_row) => {
                // Check if game just ended
                if let Some(outcome) = session.outcome() {
                    self.message = Some(match outcome {
                        GameOutcome::Winner(_) => {
                            let name = session.winner().map(|p| p.name()).unwrap_or("?");
                            format!("{} wins!", name)
                        }
                        GameOutcome::Draw => "It's a draw!".to_string(),
                    });
                }
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Rematch with the same players
    fn restart(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.reset();
        }
        self.selected_column = 3;
        self.message = Some("New game started!".to_string());
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.mode {
            Mode::NameEntry => {
                super::name_entry::render(frame, &self.name_inputs, self.focus, &self.default_names);
            }
            Mode::Playing => {
                if let Some(session) = &self.session {
                    super::game_view::render(frame, session, self.selected_column, &self.message);
                }
            }
        }
    }
}
