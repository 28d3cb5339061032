use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the player-name form shown before a game starts. A blank field
/// shows its default name dimmed; Enter starts the game with whatever is
/// resolved at that point.
pub fn render(frame: &mut Frame, inputs: &[String; 2], focus: usize, defaults: &[String; 2]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Player one field
            Constraint::Length(3), // Player two field
            Constraint::Length(3), // Hint
            Constraint::Min(0),
        ])
        .split(frame.area());

    let title = Paragraph::new("Connect Four")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let labels = ["Player One", "Player Two"];
    for seat in 0..2 {
        let content = if inputs[seat].is_empty() {
            Span::styled(defaults[seat].clone(), Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(inputs[seat].clone())
        };

        let border_style = if focus == seat {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let field = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(labels[seat]),
        );
        frame.render_widget(field, chunks[1 + seat]);
    }

    let hint = Paragraph::new("Tab: Switch field  |  Enter: Start  |  Esc: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hint, chunks[3]);
}
