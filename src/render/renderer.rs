use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::pad::ControlPad;
use crate::game::{GameState, Phase, Position};
use crate::score::SessionStats;

/// Draws the whole screen and remembers where the clickable regions are
pub struct Renderer {
    pad: ControlPad,
    board: Rect,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            pad: ControlPad::default(),
            board: Rect::default(),
        }
    }

    pub fn pad(&self) -> &ControlPad {
        &self.pad
    }

    /// Whether (column, row) falls inside the board drawn last frame
    pub fn board_contains(&self, column: u16, row: u16) -> bool {
        let b = self.board;
        column >= b.x && column < b.x + b.width && row >= b.y && row < b.y + b.height
    }

    pub fn render(&mut self, frame: &mut Frame, state: &GameState, stats: &SessionStats, best: u32) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(4), // Control pad + key hints
            ])
            .split(frame.area());

        frame.render_widget(self.header(state, stats, best), chunks[0]);

        // Center the board horizontally
        let board = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];
        self.board = board;

        let widget = match state.phase {
            Phase::NotStarted => self.start_screen(),
            Phase::Running => self.grid(state),
            Phase::GameOver => self.game_over(state, best),
        };
        frame.render_widget(widget, board);

        self.pad.place(chunks[2]);
        frame.render_widget(self.footer(), chunks[2]);
    }

    fn header(&self, state: &GameState, stats: &SessionStats, best: u32) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(best.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Games: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.games_played().to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn grid(&self, state: &GameState) -> Paragraph<'_> {
        let mut lines = Vec::new();

        for y in 0..state.grid_size {
            let mut spans = Vec::new();

            for x in 0..state.grid_size {
                let pos = Position::new(x, y);

                let cell = if pos == state.snake.head() {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.contains(pos) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if pos == state.food {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake (edges wrap) "),
            )
            .alignment(Alignment::Center)
    }

    fn start_screen(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "TORUS SNAKE",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from("Eat food, don't bite yourself."),
            Line::from("The edges wrap around."),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" or click the board to start", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn game_over(&self, state: &GameState, best: u32) -> Paragraph<'_> {
        let mut text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        if state.score > 0 && state.score == best {
            text.push(Line::from(vec![Span::styled(
                "New best!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]));
        } else {
            text.push(Line::from(vec![
                Span::styled("Best: ", Style::default().fg(Color::Yellow)),
                Span::styled(best.to_string(), Style::default().fg(Color::White)),
            ]));
        }

        text.extend([
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    " or click the board to play again",
                    Style::default().fg(Color::Gray),
                ),
            ]),
        ]);

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn footer(&self) -> Paragraph<'_> {
        let button = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let text = vec![
            Line::from(vec![
                Span::styled("   ◄   ", button),
                Span::raw("  "),
                Span::styled("   ▲   ", button),
                Span::raw("  "),
                Span::styled("   ▼   ", button),
                Span::raw("  "),
                Span::styled("   ►   ", button),
            ]),
            Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw("/"),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" steer | drag to swipe | "),
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::raw(" restart | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" quit"),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
