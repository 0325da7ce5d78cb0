use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{GameState, Position};
use crate::session::{MenuView, View};

const TITLE: &str = "SNAKE GAME";

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, view: &View) {
        match view {
            View::MainMenu {
                menu,
                title_pulse,
                menu_snake,
                grid_width,
                ..
            } => self.render_main_menu(frame, menu, *title_pulse, menu_snake, *grid_width),
            View::HighScore { high_score } => self.render_high_score(frame, *high_score),
            View::Playing { game, high_score } => {
                self.render_game(frame, game, *high_score);
            }
            View::Paused {
                game,
                high_score,
                menu,
            } => {
                let game_area = self.render_game(frame, game, *high_score);
                self.render_pause_menu(frame, game_area, menu);
            }
            View::GameOver { game, high_score } => {
                let game_area = self.render_game(frame, game, *high_score);
                self.render_game_over(frame, game_area, game.score, *high_score);
            }
        }
    }

    /// Draw header, playfield and footer; returns the playfield area
    fn render_game(&self, frame: &mut Frame, state: &GameState, high_score: u32) -> Rect {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, high_score), chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        frame.render_widget(self.render_grid(state), game_area);
        frame.render_widget(self.render_controls(), chunks[2]);

        game_area
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let mut lines = Vec::new();

        for y in 0..state.grid_height {
            let mut spans = Vec::new();

            for x in 0..state.grid_width {
                let pos = Position::new(x as i32, y as i32);

                let cell = if pos == state.snake.head() {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.occupies(pos) {
                    Span::styled("■ ", Style::default().fg(Color::Green))
                } else if pos == state.food {
                    Span::styled(
                        "● ",
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
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, high_score: u32) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(high_score.to_string(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" to pause"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_pause_menu(&self, frame: &mut Frame, area: Rect, menu: &MenuView) {
        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        text.extend(menu_lines(menu));

        let popup = centered_rect(area, 30, text.len() as u16 + 3);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            ),
            popup,
        );
    }

    fn render_game_over(&self, frame: &mut Frame, area: Rect, score: u32, high_score: u32) {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(high_score.to_string(), Style::default().fg(Color::Yellow)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to Restart",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "Press Esc to Menu",
                Style::default().fg(Color::Gray),
            )),
        ];

        let popup = centered_rect(area, 30, text.len() as u16 + 3);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            ),
            popup,
        );
    }

    fn render_high_score(&self, frame: &mut Frame, high_score: u32) {
        let text = vec![
            Line::from(Span::styled(
                "HIGH SCORE",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("Your Best: {high_score}"),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter or Esc to return",
                Style::default().fg(Color::Gray),
            )),
        ];

        let area = centered_rect(frame.area(), 40, text.len() as u16);
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
    }

    fn render_main_menu(
        &self,
        frame: &mut Frame,
        menu: &MenuView,
        title_pulse: f32,
        menu_snake: &[Position],
        grid_width: usize,
    ) {
        let green = (200.0 * title_pulse.clamp(0.0, 1.0)) as u8;
        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                TITLE,
                Style::default()
                    .fg(Color::Rgb(0, green, 0))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        text.extend(menu_lines(menu));
        text.extend([
            Line::from(""),
            Line::from(Span::styled(
                "USE ARROW KEYS TO NAVIGATE",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "PRESS ENTER TO SELECT",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            menu_snake_line(menu_snake, grid_width),
        ]);

        let width = u16::try_from(grid_width)
            .unwrap_or(u16::MAX)
            .saturating_mul(2)
            .max(30)
            .saturating_add(2);
        let height = u16::try_from(text.len()).unwrap_or(u16::MAX).saturating_add(2);
        let area = centered_rect(frame.area(), width, height);
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Green)),
            ),
            area,
        );
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Menu entries, the selected one marked and highlighted
fn menu_lines(menu: &MenuView) -> Vec<Line<'static>> {
    menu.labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            if i == menu.selected {
                Line::from(Span::styled(
                    format!("> {label} <"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    label.to_string(),
                    Style::default().fg(Color::Gray),
                ))
            }
        })
        .collect()
}

/// One grid row with the decorative snake drawn in it
fn menu_snake_line(cells: &[Position], grid_width: usize) -> Line<'static> {
    let spans = (0..grid_width as i32)
        .map(|x| {
            if cells.iter().any(|p| p.x == x) {
                Span::styled("■ ", Style::default().fg(Color::LightGreen))
            } else {
                Span::raw("  ")
            }
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

/// A `width` x `height` rectangle centred in `area`, clipped to it
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}
