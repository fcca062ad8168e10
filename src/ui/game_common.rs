//! Layout pieces shared by the game screens.

use crate::board::{Cell, GameResult, Player};
use crate::controller::Scoreboard;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub const HUMAN_COLOR: Color = Color::White;
pub const AI_COLOR: Color = Color::LightRed;
pub const CURSOR_COLOR: Color = Color::Yellow;
pub const LAST_MOVE_COLOR: Color = Color::Green;
pub const WIN_LINE_COLOR: Color = Color::LightGreen;
pub const EMPTY_COLOR: Color = Color::DarkGray;

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Board area, top left inside the outer border
    pub content: Rect,
    /// Two lines under the board
    pub status_bar: Rect,
    /// Right side, with its own border
    pub info_panel: Rect,
}

/// Split `area` into board, status bar and info panel:
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   [content area]                │  [info]     │
/// │                                 │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(content_min_height), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Status message on the first line, `(key, action)` hints on the second.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Status bar with a braille spinner, one frame per 100ms.
pub fn render_thinking_status_bar(frame: &mut Frame, area: Rect, message: &str) {
    use std::time::{SystemTime, UNIX_EPOCH};

    const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let spinner = SPINNER[((millis / 100) % 10) as usize];

    let status_text = format!("{} {}", spinner, message);
    render_status_bar(frame, area, &status_text, Color::Yellow, &[]);
}

/// Outcome from the human's side, for coloring.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum GameResultType {
    Win,
    Loss,
    Draw,
}

impl GameResultType {
    pub fn color(self) -> Color {
        match self {
            GameResultType::Win => Color::Green,
            GameResultType::Loss => Color::Red,
            GameResultType::Draw => Color::Yellow,
        }
    }
}

/// Banner across the bottom of `area`. Leaves the board above it visible.
pub fn render_game_over_banner(
    frame: &mut Frame,
    area: Rect,
    result_type: GameResultType,
    title: &str,
    message: &str,
) {
    let banner_height: u16 = 4;
    let banner_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(banner_height),
        width: area.width,
        height: banner_height.min(area.height),
    };

    frame.render_widget(Clear, banner_area);

    let title_color = result_type.color();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color));

    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                title,
                Style::default()
                    .fg(title_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(message, Style::default().fg(Color::White)),
        ]),
        Line::from(Span::styled(
            "[Enter/R] Play again  [Esc] Menu",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

/// Symbol and style for one cell.
pub fn cell_span(
    cell: Cell,
    is_cursor: bool,
    is_last_move: bool,
    on_win_line: bool,
) -> Span<'static> {
    let (symbol, style) = match cell {
        Cell::Mark(player) => {
            let color = match player {
                Player::Human => HUMAN_COLOR,
                Player::Ai => AI_COLOR,
            };
            let base = Style::default().fg(color).add_modifier(Modifier::BOLD);
            let style = if on_win_line {
                base.fg(WIN_LINE_COLOR)
            } else if is_cursor {
                base.bg(Color::DarkGray)
            } else if is_last_move {
                base.fg(LAST_MOVE_COLOR)
            } else {
                base
            };
            (player.symbol().to_string(), style)
        }
        Cell::Empty if is_cursor => (
            "□".to_string(),
            Style::default()
                .fg(CURSOR_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::Empty => ("·".to_string(), Style::default().fg(EMPTY_COLOR)),
    };
    Span::styled(symbol, style)
}

/// Title, message and color for a finished game, from the human's side.
pub fn result_summary(result: &GameResult, goal: &str) -> (GameResultType, &'static str, String) {
    match result.winner() {
        Some(Player::Human) => (
            GameResultType::Win,
            ":: VICTORY! ::",
            format!("You connected {}!", goal),
        ),
        Some(Player::Ai) => (
            GameResultType::Loss,
            "DEFEAT",
            format!("The AI connected {}.", goal),
        ),
        None => (
            GameResultType::Draw,
            "DRAW",
            "The board is full with no winner.".to_string(),
        ),
    }
}

/// Bordered " Info " panel. Returns the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

pub fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

pub fn gray(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().fg(Color::Gray)))
}

/// Difficulty, mark legend and session score for the info panel.
pub fn info_footer(difficulty: &str, scoreboard: &Scoreboard) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled("Difficulty: ", Style::default().fg(Color::DarkGray)),
            Span::styled(difficulty.to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("You: ", Style::default().fg(Color::Gray)),
            Span::styled(
                "O",
                Style::default().fg(HUMAN_COLOR).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  AI: ", Style::default().fg(Color::Gray)),
            Span::styled(
                "X",
                Style::default().fg(AI_COLOR).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "SCORE",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        score_line("You", scoreboard.human_wins, Color::Green),
        score_line("AI", scoreboard.ai_wins, Color::Red),
        score_line("Draws", scoreboard.draws, Color::Yellow),
    ]
}

fn score_line(label: &str, value: u32, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<7}", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), Style::default().fg(color)),
    ])
}
