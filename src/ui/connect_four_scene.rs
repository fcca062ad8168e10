//! Connect Four game UI rendering.

use super::game_common::{cell_span, CURSOR_COLOR};
use super::{render_game_scene, SceneInfo};
use crate::app::Session;
use crate::board::{GameResult, Pos};
use crate::games::{ConnectFour, Rules};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_connect_four_scene(frame: &mut Frame, area: Rect, session: &Session<ConnectFour>) {
    let scene = SceneInfo {
        title: " Connect Four ",
        border_color: Color::Blue,
        board_height: 10,
        rules: &[
            "Drop pieces into",
            "columns. Four in a",
            "row in any direction",
            "wins.",
        ],
        goal: "four in a row",
        controls: &[
            ("[←/→]", "Column"),
            ("[Enter]", "Drop"),
            ("[R]", "Restart"),
            ("[Esc]", "Menu"),
        ],
    };
    render_game_scene(frame, area, session, &scene, render_board);
}

fn render_board(frame: &mut Frame, area: Rect, session: &Session<ConnectFour>) {
    let controller = &session.controller;
    let board = controller.board();
    let win_line = match controller.result() {
        GameResult::Win { line, .. } => line,
        _ => Vec::new(),
    };
    let cursor_col = (!controller.is_over()).then_some(session.cursor.col);

    // Drop marker, the grid, then column numbers
    let board_width = (ConnectFour::COLS * 2 - 1) as u16;
    let board_height = ConnectFour::ROWS as u16 + 2;
    let y_offset = area.y + area.height.saturating_sub(board_height) / 2;
    let x_offset = area.x + area.width.saturating_sub(board_width) / 2;

    let marker: Vec<Span> = (0..ConnectFour::COLS)
        .map(|col| {
            let symbol = if cursor_col == Some(col) { "▼" } else { " " };
            let trailing = if col + 1 < ConnectFour::COLS { " " } else { "" };
            Span::styled(
                format!("{}{}", symbol, trailing),
                Style::default()
                    .fg(CURSOR_COLOR)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(marker)),
        Rect::new(x_offset, y_offset, board_width, 1),
    );

    for row in 0..ConnectFour::ROWS {
        let mut spans = Vec::new();
        for col in 0..ConnectFour::COLS {
            let pos = Pos::new(row, col);
            // Highlight where a drop in the cursor column would land
            let is_target = cursor_col == Some(col) && board.landing_row(col) == Some(row);
            spans.push(cell_span(
                board.get(pos),
                is_target,
                controller.last_move() == Some(pos),
                win_line.contains(&pos),
            ));
            if col + 1 < ConnectFour::COLS {
                spans.push(Span::raw(" "));
            }
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_offset, y_offset + 1 + row as u16, board_width, 1),
        );
    }

    let numbers = (1..=ConnectFour::COLS)
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            numbers,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect::new(
            x_offset,
            y_offset + 1 + ConnectFour::ROWS as u16,
            board_width,
            1,
        ),
    );
}
