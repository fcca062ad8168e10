//! Tic-Tac-Toe game UI rendering.

use super::game_common::cell_span;
use super::{render_game_scene, SceneInfo};
use crate::app::Session;
use crate::board::{GameResult, Pos};
use crate::games::{Rules, TicTacToe};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CELL_WIDTH: usize = 3;

pub fn render_tic_tac_toe_scene(frame: &mut Frame, area: Rect, session: &Session<TicTacToe>) {
    let scene = SceneInfo {
        title: " Tic-Tac-Toe ",
        border_color: Color::Cyan,
        board_height: 7,
        rules: &["Take turns marking", "cells. Three in a", "row wins."],
        goal: "three in a row",
        controls: &[
            ("[Arrows]", "Move"),
            ("[Enter]", "Place"),
            ("[R]", "Restart"),
            ("[Esc]", "Menu"),
        ],
    };
    render_game_scene(frame, area, session, &scene, render_board);
}

fn render_board(frame: &mut Frame, area: Rect, session: &Session<TicTacToe>) {
    let controller = &session.controller;
    let board = controller.board();
    let win_line = match controller.result() {
        GameResult::Win { line, .. } => line,
        _ => Vec::new(),
    };
    let show_cursor = !controller.is_over();

    // " X │ O │ X " rows with a rule between them
    let board_width = (TicTacToe::COLS * (CELL_WIDTH + 1) - 1) as u16;
    let board_height = (TicTacToe::ROWS * 2 - 1) as u16;
    let y_offset = area.y + area.height.saturating_sub(board_height) / 2;
    let x_offset = area.x + area.width.saturating_sub(board_width) / 2;
    let grid_style = Style::default().fg(Color::DarkGray);

    for row in 0..TicTacToe::ROWS {
        let mut spans = Vec::new();
        for col in 0..TicTacToe::COLS {
            let pos = Pos::new(row, col);
            spans.push(Span::raw(" "));
            spans.push(cell_span(
                board.get(pos),
                show_cursor && session.cursor.pos() == pos,
                controller.last_move() == Some(pos),
                win_line.contains(&pos),
            ));
            spans.push(Span::raw(" "));
            if col + 1 < TicTacToe::COLS {
                spans.push(Span::styled("│", grid_style));
            }
        }
        let y = y_offset + (row * 2) as u16;
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_offset, y, board_width, 1),
        );

        if row + 1 < TicTacToe::ROWS {
            let rule = vec!["─".repeat(CELL_WIDTH); TicTacToe::COLS].join("┼");
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(rule, grid_style))),
                Rect::new(x_offset, y + 1, board_width, 1),
            );
        }
    }
}
