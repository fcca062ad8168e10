//! Terminal rendering.

pub mod connect_four_scene;
pub mod game_common;
pub mod menu_scene;
pub mod tic_tac_toe_scene;

use crate::app::{App, CursorGame, Screen, Session};
use game_common::{
    create_game_layout, info_footer, render_game_over_banner, render_info_panel_frame,
    render_status_bar, render_thinking_status_bar, result_summary,
};
use ratatui::{layout::Rect, style::Color, text::Line, widgets::Paragraph, Frame};

/// Draw whatever screen the app is on.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();
    match app.screen {
        Screen::Menu => menu_scene::render_menu(frame, area, &app.menu),
        Screen::TicTacToe => {
            if let Some(session) = &app.tic_tac_toe {
                tic_tac_toe_scene::render_tic_tac_toe_scene(frame, area, session);
            }
        }
        Screen::ConnectFour => {
            if let Some(session) = &app.connect_four {
                connect_four_scene::render_connect_four_scene(frame, area, session);
            }
        }
    }
}

/// What a game screen supplies to the shared frame around its board.
pub(crate) struct SceneInfo<'a> {
    pub title: &'a str,
    pub border_color: Color,
    pub board_height: u16,
    pub rules: &'a [&'a str],
    /// "three in a row", used in the result banner
    pub goal: &'a str,
    pub controls: &'a [(&'a str, &'a str)],
}

pub(crate) fn render_game_scene<G: CursorGame>(
    frame: &mut Frame,
    area: Rect,
    session: &Session<G>,
    scene: &SceneInfo,
    render_board: impl FnOnce(&mut Frame, Rect, &Session<G>),
) {
    let layout = create_game_layout(
        frame,
        area,
        scene.title,
        scene.border_color,
        scene.board_height,
        22,
    );

    render_board(frame, layout.content, session);

    let controller = &session.controller;
    if controller.is_over() {
        let (result_type, title, message) = result_summary(&controller.result(), scene.goal);
        render_game_over_banner(frame, layout.content, result_type, title, &message);
        render_status_bar(frame, layout.status_bar, "Game over", Color::Gray, &[]);
    } else if controller.is_ai_turn() {
        render_thinking_status_bar(frame, layout.status_bar, "Opponent is thinking...");
    } else if let Some(message) = &session.message {
        render_status_bar(frame, layout.status_bar, message, Color::Red, scene.controls);
    } else {
        render_status_bar(
            frame,
            layout.status_bar,
            "Your turn",
            Color::White,
            scene.controls,
        );
    }

    let inner = render_info_panel_frame(frame, layout.info_panel);
    let mut lines = vec![game_common::heading("RULES")];
    lines.extend(scene.rules.iter().map(|text| game_common::gray(text)));
    lines.push(Line::from(""));
    lines.extend(info_footer(
        controller.difficulty().name(),
        controller.scoreboard(),
    ));
    frame.render_widget(Paragraph::new(lines), inner);
}
