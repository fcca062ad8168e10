//! Game and difficulty selection.

use crate::ai::Difficulty;
use crate::app::{GameKind, Menu};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub fn render_menu(frame: &mut Frame, area: Rect, menu: &Menu) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Arcade ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(GameKind::ALL.len() as u16 + 1),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    let items: Vec<ListItem> = GameKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let selected = i == menu.selected;
            let prefix = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!("{}{}", prefix, kind.name())).style(style)
        })
        .collect();
    frame.render_widget(List::new(items), chunks[0]);

    let description = Paragraph::new(menu.game().description())
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(description, chunks[1]);

    let mut spans = vec![Span::styled(
        "Difficulty: ",
        Style::default().fg(Color::DarkGray),
    )];
    for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *difficulty == menu.difficulty {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", difficulty.name()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[2]);

    let help = Paragraph::new("[↑/↓] Game  [←/→] Difficulty  [Enter] Play  [Q] Quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[4]);
}
