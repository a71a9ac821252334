//! Battle log view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .battle_log
        .iter()
        .skip(app.log_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|line| {
            let style = if line.starts_with("━━━") {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else if line.starts_with("★") {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if line.contains("LOW STRENGTH") || line.starts_with("Error") {
                Style::default().fg(Color::Red)
            } else if line.starts_with("▶") {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(line.as_str()).style(style)
        })
        .collect();

    let title = format!(" Battle Log ({} lines) ", app.battle_log.len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}
