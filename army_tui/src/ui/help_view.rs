//! Help tab view

use crate::app::App;
use army_core::UnitKind;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "═══ Navigation ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("1-3", "Jump to tab (Armies/Log/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Scroll log"),
        key_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Battle ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        key_line("Space / n", "Fight one round"),
        key_line("a", "Toggle auto-run"),
        key_line("r", "New battle with a fresh seed"),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Mechanics ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from("  Each round the first army attacks, then the second answers."),
        Line::from("  An attack splits its damage evenly over the defender's front units."),
        Line::from("  Fewer survivors than targets: the same damage lands on fewer units."),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "  {:12}{:>8}{:>8}{:>8}{:>8}",
                "Unit", "Chance", "Damage", "Targets", "Health"
            ),
            Style::default().fg(Color::Yellow),
        )),
    ];

    for kind in UnitKind::all() {
        let stats = kind.stats();
        lines.push(Line::from(format!(
            "  {:12}{:>7.0}%{:>8.0}{:>8}{:>8.0}",
            kind.name(),
            kind.probability() * 100.0,
            stats.attack_power(),
            stats.target_count(),
            stats.max_health()
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Mechanics "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
