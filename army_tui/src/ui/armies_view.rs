//! Side-by-side army composition view

use super::{count_line, strength_bar};
use crate::app::App;
use army_core::army::SUMMARY_ORDER;
use army_core::{ArmyReport, ArmyState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Battle status
            Constraint::Min(0),    // Armies
        ])
        .split(area);

    draw_status(f, app, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let (first, second) = app.battle.reports();
    draw_army(f, &first, &app.opening.0, "First", columns[0]);
    draw_army(f, &second, &app.opening.1, "Second", columns[1]);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let result = match &app.outcome {
        Some(outcome) => Span::styled(
            outcome.summary(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        None if app.auto_run => Span::styled("Fighting...", Style::default().fg(Color::Green)),
        None => Span::styled("Paused", Style::default().fg(Color::DarkGray)),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Round: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} / {}", app.battle.rounds_fought(), app.battle.max_rounds()),
                Style::default().fg(Color::White),
            ),
            Span::raw("  "),
            Span::styled("Seed: ", Style::default().fg(Color::Gray)),
            Span::styled(
                app.battle
                    .seed()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(result),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Battle "));
    f.render_widget(paragraph, area);
}

fn draw_army(f: &mut Frame, report: &ArmyReport, opening: &ArmyReport, label: &str, area: Rect) {
    let state_color = match report.state {
        ArmyState::Defeated => Color::Red,
        ArmyState::Active => Color::Green,
        ArmyState::Forming => Color::Gray,
    };
    let bar_width = area.width.saturating_sub(4) as usize;

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                report.name.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(format!("{:?}", report.state), Style::default().fg(state_color)),
        ]),
        Line::from(vec![
            Span::styled("Units: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}/{}", report.soldier_count, opening.soldier_count),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" ({:.0}%)", report.strength() * 100.0),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(strength_bar(report.strength(), bar_width)),
        Line::from(vec![
            Span::styled("Health: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.0}/{:.0}", report.total_health, opening.total_health),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "── Alive / Recruited ──",
            Style::default().fg(Color::Blue),
        )),
    ];

    for kind in SUMMARY_ORDER {
        lines.push(count_line(
            kind.plural(),
            report.live.get(*kind),
            report.recruited.get(*kind),
        ));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} army ", label)),
    );
    f.render_widget(paragraph, area);
}
