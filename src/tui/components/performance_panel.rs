//! Order ticket and position performance side panel.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::App;

/// Renders the ticket limit, the adjuster nudge and the position figures.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Order ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let ticket = app.controller.target();
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Limit: "),
            Span::styled(app.limit_label(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::raw("Eingaben: "),
            Span::raw(ticket.submissions().to_string()),
            Span::raw(if ticket.is_confirmed() { "  → Prüfung" } else { "" }),
        ]),
    ];
    if app.settings.limit_adjuster_enabled {
        lines.push(Line::from(Span::styled(
            format!("+/- Schritt: {}", app.nudge().to_string().replace('.', ",")),
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(Line::raw(""));
    match app.performance() {
        Some(performance) => {
            let color = if performance.is_gain() { Color::Green } else { Color::Red };
            lines.push(Line::from(Span::styled(
                format!("Position: {} Stück", performance.quantity.normalize()),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for (label, value) in performance.rows() {
                let style = match label {
                    "Performance" | "Entwicklung seit Kauf" => Style::default().fg(color),
                    _ => Style::default(),
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
                    Span::styled(value, style),
                ]));
            }
        }
        None if app.position.is_some() => {
            lines.push(Line::from(Span::styled(
                "Performance nicht verfügbar",
                Style::default().fg(Color::DarkGray),
            )));
        }
        None => {}
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
