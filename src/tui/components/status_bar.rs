//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::engine::FixState;
use crate::latency::LatencyState;
use crate::models::OffsetMode;
use crate::tui::app::App;

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let fix_badge = match app.controller.fix_state() {
        FixState::Frozen => Span::styled(
            " FIX ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        FixState::Live => Span::styled(" LIVE ", Style::default().fg(Color::Green)),
    };

    let latency_span = match app.latency {
        Some(latency) => {
            let color = match latency.state {
                LatencyState::Good => Color::Green,
                LatencyState::Warning => Color::Yellow,
                LatencyState::Critical => Color::Red,
            };
            Span::styled(format!(" ⏱ {} ", latency.display()), Style::default().fg(color))
        }
        None => Span::raw(""),
    };

    let mode = match app.controller.offset_set().mode() {
        OffsetMode::Percentage => match app.settings.custom_offsets.trim() {
            "" => format!(" % {} ", app.settings.percentage_preset.key()),
            _ => " % eigene ".to_string(),
        },
        OffsetMode::Fixed => format!(" ± {} ", app.settings.offset_button_step),
    };

    let auto_confirm = if app.settings.auto_check_enabled {
        Span::styled(" Auto-Prüfung ", Style::default().fg(Color::Cyan))
    } else {
        Span::styled(" Manuell ", Style::default().fg(Color::DarkGray))
    };

    let status_span = match app.status {
        Some(ref status) => Span::styled(format!(" {} ", status.message), Style::default().fg(Color::White)),
        None => Span::raw(""),
    };

    let line = Line::from(vec![
        fix_badge,
        Span::raw("│"),
        latency_span,
        Span::raw("│"),
        Span::raw(mode),
        Span::raw("│"),
        auto_confirm,
        Span::raw("│"),
        status_span,
    ]);

    let para = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
