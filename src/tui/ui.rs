//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app::App;
use super::components::{button_grid, performance_panel, status_bar};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Quote header
            Constraint::Min(5),    // Buttons + side panel
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    status_bar::render(frame, main_layout[0], app);
    render_quote_header(frame, main_layout[1], app);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_layout[2]);

    button_grid::render(frame, content[0], app);
    performance_panel::render(frame, content[1], app);

    render_keybindings(frame, main_layout[3]);
}

fn render_quote_header(frame: &mut Frame, area: Rect, app: &App) {
    let line = match (&app.quote_text, &app.quote_time) {
        (Some(text), time) => Line::from(vec![
            Span::styled(
                format!(" {text} "),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                time.as_deref().map(|t| format!(" {t} ")).unwrap_or_default(),
                Style::default().fg(Color::Gray),
            ),
        ]),
        (None, _) => Line::from(Span::styled(" Warte auf Kurs ", Style::default().fg(Color::DarkGray))),
    };
    let para = Paragraph::new(line).style(Style::default().bg(Color::Black));
    frame.render_widget(para, area);
}

fn render_keybindings(frame: &mut Frame, area: Rect) {
    let help = "[f]ix [Enter]limit [hjkl]move [a]uto-confirm [m]ode [<>]step [c]ount [+-]adjust [n]udge [q]uit";

    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}
