//! Limit button grid: one column per price type, positive offsets above
//! the main button and negative offsets below it.

use std::ops::Range;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::engine::FixState;
use crate::engine::format::split_faint_decimals;
use crate::tui::app::{App, ButtonView, ColumnView};

/// Renders the button grid.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let frozen = app.controller.fix_state() == FixState::Frozen;

    if app.panel.columns.is_empty() {
        let block = Block::default()
            .title(" Limit ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let para = Paragraph::new(Line::from(Span::styled(
            "Kein Kurs verfügbar",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(para, area);
        return;
    }

    let count = app.panel.columns.len() as u32;
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    let areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (index, (column, column_area)) in app.panel.columns.iter().zip(areas.iter()).enumerate() {
        let selected_row = (index == app.selection.column).then_some(app.selection.row);
        render_column(frame, *column_area, column, selected_row, frozen);
    }
}

fn render_column(frame: &mut Frame, area: Rect, column: &ColumnView, selected_row: Option<usize>, frozen: bool) {
    let border_style = if frozen {
        Style::default().fg(Color::Yellow)
    } else if selected_row.is_some() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = if frozen {
        format!(" {} [FIX] ", column.price_type.title())
    } else {
        format!(" {} ", column.price_type.title())
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let anchor = selected_row.unwrap_or_else(|| column.main_row());
    let window = visible_window(column.rows.len(), inner.height as usize, anchor);
    let width = inner.width as usize;

    let lines: Vec<Line> = column.rows[window.clone()]
        .iter()
        .zip(window)
        .map(|(button, row)| button_line(button, selected_row == Some(row), width))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn button_line(button: &ButtonView, selected: bool, width: usize) -> Line<'_> {
    let mut style = if button.info.disabled {
        Style::default().fg(Color::DarkGray)
    } else if button.is_main() {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else if button.offset.is_some_and(|o| o.is_sign_negative()) {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };
    if button.info.opacity < 1.0 {
        style = style.add_modifier(Modifier::DIM);
    }
    if selected {
        style = style.bg(Color::Cyan).fg(Color::Black);
    }

    let (sharp, faint) = split_faint_decimals(&button.info.label);
    let (left, right) = centered_padding(button.info.label.width(), width);

    Line::from(vec![
        Span::styled(" ".repeat(left), style),
        Span::styled(sharp, style),
        Span::styled(faint, style.add_modifier(Modifier::DIM)),
        Span::styled(" ".repeat(right), style),
    ])
}

/// Left and right padding that centers `content` columns within `width`.
fn centered_padding(content: usize, width: usize) -> (usize, usize) {
    let free = width.saturating_sub(content);
    (free / 2, free - free / 2)
}

/// Rows to show when `len` rows do not fit in `height`, keeping `anchor`
/// in the middle where possible.
fn visible_window(len: usize, height: usize, anchor: usize) -> Range<usize> {
    if len <= height {
        return 0..len;
    }
    let start = anchor.saturating_sub(height / 2).min(len - height);
    start..start + height
}
