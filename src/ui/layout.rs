//! Layout components (form area, action panel, status bar)

use crate::app::App;
use crate::platform::SUBMIT_HINT;
use crate::state::Field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form (left) and action panel (right),
/// keeping the bottom line for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(rows[0]);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {}", focus_hints(app.form.focused_field())),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(SUBMIT_HINT, Style::default().fg(Color::Gray)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let width = (quit_hint.len() as u16).min(area.width);
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: status_area.y,
        width,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for whatever has focus
fn focus_hints(focused: Option<Field>) -> &'static str {
    match focused {
        Some(Field::Category) => "←/→:choose  Del:clear  Tab:next",
        Some(Field::ContactMethod) => "←/→:move  Space:select  Tab:next",
        Some(Field::Message) => "type  Enter:newline  Tab:next",
        Some(_) => "type  Enter:submit  Tab:next",
        None => "↑↓:select  Enter:press  Tab:back to form",
    }
}
