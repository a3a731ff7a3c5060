//! Alert dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render an alert overlay centered on the screen
pub fn render_alert_dialog(frame: &mut Frame, message: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to close"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Notice",
            title_color: Color::Yellow,
            border_color: Color::Yellow,
            message,
            hint: Some(hint),
            max_width: 64,
            ..Default::default()
        },
    );
}
