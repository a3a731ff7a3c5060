//! Confirmation dialog for discarding the form

use super::base::{render_dialog, DialogConfig};
use crate::prompt::{ConfirmOption, PendingConfirm};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render a yes/no question with the current choice marked
pub fn render_confirm_dialog(frame: &mut Frame, pending: &PendingConfirm) {
    let options = [
        (ConfirmOption::No, Color::White),
        (ConfirmOption::Yes, Color::Red),
    ];

    let choices = options
        .into_iter()
        .map(|(option, color)| {
            let is_selected = pending.selected_option == option;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(format!("{prefix}{}", option.label()), style))
        })
        .collect();

    let hint = vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("y/n", Style::default().fg(Color::Cyan)),
        Span::styled(" answer", Style::default().fg(Color::DarkGray)),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Confirm",
            title_color: Color::Red,
            border_color: Color::Red,
            message: &pending.message,
            extra: choices,
            hint: Some(hint),
            max_width: 50,
        },
    );
}
